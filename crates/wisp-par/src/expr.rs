//! Expression grammar: the five binary-precedence levels down to
//! `primary`. Every binary level is left-associative, built
//! as a flat `while`-loop over same-precedence operators rather than
//! mutual recursion, the usual iterative precedence-climbing style for a
//! fixed, small set of binary levels.

use wisp_lex::TokenKind;

use crate::ast::*;
use crate::error::ParseResult;
use crate::literal;
use crate::{Pat, Parser};

impl Parser {
    pub(crate) fn expr(&mut self) -> ParseResult<Expr> {
        self.logical()
    }

    fn logical(&mut self) -> ParseResult<Expr> {
        let mut left = self.compare()?;
        loop {
            let op = if self.check(Pat::Lit("AND")) {
                BinOp::And
            } else if self.check(Pat::Lit("OR")) {
                BinOp::Or
            } else {
                break;
            };
            self.get();
            let right = self.compare()?;
            left = Self::fold(op, left, right);
        }
        Ok(left)
    }

    fn compare(&mut self) -> ParseResult<Expr> {
        let mut left = self.add()?;
        loop {
            let op = if self.check(Pat::Lit("<=")) {
                BinOp::Le
            } else if self.check(Pat::Lit(">=")) {
                BinOp::Ge
            } else if self.check(Pat::Lit("==")) {
                BinOp::Eq
            } else if self.check(Pat::Lit("!=")) {
                BinOp::Ne
            } else if self.check(Pat::Lit("<")) {
                BinOp::Lt
            } else if self.check(Pat::Lit(">")) {
                BinOp::Gt
            } else {
                break;
            };
            self.get();
            let right = self.add()?;
            left = Self::fold(op, left, right);
        }
        Ok(left)
    }

    fn add(&mut self) -> ParseResult<Expr> {
        let mut left = self.mul()?;
        loop {
            let op = if self.check(Pat::Lit("+")) {
                BinOp::Add
            } else if self.check(Pat::Lit("-")) {
                BinOp::Sub
            } else {
                break;
            };
            self.get();
            let right = self.mul()?;
            left = Self::fold(op, left, right);
        }
        Ok(left)
    }

    fn mul(&mut self) -> ParseResult<Expr> {
        let mut left = self.sec()?;
        loop {
            let op = if self.check(Pat::Lit("*")) {
                BinOp::Mul
            } else if self.check(Pat::Lit("/")) {
                BinOp::Div
            } else {
                break;
            };
            self.get();
            let right = self.sec()?;
            left = Self::fold(op, left, right);
        }
        Ok(left)
    }

    fn fold(op: BinOp, left: Expr, right: Expr) -> Expr {
        let span = left.span().to(right.span());
        Expr::Binary(BinaryExpr { op, left: Box::new(left), right: Box::new(right), span })
    }

    /// `sec := primary ('.' IDENT ('(' args? ')')?)*` - "sec" for the
    /// secondary/postfix level: property access and method calls chained
    /// off a primary expression.
    fn sec(&mut self) -> ParseResult<Expr> {
        let mut left = self.primary()?;
        while self.eat(Pat::Lit(".")) {
            let (name, name_span) = self.ident("a property or method name")?;
            if self.eat(Pat::Lit("(")) {
                let args = self.args()?;
                let end = self.expect(Pat::Lit(")"), "')'")?.span;
                let span = left.span().to(end);
                left = Expr::Method(MethodExpr { receiver: Box::new(left), name, args, span });
            } else {
                let span = left.span().to(name_span);
                left = Expr::Property(PropertyExpr { receiver: Box::new(left), name, span });
            }
        }
        Ok(left)
    }

    fn primary(&mut self) -> ParseResult<Expr> {
        if let Some(span) = self.take_span_if(Pat::Lit("NIL")) {
            return Ok(Expr::Literal(LiteralExpr { value: LiteralValue::Nil, span }));
        }
        if let Some(span) = self.take_span_if(Pat::Lit("TRUE")) {
            return Ok(Expr::Literal(LiteralExpr { value: LiteralValue::Boolean(true), span }));
        }
        if let Some(span) = self.take_span_if(Pat::Lit("FALSE")) {
            return Ok(Expr::Literal(LiteralExpr { value: LiteralValue::Boolean(false), span }));
        }
        if self.check(Pat::Kind(TokenKind::Integer)) {
            let token = self.get();
            let value = literal::decode_integer(&token.literal, token.span)?;
            return Ok(Expr::Literal(LiteralExpr { value: LiteralValue::Integer(value), span: token.span }));
        }
        if self.check(Pat::Kind(TokenKind::Decimal)) {
            let token = self.get();
            let value = literal::decode_decimal(&token.literal, token.span)?;
            return Ok(Expr::Literal(LiteralExpr { value: LiteralValue::Decimal(value), span: token.span }));
        }
        if self.check(Pat::Kind(TokenKind::Character)) {
            let token = self.get();
            let value = literal::decode_character(&token.literal, token.span)?;
            return Ok(Expr::Literal(LiteralExpr { value: LiteralValue::Character(value), span: token.span }));
        }
        if self.check(Pat::Kind(TokenKind::String)) {
            let token = self.get();
            let value = literal::decode_string(&token.literal, token.span)?;
            return Ok(Expr::Literal(LiteralExpr { value: LiteralValue::String(value), span: token.span }));
        }
        if self.check(Pat::Lit("(")) {
            return self.group();
        }
        if self.check(Pat::Lit("OBJECT")) {
            return self.object_expr();
        }
        if self.check(Pat::Kind(TokenKind::Identifier)) {
            return self.var_or_call();
        }
        self.fail("expected an expression")
    }

    fn take_span_if(&mut self, pat: Pat) -> Option<wisp_util::Span> {
        if self.check(pat) {
            Some(self.get().span)
        } else {
            None
        }
    }

    fn group(&mut self) -> ParseResult<Expr> {
        let start = self.expect(Pat::Lit("("), "'('")?.span;
        let inner = self.expr()?;
        let end = self.expect(Pat::Lit(")"), "')'")?.span;
        Ok(Expr::Group(GroupExpr { inner: Box::new(inner), span: start.to(end) }))
    }

    /// `object := 'OBJECT' IDENT? 'DO' (let)* (def)* 'END'`, enforcing
    /// that every field precedes every method.
    fn object_expr(&mut self) -> ParseResult<Expr> {
        let start = self.expect(Pat::Lit("OBJECT"), "'OBJECT'")?.span;
        let name = if self.check(Pat::Lit("DO")) { None } else { Some(self.ident("an object name")?.0) };
        self.expect(Pat::Lit("DO"), "'DO'")?;

        let mut fields = Vec::new();
        while self.check(Pat::Lit("LET")) {
            fields.push(self.let_field()?);
        }
        let mut methods = Vec::new();
        while self.check(Pat::Lit("DEF")) {
            methods.push(self.def_method()?);
        }
        if self.check(Pat::Lit("LET")) {
            return self.fail("a field declaration cannot follow a method in an object literal");
        }

        let end = self.expect(Pat::Lit("END"), "'END'")?.span;
        Ok(Expr::ObjectExpr(ObjectExpr { name, fields, methods, span: start.to(end) }))
    }

    /// `var_or_call := IDENT ('(' args? ')')?`
    fn var_or_call(&mut self) -> ParseResult<Expr> {
        let (name, span) = self.ident("a variable or function name")?;
        if self.eat(Pat::Lit("(")) {
            let args = self.args()?;
            let end = self.expect(Pat::Lit(")"), "')'")?.span;
            Ok(Expr::Function(FunctionExpr { name, args, span: span.to(end) }))
        } else {
            Ok(Expr::Variable(VariableExpr { name, span }))
        }
    }

    fn args(&mut self) -> ParseResult<Vec<Expr>> {
        let mut args = Vec::new();
        if self.check(Pat::Lit(")")) {
            return Ok(args);
        }
        loop {
            args.push(self.expr()?);
            if !self.eat(Pat::Lit(",")) {
                break;
            }
        }
        Ok(args)
    }
}
