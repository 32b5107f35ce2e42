//! Statement grammar: `let | def | if | for | return | exprOrAssign`.

use crate::ast::*;
use crate::error::ParseResult;
use crate::{Pat, Parser};

impl Parser {
    pub(crate) fn stmt(&mut self) -> ParseResult<Stmt> {
        if self.check(Pat::Lit("LET")) {
            self.let_stmt()
        } else if self.check(Pat::Lit("DEF")) {
            self.def_stmt()
        } else if self.check(Pat::Lit("IF")) {
            self.if_stmt()
        } else if self.check(Pat::Lit("FOR")) {
            self.for_stmt()
        } else if self.check(Pat::Lit("RETURN")) {
            self.return_stmt()
        } else {
            self.expr_or_assign_stmt()
        }
    }

    fn block(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();
        while !self.check(Pat::Lit("END")) && !self.check(Pat::Lit("ELSE")) {
            if !self.has(0) {
                return self.fail("expected 'END'");
            }
            statements.push(self.stmt()?);
        }
        Ok(statements)
    }

    fn let_stmt(&mut self) -> ParseResult<Stmt> {
        let start = self.expect(Pat::Lit("LET"), "'LET'")?.span;
        let (name, _) = self.ident("a variable name")?;
        let declared_type = self.optional_type_annotation()?;
        let value = if self.eat(Pat::Lit("=")) { Some(self.expr()?) } else { None };
        let end = self.expect(Pat::Lit(";"), "';'")?.span;
        Ok(Stmt::Let(LetStmt { name, declared_type, value, span: start.to(end) }))
    }

    /// Parses the `LET` production directly, for use inside object
    /// literals (`object := ... (let)* (def)* ...`).
    pub(crate) fn let_field(&mut self) -> ParseResult<LetStmt> {
        match self.let_stmt()? {
            Stmt::Let(field) => Ok(field),
            _ => unreachable!("let_stmt always produces Stmt::Let"),
        }
    }

    fn params(&mut self) -> ParseResult<Vec<Param>> {
        let mut params = Vec::new();
        if self.check(Pat::Lit(")")) {
            return Ok(params);
        }
        loop {
            let (name, _) = self.ident("a parameter name")?;
            let type_name = self.optional_type_annotation()?;
            params.push(Param { name, type_name });
            if !self.eat(Pat::Lit(",")) {
                break;
            }
        }
        Ok(params)
    }

    fn def_stmt(&mut self) -> ParseResult<Stmt> {
        let start = self.expect(Pat::Lit("DEF"), "'DEF'")?.span;
        let (name, _) = self.ident("a function name")?;
        self.expect(Pat::Lit("("), "'('")?;
        let params = self.params()?;
        self.expect(Pat::Lit(")"), "')'")?;
        let return_type = self.optional_type_annotation()?;
        self.expect(Pat::Lit("DO"), "'DO'")?;
        let body = self.block()?;
        let end = self.expect(Pat::Lit("END"), "'END'")?.span;
        Ok(Stmt::Def(DefStmt { name, params, return_type, body, span: start.to(end) }))
    }

    /// Parses the `DEF` production directly, for use inside object
    /// literals.
    pub(crate) fn def_method(&mut self) -> ParseResult<DefStmt> {
        match self.def_stmt()? {
            Stmt::Def(method) => Ok(method),
            _ => unreachable!("def_stmt always produces Stmt::Def"),
        }
    }

    fn if_stmt(&mut self) -> ParseResult<Stmt> {
        let start = self.expect(Pat::Lit("IF"), "'IF'")?.span;
        let cond = self.expr()?;
        self.expect(Pat::Lit("DO"), "'DO'")?;
        let then_body = self.block()?;
        let else_body = if self.eat(Pat::Lit("ELSE")) { self.block()? } else { Vec::new() };
        let end = self.expect(Pat::Lit("END"), "'END'")?.span;
        Ok(Stmt::If(IfStmt { cond, then_body, else_body, span: start.to(end) }))
    }

    fn for_stmt(&mut self) -> ParseResult<Stmt> {
        let start = self.expect(Pat::Lit("FOR"), "'FOR'")?.span;
        let (name, _) = self.ident("a loop variable name")?;
        self.expect(Pat::Lit("IN"), "'IN'")?;
        let iterable = self.expr()?;
        self.expect(Pat::Lit("DO"), "'DO'")?;
        let body = self.block()?;
        let end = self.expect(Pat::Lit("END"), "'END'")?.span;
        Ok(Stmt::For(ForStmt { name, iterable, body, span: start.to(end) }))
    }

    fn return_stmt(&mut self) -> ParseResult<Stmt> {
        let start = self.expect(Pat::Lit("RETURN"), "'RETURN'")?.span;
        // A `RETURN` with no value is followed directly by `;` or by the
        // `IF` of a guard clause - both keywords, neither a legal start of
        // `expr` in practice, so their presence means "no value" without
        // needing to speculatively parse an expression first.
        let value = if self.check(Pat::Lit(";")) || self.check(Pat::Lit("IF")) {
            None
        } else {
            Some(self.expr()?)
        };
        let guard = if self.eat(Pat::Lit("IF")) { Some(self.expr()?) } else { None };
        let end = self.expect(Pat::Lit(";"), "';'")?.span;
        let span = start.to(end);
        let ret = Stmt::Return(ReturnStmt { value, span });
        match guard {
            Some(cond) => Ok(Stmt::If(IfStmt { cond, then_body: vec![ret], else_body: Vec::new(), span })),
            None => Ok(ret),
        }
    }

    fn expr_or_assign_stmt(&mut self) -> ParseResult<Stmt> {
        let expr = self.expr()?;
        if self.eat(Pat::Lit("=")) {
            let value = self.expr()?;
            let end = self.expect(Pat::Lit(";"), "';'")?.span;
            let span = expr.span().to(end);
            Ok(Stmt::Assignment(AssignmentStmt { target: expr, value, span }))
        } else {
            self.expect(Pat::Lit(";"), "';'")?;
            Ok(Stmt::Expression(expr))
        }
    }
}
