//! wisp-par - Parser (Syntactic Analyzer)
//!
//! ```text
//!  token sequence (from wisp-lex)
//!        |
//!        v
//!  +------------+     has/peek/eat/expect, lookahead by kind or literal
//!  |   Parser   |
//!  +------------+
//!        |
//!        v
//!  Source / Stmt / Expr  (the untyped AST)
//! ```
//!
//! Architecture: recursive descent with single-token lookahead, one
//! function per grammar production, grouped by concern across this
//! module (the struct and its token-stream primitives), [`stmt`] (`let`,
//! `def`, `if`, `for`, `return`, `exprOrAssign`) and [`expr`] (the five
//! binary-precedence levels plus `primary`). No backtracking: every
//! dispatch decision is made on the current token (and, for the
//! number-vs-operator case already resolved in the lexer, nowhere in this
//! crate at all).
//!
//! Keywords are recognized the same way the lexer chose not to
//! distinguish them: `check("LET")` matches an `Identifier` token whose
//! literal text is `"LET"`. There is no separate keyword token kind.

mod ast;
mod error;
mod expr;
mod literal;
mod stmt;

pub use ast::*;
pub use error::{ParseException, ParseLocation, ParseResult};

use wisp_lex::{Token, TokenKind};
use wisp_util::{Span, Symbol};

/// What a single lookahead position is checked against: a token kind, or
/// an exact literal (used for keywords and punctuation alike - a pattern
/// is either a kind or a literal).
#[derive(Clone, Copy, Debug)]
pub enum Pat {
    Kind(TokenKind),
    Lit(&'static str),
}

impl Pat {
    fn matches(self, token: &Token) -> bool {
        match self {
            Pat::Kind(kind) => token.is_kind(kind),
            Pat::Lit(text) => token.is(text),
        }
    }
}

pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, position: 0 }
    }

    /// Parse the whole token stream as the `source` start rule.
    pub fn parse_source(tokens: Vec<Token>) -> ParseResult<Source> {
        let mut parser = Self::new(tokens);
        let source = parser.source()?;
        parser.expect_end()?;
        Ok(source)
    }

    /// Parse the whole token stream as a single `stmt` start rule.
    pub fn parse_stmt_entry(tokens: Vec<Token>) -> ParseResult<Stmt> {
        let mut parser = Self::new(tokens);
        let stmt = parser.stmt()?;
        parser.expect_end()?;
        Ok(stmt)
    }

    /// Parse the whole token stream as a single `expr` start rule.
    pub fn parse_expr_entry(tokens: Vec<Token>) -> ParseResult<Expr> {
        let mut parser = Self::new(tokens);
        let expr = parser.expr()?;
        parser.expect_end()?;
        Ok(expr)
    }

    fn source(&mut self) -> ParseResult<Source> {
        let mut statements = Vec::new();
        while self.has(0) {
            statements.push(self.stmt()?);
        }
        Ok(Source { statements })
    }

    fn expect_end(&self) -> ParseResult<()> {
        if self.has(0) {
            Err(ParseException::at(
                format!("unexpected trailing token {:?}", self.tokens[self.position].literal),
                self.tokens[self.position].span,
            ))
        } else {
            Ok(())
        }
    }

    // -- token-stream primitives (has/peek/match/get) -----

    fn has(&self, offset: usize) -> bool {
        self.position + offset < self.tokens.len()
    }

    fn token_at(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.position + offset)
    }

    fn peek(&self, offset: usize, pat: Pat) -> bool {
        self.token_at(offset).is_some_and(|t| pat.matches(t))
    }

    fn check(&self, pat: Pat) -> bool {
        self.peek(0, pat)
    }

    fn current_span(&self) -> Span {
        match self.token_at(0) {
            Some(t) => t.span,
            None => self.end_of_input_span(),
        }
    }

    fn end_of_input_span(&self) -> Span {
        self.tokens
            .last()
            .map(|t| Span::point(t.span.end))
            .unwrap_or(Span::DUMMY)
    }

    /// Consume and return the current token unconditionally; callers must
    /// have already verified with `has`/`check` that one exists.
    fn get(&mut self) -> Token {
        let token = self.tokens[self.position].clone();
        self.position += 1;
        token
    }

    /// Consume the current token if it matches `pat`.
    fn eat(&mut self, pat: Pat) -> bool {
        if self.check(pat) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Consume the current token if it matches `pat`, else fail with
    /// `what` describing what was expected.
    fn expect(&mut self, pat: Pat, what: &str) -> ParseResult<Token> {
        if self.check(pat) {
            Ok(self.get())
        } else {
            self.fail(format!("expected {what}"))
        }
    }

    fn fail<T>(&self, message: impl Into<String>) -> ParseResult<T> {
        match self.token_at(0) {
            Some(token) => Err(ParseException::at(message, token.span)),
            None => Err(ParseException::eof(message)),
        }
    }

    /// Consume an `IDENT` token and intern its text.
    fn ident(&mut self, what: &str) -> ParseResult<(Symbol, Span)> {
        let token = self.expect(Pat::Kind(TokenKind::Identifier), what)?;
        Ok((Symbol::intern(&token.literal), token.span))
    }

    /// Consume an optional `: IDENT` type annotation.
    fn optional_type_annotation(&mut self) -> ParseResult<Option<Symbol>> {
        if self.eat(Pat::Lit(":")) {
            Ok(Some(self.ident("a type name")?.0))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wisp_lex::Lexer;

    fn parse(src: &str) -> ParseResult<Source> {
        let tokens = Lexer::tokenize(src).expect("lex should succeed in these fixtures");
        Parser::parse_source(tokens)
    }

    #[test]
    fn parses_let_with_binary_expression() {
        let source = parse("LET x = 1 + 2;").unwrap();
        assert_eq!(source.statements.len(), 1);
        match &source.statements[0] {
            Stmt::Let(LetStmt { value: Some(Expr::Binary(b)), .. }) => assert_eq!(b.op, BinOp::Add),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn parses_recursive_function_definition() {
        let source = parse(
            "DEF fib(n) DO IF n <= 1 DO RETURN n; END RETURN fib(n - 1) + fib(n - 2); END",
        )
        .unwrap();
        assert_eq!(source.statements.len(), 1);
        assert!(matches!(&source.statements[0], Stmt::Def(d) if d.name.as_str() == "fib"));
    }

    #[test]
    fn return_with_guard_desugars_to_if() {
        let source = parse("DEF f() DO RETURN 1 IF TRUE; END").unwrap();
        let Stmt::Def(def) = &source.statements[0] else { panic!("expected def") };
        match &def.body[0] {
            Stmt::If(if_stmt) => {
                assert!(if_stmt.else_body.is_empty());
                assert!(matches!(if_stmt.then_body[0], Stmt::Return(_)));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn method_chain_and_property_access() {
        let source = parse("LET v = o.get().x;").unwrap();
        let Stmt::Let(let_stmt) = &source.statements[0] else { panic!("expected let") };
        assert!(matches!(let_stmt.value, Some(Expr::Property(_))));
    }

    #[test]
    fn object_literal_with_field_then_method() {
        let source =
            parse("LET o = OBJECT DO LET x = 1; DEF get() DO RETURN this.x; END END;").unwrap();
        let Stmt::Let(let_stmt) = &source.statements[0] else { panic!("expected let") };
        match &let_stmt.value {
            Some(Expr::ObjectExpr(obj)) => {
                assert_eq!(obj.fields.len(), 1);
                assert_eq!(obj.methods.len(), 1);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn rejects_field_after_method_in_object() {
        let err = parse("LET o = OBJECT DO DEF get() DO RETURN 1; END LET x = 1; END;").unwrap_err();
        assert!(err.message.contains("field"));
    }

    #[test]
    fn for_loop_over_range_call() {
        let source = parse("FOR i IN range(0, 3) DO log(i); END").unwrap();
        assert!(matches!(&source.statements[0], Stmt::For(_)));
    }

    #[test]
    fn and_or_are_left_associative_logical_operators() {
        let source = parse("LET x = TRUE AND FALSE OR TRUE;").unwrap();
        let Stmt::Let(let_stmt) = &source.statements[0] else { panic!("expected let") };
        match &let_stmt.value {
            Some(Expr::Binary(outer)) => assert_eq!(outer.op, BinOp::Or),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn rejects_trailing_tokens_after_source() {
        let tokens = Lexer::tokenize("LET x = 1; )").unwrap();
        assert!(Parser::parse_source(tokens).is_err());
    }

    #[test]
    fn string_literal_decodes_escape() {
        let expr = Parser::parse_expr_entry(Lexer::tokenize(r#""a\nb""#).unwrap()).unwrap();
        match expr {
            Expr::Literal(lit) => assert_eq!(lit.value, LiteralValue::String("a\nb".to_string())),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
