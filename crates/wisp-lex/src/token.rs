//! Token - the lexer's output unit.
//!
//! A token is a pair (kind, literal) where the literal preserves exact
//! source spelling, which downstream stages parse semantically. Keywords
//! are *not* a distinct token kind: they are identifiers that the parser
//! treats specially by literal text comparison (`LET`, `IF`, `DO`, ...), so
//! the lexer only ever produces the six kinds below.

use wisp_util::Span;

/// The six token kinds the lexer produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    Integer,
    Decimal,
    Character,
    String,
    Operator,
}

/// A lexed token: its kind, its exact source spelling, and the span it
/// came from.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Self { kind, literal: literal.into(), span }
    }

    /// Does this token's kind or exact literal text match `pattern`? Used
    /// by the parser, which looks ahead by kind or by literal (e.g.
    /// matching the keyword `LET` is a literal match on an `Identifier`
    /// token, matching `;` is a literal match on an `Operator` token).
    pub fn is(&self, pattern: &str) -> bool {
        self.literal == pattern
    }

    pub fn is_kind(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
