//! LexException - the failure shape for the lexer.
//!
//! A lex failure carries a message and the byte offset at the failing
//! position. Each downstream stage gets its own exception type rather than
//! a shared top-level error enum - one error enum per crate.

use thiserror::Error;
use wisp_util::Span;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LexException {
    pub message: String,
    pub span: Span,
}

impl LexException {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self { message: message.into(), span }
    }

    pub fn at(message: impl Into<String>, offset: usize) -> Self {
        Self::new(message, Span::point(offset))
    }
}

pub type LexResult<T> = Result<T, LexException>;
