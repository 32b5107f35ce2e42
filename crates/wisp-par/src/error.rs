//! ParseException - the failure shape for the parser.
//!
//! A parse failure refers to the offending token, or end-of-input;
//! [`ParseLocation`] carries that distinction explicitly rather than using
//! a sentinel span - modeling "the thing that actually happened" as a real
//! enum variant instead of encoding it into a magic value.

use thiserror::Error;
use wisp_util::Span;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseLocation {
    Token(Span),
    EndOfInput,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseException {
    pub message: String,
    pub location: ParseLocation,
}

impl ParseException {
    pub fn new(message: impl Into<String>, location: ParseLocation) -> Self {
        Self { message: message.into(), location }
    }

    pub fn at(message: impl Into<String>, span: Span) -> Self {
        Self::new(message, ParseLocation::Token(span))
    }

    pub fn eof(message: impl Into<String>) -> Self {
        Self::new(message, ParseLocation::EndOfInput)
    }
}

pub type ParseResult<T> = Result<T, ParseException>;
