//! GenerateException - the failure shape at the IR → host-code boundary.
//!
//! The code generator is an external collaborator; this crate only
//! carries the contract it's handed (the typed IR) and a minimal
//! reference implementation of it, so this error exists mainly to let
//! that reference emitter reject an IR shape it does not know how to map
//! (generics and modules are out of scope, so every legal IR node maps
//! onto something, but `unreachable` panics still have no place in a
//! library crate).

use thiserror::Error;
use wisp_util::Span;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GenerateException {
    pub message: String,
    pub span: Span,
}

impl GenerateException {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self { message: message.into(), span }
    }
}

pub type GenerateResult<T> = Result<T, GenerateException>;
