//! EvaluateException - the failure shape for the evaluator.
//!
//! An evaluate failure carries a message and the offending AST node; as in
//! `wisp-sem`, the node's span stands in for a node reference since AST
//! nodes aren't `Copy`.

use thiserror::Error;
use wisp_util::Span;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EvaluateException {
    pub message: String,
    pub span: Span,
}

impl EvaluateException {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self { message: message.into(), span }
    }
}

pub type EvaluateResult<T> = Result<T, EvaluateException>;
