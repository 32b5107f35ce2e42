//! AnalyzeException - the failure shape for the analyzer.
//!
//! An analyze failure carries a message and the offending AST node; since
//! AST nodes aren't `Copy` we carry the node's span instead, which is
//! what every downstream consumer (a driver printing a diagnostic)
//! actually needs.

use thiserror::Error;
use wisp_util::Span;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AnalyzeException {
    pub message: String,
    pub span: Span,
}

impl AnalyzeException {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self { message: message.into(), span }
    }
}

pub type AnalyzeResult<T> = Result<T, AnalyzeException>;
