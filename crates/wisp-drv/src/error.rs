//! `DriverError` - the one place in the workspace where every stage's
//! exception type is wrapped into a single enum.
//!
//! Each stage's `Result` stays independent so a stage's failure is
//! surfaced to the caller unchanged, not wrapped - that's why
//! `wisp-lex`/`wisp-par`/`wisp-sem`/`wisp-eval`/`wisp-gen` each keep their
//! own `thiserror` enum rather than sharing one. The driver sits at the
//! very end of the chain with nowhere further to propagate to, so it's
//! the one place `#[from]` wrapping is appropriate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("lex error: {0}")]
    Lex(#[from] wisp_lex::LexException),

    #[error("parse error: {0}")]
    Parse(#[from] wisp_par::ParseException),

    #[error("analysis error: {0}")]
    Analyze(#[from] wisp_sem::AnalyzeException),

    #[error("evaluation error: {0}")]
    Evaluate(#[from] wisp_eval::EvaluateException),

    #[error("code generation error: {0}")]
    Generate(#[from] wisp_gen::GenerateException),
}

pub type Result<T> = std::result::Result<T, DriverError>;
