//! `wispc run <FILE>` - lex, parse, analyze (diagnostics only) and then
//! evaluate with the default runtime environment.
//!
//! The analysis pass runs for its diagnostics even though `wisp-eval`
//! does not consume its IR: a script that type-checks cleanly is far
//! more likely to behave as intended, and running the analyzer first
//! surfaces a type error before any side-effecting evaluation happens.

use std::path::Path;

use tracing::info;
use wisp_eval::Evaluator;
use wisp_lex::Lexer;
use wisp_par::Parser;

use super::read_source;
use crate::error::Result;

pub fn run_run(path: &Path) -> Result<()> {
    let source = read_source(path)?;
    let tokens = Lexer::tokenize(&source)?;
    let ast = Parser::parse_source(tokens)?;
    wisp_sem::analyze(&ast)?;
    info!(file = %path.display(), "analyzed cleanly, evaluating");
    Evaluator::new().eval_source(&ast)?;
    Ok(())
}
