//! The four `wispc` subcommands. Each is a plain function rather than a
//! `Command`/`CommandDescription`/`ProgressReporting` trait trio: that
//! scaffolding earns its keep for a multi-file build/convert tool
//! reporting item counts and progress bars, but `wispc` only ever drives
//! one file through the pipeline once per invocation, so a trait object
//! and a `CommandResult<T>` builder would be
//! ceremony with nothing left to report.

mod ast;
mod ir;
mod run;
mod tokens;

pub use ast::run_ast;
pub use ir::run_ir;
pub use run::run_run;
pub use tokens::run_tokens;

use std::path::Path;

use crate::error::Result;

fn read_source(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}
