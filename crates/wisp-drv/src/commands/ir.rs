//! `wispc ir <FILE>` - lex, parse and analyze, then print the typed IR:
//! the boundary an external code generator would consume.

use std::path::Path;

use tracing::info;
use wisp_lex::Lexer;
use wisp_par::Parser;

use super::read_source;
use crate::error::Result;

pub fn run_ir(path: &Path) -> Result<()> {
    let source = read_source(path)?;
    let tokens = Lexer::tokenize(&source)?;
    let ast = Parser::parse_source(tokens)?;
    let ir = wisp_sem::analyze(&ast)?;
    info!(statements = ir.statements.len(), "analyzed source");
    println!("{ir:#?}");
    Ok(())
}
