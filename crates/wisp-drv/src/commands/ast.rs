//! `wispc ast <FILE>` - lex and parse, then print the untyped AST.

use std::path::Path;

use tracing::info;
use wisp_lex::Lexer;
use wisp_par::Parser;

use super::read_source;
use crate::error::Result;

pub fn run_ast(path: &Path) -> Result<()> {
    let source = read_source(path)?;
    let tokens = Lexer::tokenize(&source)?;
    let ast = Parser::parse_source(tokens)?;
    info!(statements = ast.statements.len(), "parsed source");
    println!("{ast:#?}");
    Ok(())
}
