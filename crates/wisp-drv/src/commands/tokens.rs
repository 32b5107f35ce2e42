//! `wispc tokens <FILE>` - lex only, and print the token stream. A debug
//! aid for inspecting the lexer's output in isolation.

use std::path::Path;

use tracing::info;
use wisp_lex::Lexer;

use super::read_source;
use crate::error::Result;

pub fn run_tokens(path: &Path) -> Result<()> {
    let source = read_source(path)?;
    let tokens = Lexer::tokenize(&source)?;
    info!(count = tokens.len(), "lexed token stream");
    for token in &tokens {
        println!("{token:?}");
    }
    Ok(())
}
