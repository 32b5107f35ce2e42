//! `wispc` - the wisp toolchain driver.
//!
//! This binary is ambient scaffolding, not a core pipeline stage: its
//! only job is to exercise the four core stages - lexer, parser,
//! analyzer, evaluator - end to end from the command line, and to expose
//! the typed IR at the boundary an external code generator would consume.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_ast, run_ir, run_run, run_tokens};
use config::Config;
use error::{DriverError, Result};

#[derive(Parser, Debug)]
#[command(name = "wispc")]
#[command(author = "wisp contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "The wisp toolchain driver", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true, env = "WISPC_VERBOSE")]
    verbose: bool,

    /// Path to a `wisp.toml` configuration file.
    #[arg(short, long, global = true, env = "WISPC_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lex, parse, analyze and evaluate a source file.
    Run(FileArgs),

    /// Lex a source file and print its token stream.
    Tokens(FileArgs),

    /// Lex and parse a source file and print its AST.
    Ast(FileArgs),

    /// Lex, parse and analyze a source file and print its typed IR.
    Ir(FileArgs),
}

#[derive(Parser, Debug)]
struct FileArgs {
    /// The `.wisp` source file to process.
    file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    execute_command(cli.command, verbose)
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose { EnvFilter::new("debug") } else { EnvFilter::new("info") };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_thread_ids(false).with_thread_names(false))
        .try_init()
        .map_err(|e| DriverError::Config(format!("failed to initialize logging: {e}")))?;

    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn execute_command(command: Commands, _verbose: bool) -> Result<()> {
    match command {
        Commands::Run(args) => run_run(&args.file),
        Commands::Tokens(args) => run_tokens(&args.file),
        Commands::Ast(args) => run_ast(&args.file),
        Commands::Ir(args) => run_ir(&args.file),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_run_subcommand() {
        let cli = Cli::parse_from(["wispc", "run", "a.wisp"]);
        assert!(matches!(cli.command, Commands::Run(_)));
    }

    #[test]
    fn parses_tokens_subcommand_with_file() {
        let cli = Cli::parse_from(["wispc", "tokens", "a.wisp"]);
        match cli.command {
            Commands::Tokens(args) => assert_eq!(args.file, PathBuf::from("a.wisp")),
            other => panic!("expected Tokens, got {other:?}"),
        }
    }

    #[test]
    fn parses_global_verbose_before_subcommand() {
        let cli = Cli::parse_from(["wispc", "--verbose", "ast", "a.wisp"]);
        assert!(cli.verbose);
    }

    #[test]
    fn parses_global_config_path() {
        let cli = Cli::parse_from(["wispc", "--config", "wisp.toml", "ir", "a.wisp"]);
        assert_eq!(cli.config, Some(PathBuf::from("wisp.toml")));
    }
}
