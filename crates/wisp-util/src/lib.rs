//! wisp-util - shared foundation types for the wisp toolchain.
//!
//! Every other crate in the workspace (`wisp-lex`, `wisp-par`, `wisp-sem`,
//! `wisp-eval`, `wisp-gen`, `wisp-drv`) depends on this crate for the pieces
//! that are not specific to any one compilation stage:
//!
//! - [`Symbol`] - interned identifier/string text, so the same spelling is
//!   never stored twice and comparisons are a pointer/index check.
//! - [`Span`] - a byte-offset range into the original source, attached to
//!   every token, AST node and diagnostic.
//! - [`Scope`] - the lexical, parent-chained name -> binding map shared by
//!   the analyzer (`Scope<Type>`) and the evaluator (`Scope<Value>`).
//! - [`diagnostic`] - the `Diagnostic`/`Level`/`Handler` machinery used to
//!   report lexer, parser, analyzer and evaluator failures uniformly.

mod scope;
mod span;
mod symbol;

pub mod diagnostic;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use scope::{DuplicateBindingError, Scope, UnboundNameError};
pub use span::Span;
pub use symbol::Symbol;
