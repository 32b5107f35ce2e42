//! wisp-gen - IR → Code Generator Contract
//!
//! ```text
//!  ir::Source (typed IR, from wisp-sem)
//!        |
//!        v
//!  +------------+
//!  |  CodeGen   |     the contract for an external
//!  +------------+     host-language backend
//!        |
//!        v
//!  Self::Output (whatever the implementation emits)
//! ```
//!
//! The code generator is treated as an external collaborator: the core
//! pipeline (`wisp-lex`/`wisp-par`/`wisp-sem`/`wisp-eval`) only has to
//! hand it a typed IR that carries enough information to re-emit
//! faithful host-language code. This crate pins down that contract as
//! the [`CodeGen`] trait and ships [`TextEmitter`], a minimal reference
//! implementation that exercises every IR shape without committing to
//! any particular host language or backend (no LLVM, no native target).

mod codegen;
mod emitter;
pub mod error;

pub use codegen::CodeGen;
pub use emitter::TextEmitter;
pub use error::{GenerateException, GenerateResult};
