//! The `CodeGen` trait: the contract for the external collaborator - a
//! host-language backend that consumes the analyzer's typed IR and emits
//! equivalent code in some target language. This crate does not build
//! that backend (no LLVM, no native target); it only pins down the
//! contract precisely enough that a real one - in whatever host language
//! - has no ambiguity left to resolve on its own.
//!
//! The three contracts a conforming `CodeGen` must honor:
//! - Binary operator tags are preserved and unique (see [`wisp_par::BinOp::as_str`]).
//! - Division result type distinguishes integer vs. decimal, so the
//!   generator can select the correct host call.
//! - Object-expression IR carries field and method lists in declaration
//!   order, not carried over from any particular scope's iteration.

use wisp_sem::ir;

use crate::error::GenerateResult;

/// Consumes a typed IR [`ir::Source`] and produces `Self::Output` - a
/// string of target-language text for [`crate::TextEmitter`], or
/// whatever representation a real backend chooses.
pub trait CodeGen {
    type Output;

    fn emit_source(&mut self, source: &ir::Source) -> GenerateResult<Self::Output>;
}
