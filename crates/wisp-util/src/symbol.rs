//! Symbol - interned identifier and literal text.
//!
//! Identifiers, string literal payloads and diagnostic labels all flow
//! through the pipeline many times (once per AST node that mentions them,
//! again in the IR, again in error messages). Interning means each distinct
//! spelling is stored exactly once and every occurrence after the first is
//! just a 4-byte index, so `Symbol` equality is an integer compare rather
//! than a string compare.
//!
//! The interner here is intentionally simpler than a production
//! multi-threaded one (the toolchain itself is single-threaded per the
//! runtime model), but keeps the same externally observable behavior:
//! interning the same text twice returns the same `Symbol`, and the
//! original text can always be recovered with [`Symbol::as_str`].

use std::cell::RefCell;
use std::fmt;

use indexmap::IndexSet;

thread_local! {
    static INTERNER: RefCell<IndexSet<Box<str>, ahash::RandomState>> =
        RefCell::new(IndexSet::with_hasher(ahash::RandomState::new()));
}

/// A compact, interned handle to a string.
///
/// Two `Symbol`s compare equal iff the text they were interned from is
/// equal. `Symbol` is `Copy`, so it can be threaded through the AST/IR
/// without cloning the underlying text.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

impl Symbol {
    /// Intern `text`, returning the `Symbol` for it.
    ///
    /// ```
    /// use wisp_util::Symbol;
    ///
    /// let a = Symbol::intern("length");
    /// let b = Symbol::intern("length");
    /// assert_eq!(a, b);
    /// assert_eq!(a.as_str(), "length");
    /// ```
    pub fn intern(text: &str) -> Self {
        INTERNER.with(|table| {
            let mut table = table.borrow_mut();
            if let Some(idx) = table.get_index_of(text) {
                return Symbol(idx as u32);
            }
            let (idx, _) = table.insert_full(text.into());
            Symbol(idx as u32)
        })
    }

    /// Recover the original text for this symbol.
    ///
    /// The returned `String` is a fresh copy rather than a borrow, since
    /// the thread-local table cannot hand out references tied to its own
    /// `RefCell` borrow.
    pub fn as_str(&self) -> String {
        INTERNER.with(|table| table.borrow()[self.0 as usize].to_string())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", self.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_text_interns_to_same_symbol() {
        let a = Symbol::intern("prototype");
        let b = Symbol::intern("prototype");
        assert_eq!(a, b);
    }

    #[test]
    fn different_text_interns_to_different_symbols() {
        let a = Symbol::intern("x");
        let b = Symbol::intern("y");
        assert_ne!(a, b);
    }

    #[test]
    fn round_trips_through_as_str() {
        let sym = Symbol::intern("fibonacci");
        assert_eq!(sym.as_str(), "fibonacci");
    }
}
