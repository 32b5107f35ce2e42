//! Scope - the lexical name -> binding map shared by every stage that needs
//! one, parameterized over what a "binding" actually is:
//!
//! - the analyzer instantiates `Scope<Type>` (name -> resolved type)
//! - the evaluator instantiates `Scope<Value>` (name -> runtime value)
//!
//! An ordered name->binding mapping plus an optional parent. `resolve` walks
//! the parent chain unless told to stay local; `define` refuses to shadow a
//! name already bound in the *current* scope (but freely shadows an outer
//! one); `assign` writes through to whichever scope in the chain actually
//! owns the name.
//!
//! A `Scope` is a cheap-to-clone handle (`Rc<RefCell<..>>`) rather than an
//! owned tree node, because closures (`Def`) and objects (`ObjectExpr`)
//! both need to keep their defining scope alive after the construct that
//! created them has been left - closures and captured scopes need to
//! outlive the stack frame that made them.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use thiserror::Error;

use crate::Symbol;

/// A name was already bound in the current scope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is already defined in this scope")]
pub struct DuplicateBindingError(pub Symbol);

/// `assign` was attempted on a name that no enclosing scope binds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not defined")]
pub struct UnboundNameError(pub Symbol);

struct ScopeData<T> {
    bindings: IndexMap<Symbol, T>,
    parent: Option<Scope<T>>,
}

/// A lexical scope: an insertion-ordered `name -> T` map with an optional
/// parent scope. Cloning a `Scope` clones the handle, not the contents -
/// both clones see the same bindings.
pub struct Scope<T> {
    data: Rc<RefCell<ScopeData<T>>>,
}

impl<T> Clone for Scope<T> {
    fn clone(&self) -> Self {
        Scope { data: Rc::clone(&self.data) }
    }
}

impl<T> Scope<T> {
    /// A fresh root scope with no parent.
    pub fn root() -> Self {
        Scope { data: Rc::new(RefCell::new(ScopeData { bindings: IndexMap::new(), parent: None })) }
    }

    /// A fresh child scope nested under `self`.
    pub fn child(&self) -> Self {
        Scope { data: Rc::new(RefCell::new(ScopeData { bindings: IndexMap::new(), parent: Some(self.clone()) })) }
    }

    /// This scope's parent, if any.
    pub fn parent(&self) -> Option<Scope<T>> {
        self.data.borrow().parent.clone()
    }

    /// Bind `name` to `value` in *this* scope. Fails if `name` is already
    /// bound here (shadowing an outer binding is fine - only two bindings
    /// for the same name in the same scope is forbidden).
    pub fn define(&self, name: Symbol, value: T) -> Result<(), DuplicateBindingError> {
        let mut data = self.data.borrow_mut();
        if data.bindings.contains_key(&name) {
            return Err(DuplicateBindingError(name));
        }
        data.bindings.insert(name, value);
        Ok(())
    }

    /// Whether `name` is bound in this scope only (no parent walk).
    pub fn contains_local(&self, name: Symbol) -> bool {
        self.data.borrow().bindings.contains_key(&name)
    }
}

impl<T: Clone> Scope<T> {
    /// Look up `name`, optionally restricting the search to this scope.
    ///
    /// `resolve(name, true)` only ever sees bindings defined directly in
    /// `self`; `resolve(name, false)` walks the parent chain until it finds
    /// a binding or runs out of parents.
    pub fn resolve(&self, name: Symbol, current_only: bool) -> Option<T> {
        let data = self.data.borrow();
        if let Some(value) = data.bindings.get(&name) {
            return Some(value.clone());
        }
        if current_only {
            return None;
        }
        data.parent.as_ref()?.resolve(name, false)
    }

    /// Overwrite the binding for `name` in *this* scope only, without
    /// walking to the parent. Used for object property assignment: an
    /// object's scope is parented on the lexically enclosing scope so
    /// method bodies can see outer locals, but property lookup/assignment
    /// must never wander past the object's own members into that lexical
    /// parent.
    pub fn assign_local(&self, name: Symbol, value: T) -> Result<(), UnboundNameError> {
        let mut data = self.data.borrow_mut();
        match data.bindings.get_mut(&name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(UnboundNameError(name)),
        }
    }

    /// Overwrite the binding for `name` in whichever scope in the chain
    /// owns it. Fails if no scope in the chain binds `name`.
    pub fn assign(&self, name: Symbol, value: T) -> Result<(), UnboundNameError> {
        let mut data = self.data.borrow_mut();
        if let Some(slot) = data.bindings.get_mut(&name) {
            *slot = value;
            return Ok(());
        }
        let parent = data.parent.clone();
        drop(data);
        match parent {
            Some(parent) => parent.assign(name, value),
            None => Err(UnboundNameError(name)),
        }
    }

    /// All `(name, value)` pairs bound directly in this scope, in
    /// insertion order. Used for diagnostics and for populating an
    /// `ObjectType`'s member list.
    pub fn local_entries(&self) -> Vec<(Symbol, T)> {
        self.data.borrow().bindings.iter().map(|(k, v)| (*k, v.clone())).collect()
    }
}

impl<T> Default for Scope<T> {
    fn default() -> Self {
        Self::root()
    }
}

impl<T> fmt::Debug for Scope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scope(<{} bindings>)", self.data.borrow().bindings.len())
    }
}

/// Pointer identity for a scope - two handles to the same underlying data
/// compare equal. Used by object/type equality, which cares whether two
/// object values/types share a scope rather than whether their contents
/// happen to match.
impl<T> PartialEq for Scope<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}
impl<T> Eq for Scope<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_then_resolve_current_only() {
        let scope: Scope<i32> = Scope::root();
        let x = Symbol::intern("x");
        scope.define(x, 1).unwrap();
        assert_eq!(scope.resolve(x, true), Some(1));
    }

    #[test]
    fn define_duplicate_in_same_scope_fails() {
        let scope: Scope<i32> = Scope::root();
        let x = Symbol::intern("x_dup");
        scope.define(x, 1).unwrap();
        assert!(scope.define(x, 2).is_err());
    }

    #[test]
    fn child_shadowing_is_allowed() {
        let parent: Scope<i32> = Scope::root();
        let x = Symbol::intern("x_shadow");
        parent.define(x, 1).unwrap();
        let child = parent.child();
        child.define(x, 2).unwrap();
        assert_eq!(child.resolve(x, true), Some(2));
        assert_eq!(parent.resolve(x, true), Some(1));
    }

    #[test]
    fn resolve_walks_parent_chain() {
        let parent: Scope<i32> = Scope::root();
        let x = Symbol::intern("x_chain");
        parent.define(x, 7).unwrap();
        let child = parent.child();
        assert_eq!(child.resolve(x, false), Some(7));
        assert_eq!(child.resolve(x, true), None);
    }

    #[test]
    fn assign_writes_through_to_owning_scope() {
        let parent: Scope<i32> = Scope::root();
        let x = Symbol::intern("x_assign");
        parent.define(x, 1).unwrap();
        let child = parent.child();
        child.assign(x, 99).unwrap();
        assert_eq!(parent.resolve(x, true), Some(99));
    }

    #[test]
    fn assign_unbound_name_fails() {
        let scope: Scope<i32> = Scope::root();
        assert!(scope.assign(Symbol::intern("ghost"), 1).is_err());
    }

    use proptest::collection::hash_set;
    use proptest::prelude::*;

    proptest! {
        /// I2: after any successful `define`, `resolve(name, current_only=true)`
        /// returns that binding, and a second `define` of the same name in the
        /// same scope always fails - for an arbitrary sequence of distinct
        /// names, not just a hand-picked one.
        #[test]
        fn define_then_resolve_holds_for_arbitrary_distinct_names(names in hash_set("[a-z][a-z0-9_]{0,10}", 1..20)) {
            let scope: Scope<i32> = Scope::root();
            for (i, name) in names.iter().enumerate() {
                let sym = Symbol::intern(name);
                prop_assert!(scope.define(sym, i as i32).is_ok());
                prop_assert_eq!(scope.resolve(sym, true), Some(i as i32));
                prop_assert!(scope.define(sym, -1).is_err());
            }
        }
    }
}
