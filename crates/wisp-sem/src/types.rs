//! The type system: the primitive lattice, function/object types, the
//! subtyping relation, and the fixed table that maps a source type name
//! (e.g. `Integer`) to its [`Type`].
//!
//! A generics-and-ADTs host language would need a much larger ADT here -
//! `Adt(DefId)`, `Param(ParamId)`, `Infer(InferId)`, tuples, slices,
//! futures - but this language's Non-goals rule out user-defined types and
//! generics entirely, so the lattice is just the primitives plus two
//! composite shapes. What's kept is the *shape* of the type: a flat enum
//! with struct-payload
//! variants for the composite cases, compared by a hand-written
//! [`PartialEq`] rather than derived, because [`ObjectType`] equality is
//! pointer identity on its scope, not structural.

use wisp_util::{Scope, Symbol};

#[derive(Clone, Debug)]
pub enum Type {
    Any,
    Nil,
    Dynamic,
    Boolean,
    Integer,
    Decimal,
    Character,
    String,
    Equatable,
    Comparable,
    Iterable,
    Function(FunctionType),
    Object(ObjectType),
}

#[derive(Clone, Debug)]
pub struct FunctionType {
    pub parameters: Vec<Type>,
    pub returns: Box<Type>,
}

/// `ObjectType(name?, scope)` - the scope is the object's own member
/// scope, populated by the analyzer when it visits an `ObjectExpr`. Two
/// object types are the same type iff they carry the same scope
/// (`Scope`'s `PartialEq` is pointer identity, not content equality, for
/// exactly this reason).
#[derive(Clone, Debug)]
pub struct ObjectType {
    pub name: Option<Symbol>,
    pub scope: Scope<Type>,
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        use Type::*;
        match (self, other) {
            (Any, Any)
            | (Nil, Nil)
            | (Dynamic, Dynamic)
            | (Boolean, Boolean)
            | (Integer, Integer)
            | (Decimal, Decimal)
            | (Character, Character)
            | (String, String)
            | (Equatable, Equatable)
            | (Comparable, Comparable)
            | (Iterable, Iterable) => true,
            (Function(a), Function(b)) => a.parameters == b.parameters && a.returns == b.returns,
            (Object(a), Object(b)) => a.scope == b.scope,
            _ => false,
        }
    }
}

impl PartialEq for FunctionType {
    fn eq(&self, other: &Self) -> bool {
        self.parameters == other.parameters && self.returns == other.returns
    }
}

impl Type {
    /// The subtyping relation: `a.is_subtype(&b)` is `a ≤ b`. Reflexive;
    /// see the six numbered rules inline.
    pub fn is_subtype(&self, other: &Type) -> bool {
        use Type::*;

        // 1. b = ANY
        if matches!(other, Any) {
            return true;
        }
        // 2. either side is DYNAMIC
        if matches!(self, Dynamic) || matches!(other, Dynamic) {
            return true;
        }
        // 3. a = b by identity
        if self == other {
            return true;
        }
        // 4. bidirectional numeric compatibility
        if matches!(self, Integer | Decimal) && matches!(other, Integer | Decimal) {
            return true;
        }
        // 5. b = COMPARABLE and a in {BOOLEAN, INTEGER, DECIMAL, CHARACTER, STRING}
        if matches!(other, Comparable) && matches!(self, Boolean | Integer | Decimal | Character | String) {
            return true;
        }
        // 6. b = EQUATABLE and (a = NIL, or a <= COMPARABLE, or a = ITERABLE)
        if matches!(other, Equatable) {
            if matches!(self, Nil) || matches!(self, Iterable) || self.is_subtype(&Comparable) {
                return true;
            }
        }
        false
    }
}

/// Resolve a source type name (as written after `:` in a declaration) to
/// its built-in [`Type`]. There is no user-defined-type namespace - the
/// Non-goals rule out user-defined generics and separate compilation
/// units, so every legal type name is one of these primitives.
pub fn resolve_type_name(name: &str) -> Option<Type> {
    Some(match name {
        "Any" => Type::Any,
        "Nil" => Type::Nil,
        "Dynamic" => Type::Dynamic,
        "Boolean" => Type::Boolean,
        "Integer" => Type::Integer,
        "Decimal" => Type::Decimal,
        "Character" => Type::Character,
        "String" => Type::String,
        "Equatable" => Type::Equatable,
        "Comparable" => Type::Comparable,
        "Iterable" => Type::Iterable,
        _ => return None,
    })
}

/// The built-in `Scope<Type>` seeded into every fresh analysis: `log`,
/// `print`, `debug`, `range`, plus testing helpers (a string-typed
/// variable, nullary/unary function entries, and an example object with
/// a method and a `prototype` member).
pub fn builtin_scope() -> Scope<Type> {
    let scope = Scope::root();

    let function = |parameters: Vec<Type>, returns: Type| {
        Type::Function(FunctionType { parameters, returns: Box::new(returns) })
    };

    scope
        .define(Symbol::intern("log"), function(vec![Type::Any], Type::Dynamic))
        .expect("builtin scope starts empty");
    scope
        .define(Symbol::intern("print"), function(vec![Type::Any], Type::Nil))
        .expect("builtin scope starts empty");
    scope
        .define(Symbol::intern("debug"), function(vec![Type::Any], Type::Nil))
        .expect("builtin scope starts empty");
    scope
        .define(
            Symbol::intern("range"),
            function(vec![Type::Integer, Type::Integer], Type::Iterable),
        )
        .expect("builtin scope starts empty");

    // Testing helpers: a string variable, nullary/unary functions, and an
    // example object with a method and a prototype.
    scope
        .define(Symbol::intern("variable"), Type::String)
        .expect("builtin scope starts empty");
    scope
        .define(Symbol::intern("function0"), function(vec![], Type::Dynamic))
        .expect("builtin scope starts empty");
    scope
        .define(Symbol::intern("function1"), function(vec![Type::Dynamic], Type::Dynamic))
        .expect("builtin scope starts empty");

    let object_scope = Scope::root();
    object_scope
        .define(Symbol::intern("method0"), function(vec![], Type::Dynamic))
        .expect("object scope starts empty");
    object_scope
        .define(Symbol::intern("prototype"), Type::Dynamic)
        .expect("object scope starts empty");
    scope
        .define(
            Symbol::intern("object"),
            Type::Object(ObjectType { name: Some(Symbol::intern("object")), scope: object_scope }),
        )
        .expect("builtin scope starts empty");

    scope
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_is_top() {
        assert!(Type::Integer.is_subtype(&Type::Any));
        assert!(Type::Object(ObjectType { name: None, scope: Scope::root() }).is_subtype(&Type::Any));
    }

    #[test]
    fn dynamic_is_mutually_compatible() {
        assert!(Type::Dynamic.is_subtype(&Type::Integer));
        assert!(Type::String.is_subtype(&Type::Dynamic));
    }

    #[test]
    fn reflexivity_holds() {
        assert!(Type::Boolean.is_subtype(&Type::Boolean));
    }

    #[test]
    fn integer_and_decimal_are_bidirectionally_compatible() {
        assert!(Type::Integer.is_subtype(&Type::Decimal));
        assert!(Type::Decimal.is_subtype(&Type::Integer));
    }

    #[test]
    fn comparable_admits_exactly_the_listed_primitives() {
        for t in [Type::Boolean, Type::Integer, Type::Decimal, Type::Character, Type::String] {
            assert!(t.is_subtype(&Type::Comparable));
        }
        assert!(!Type::Nil.is_subtype(&Type::Comparable));
        assert!(!Type::Iterable.is_subtype(&Type::Comparable));
    }

    #[test]
    fn equatable_admits_nil_comparable_and_iterable() {
        assert!(Type::Nil.is_subtype(&Type::Equatable));
        assert!(Type::Integer.is_subtype(&Type::Equatable));
        assert!(Type::Iterable.is_subtype(&Type::Equatable));
    }

    #[test]
    fn no_other_pairs_are_subtypes() {
        assert!(!Type::Boolean.is_subtype(&Type::Integer));
        assert!(!Type::String.is_subtype(&Type::Character));
    }

    #[test]
    fn builtin_scope_resolves_log_and_range() {
        let scope = builtin_scope();
        assert!(matches!(scope.resolve(Symbol::intern("log"), true), Some(Type::Function(_))));
        assert!(matches!(scope.resolve(Symbol::intern("range"), true), Some(Type::Function(_))));
    }

    #[test]
    fn resolves_primitive_type_names() {
        assert_eq!(resolve_type_name("Integer"), Some(Type::Integer));
        assert_eq!(resolve_type_name("Nonexistent"), None);
    }
}
