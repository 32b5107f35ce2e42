//! The runtime value model: `Primitive`, `Function` (a closure over its
//! defining scope) and `ObjectValue` (a scope-owning record reached
//! through member access and the `prototype` chain).
//!
//! Mirrors the shape of `wisp_sem::types::Type` one level down the
//! pipeline - same three-way split (primitive / function / object) - but
//! these are *values*, not types, so a `Primitive` carries an actual
//! `BigInt`/`BigDecimal`/etc. rather than a type tag.

use std::fmt;
use std::rc::Rc;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use wisp_par::Stmt;
use wisp_util::{Scope, Symbol};

use crate::error::EvaluateResult;

/// A primitive runtime payload: null, boolean, integer, decimal,
/// character, string, or a host-iterable.
///
/// `Iterable` is the "something iterable in the host sense" the `For`
/// evaluation rule asks for - built by `range` and materialized eagerly,
/// since the core has no laziness/generator machinery to defer it with.
#[derive(Clone)]
pub enum Primitive {
    Nil,
    Boolean(bool),
    Integer(BigInt),
    Decimal(BigDecimal),
    Character(char),
    String(String),
    Iterable(Rc<Vec<Value>>),
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Nil => write!(f, "nil"),
            Primitive::Boolean(b) => write!(f, "{b}"),
            Primitive::Integer(i) => write!(f, "{i}"),
            Primitive::Decimal(d) => write!(f, "{d}"),
            Primitive::Character(c) => write!(f, "{c}"),
            Primitive::String(s) => write!(f, "{s}"),
            Primitive::Iterable(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// A closure: either a user-defined `Def` (captures its defining scope and
/// re-executes its AST body on every call) or a built-in implemented
/// directly in Rust (`log`, `print`, `debug`, `range`).
///
/// `is_method` marks a `Def` bound inside an `ObjectExpr`: methods prepend
/// the current receiver as an implicit first argument and bind the
/// receiver under `this`. A function value reached as a plain field (not
/// declared inside an object literal) never sets this, even if it happens
/// to be invoked through a `Method` call
/// site (a field holding a bare function is just called with the written
/// arguments).
#[derive(Clone)]
pub enum Function {
    Def {
        name: Option<Symbol>,
        is_method: bool,
        params: Vec<Symbol>,
        body: Rc<Vec<Stmt>>,
        defining_scope: Scope<Value>,
    },
    Builtin {
        name: Symbol,
        arity: usize,
        call: Rc<dyn Fn(&[Value]) -> EvaluateResult<Value>>,
    },
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Function::Def { name, .. } => write!(f, "Function::Def({:?})", name.map(|s| s.to_string())),
            Function::Builtin { name, .. } => write!(f, "Function::Builtin({name})"),
        }
    }
}

/// `ObjectValue(name?, scope)` - the object's own member scope, parented
/// on the scope in effect when the `ObjectExpr` was evaluated. Member
/// *lookup* never walks that lexical parent, only the
/// explicit `prototype` chain - the parent link exists so
/// a method body can still see enclosing locals the way any nested scope
/// would, not so `o.missing` can see them.
#[derive(Clone, Debug)]
pub struct ObjectValue {
    pub name: Option<Symbol>,
    pub scope: Scope<Value>,
}

#[derive(Clone, Debug)]
pub enum Value {
    Primitive(Primitive),
    Function(Function),
    Object(ObjectValue),
}

impl fmt::Debug for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Nil => write!(f, "Nil"),
            Primitive::Boolean(b) => write!(f, "Boolean({b})"),
            Primitive::Integer(i) => write!(f, "Integer({i})"),
            Primitive::Decimal(d) => write!(f, "Decimal({d})"),
            Primitive::Character(c) => write!(f, "Character({c:?})"),
            Primitive::String(s) => write!(f, "String({s:?})"),
            Primitive::Iterable(items) => write!(f, "Iterable(len={})", items.len()),
        }
    }
}

impl Value {
    pub fn nil() -> Value {
        Value::Primitive(Primitive::Nil)
    }

    pub fn boolean(b: bool) -> Value {
        Value::Primitive(Primitive::Boolean(b))
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Primitive(Primitive::Boolean(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// The "printed form" that `+` falls back on when either operand is a
    /// string: `log`/`print`/`debug`'s own rendering, not a debug dump.
    pub fn display_form(&self) -> String {
        match self {
            Value::Primitive(p) => p.to_string(),
            Value::Function(Function::Def { name, .. }) => {
                format!("<function {}>", name.map(|s| s.to_string()).unwrap_or_else(|| "anonymous".into()))
            }
            Value::Function(Function::Builtin { name, .. }) => format!("<builtin {name}>"),
            Value::Object(o) => format!("<object {}>", o.name.map(|s| s.to_string()).unwrap_or_else(|| "anonymous".into())),
        }
    }
}

/// Structural equality of runtime values (backs `==`/`!=`).
/// Numeric primitives compare across `Integer`/`Decimal` the same way the
/// analyzer admits them as mutually subtype-compatible; objects and
/// functions compare by identity (their scope's `PartialEq`/`Rc` pointer),
/// matching `Scope`'s own pointer-identity equality.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Primitive(a), Value::Primitive(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.scope == b.scope,
            (Value::Function(Function::Def { defining_scope: a, params: ap, .. }), Value::Function(Function::Def { defining_scope: b, params: bp, .. })) => {
                *a == *b && ap == bp
            }
            (Value::Function(Function::Builtin { call: a, .. }), Value::Function(Function::Builtin { call: b, .. })) => {
                Rc::ptr_eq(a, b)
            }
            _ => false,
        }
    }
}

impl PartialEq for Primitive {
    fn eq(&self, other: &Self) -> bool {
        use Primitive::*;
        match (self, other) {
            (Nil, Nil) => true,
            (Boolean(a), Boolean(b)) => a == b,
            (Character(a), Character(b)) => a == b,
            (String(a), String(b)) => a == b,
            (Integer(a), Integer(b)) => a == b,
            (Decimal(a), Decimal(b)) => a == b,
            (Integer(a), Decimal(b)) | (Decimal(b), Integer(a)) => &BigDecimal::from(a.clone()) == b,
            (Iterable(a), Iterable(b)) => Rc::ptr_eq(a, b) || a == b,
            _ => false,
        }
    }
}
