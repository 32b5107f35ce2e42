//! The runtime mirror of `wisp_sem::types::builtin_scope`: the evaluator's
//! initial scope mirrors those names with runtime values appropriate for
//! execution - `log`, `print`, `debug`, `range`, plus the same testing
//! helpers the analyzer's built-in `Scope<Type>` exposes.

use std::rc::Rc;

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use wisp_util::{Scope, Symbol};

use crate::error::{EvaluateException, EvaluateResult};
use crate::value::{Function, ObjectValue, Primitive, Value};

fn builtin(name: &str, arity: usize, call: impl Fn(&[Value]) -> EvaluateResult<Value> + 'static) -> Value {
    Value::Function(Function::Builtin { name: Symbol::intern(name), arity, call: Rc::new(call) })
}

/// `log`: prints the value's display form and returns it unchanged, so
/// `LET x = 1 + 2; log(x);` both prints `3` and leaves `x` usable as the
/// expression's value (the analyzer types this `DYNAMIC`, not `NIL`, for
/// exactly this pass-through reason).
fn log_value(args: &[Value]) -> EvaluateResult<Value> {
    println!("{}", args[0].display_form());
    Ok(args[0].clone())
}

fn print_value(args: &[Value]) -> EvaluateResult<Value> {
    print!("{}", args[0].display_form());
    Ok(Value::nil())
}

fn debug_value(args: &[Value]) -> EvaluateResult<Value> {
    eprintln!("{:?}", args[0]);
    Ok(Value::nil())
}

/// `range(start, end)`: an eagerly materialized `Iterable` of `Integer`s
/// from `start` (inclusive) to `end` (exclusive). The core has no
/// generator/laziness machinery, so there is no cheaper way to hand a
/// `For` loop something it can iterate.
fn range_value(args: &[Value], span: wisp_util::Span) -> EvaluateResult<Value> {
    let (Value::Primitive(Primitive::Integer(start)), Value::Primitive(Primitive::Integer(end))) = (&args[0], &args[1])
    else {
        return Err(EvaluateException::new("range expects two integers", span));
    };
    let start = start.to_i64().ok_or_else(|| EvaluateException::new("range start is out of host range", span))?;
    let end = end.to_i64().ok_or_else(|| EvaluateException::new("range end is out of host range", span))?;
    let items: Vec<Value> = (start..end).map(|i| Value::Primitive(Primitive::Integer(BigInt::from(i)))).collect();
    Ok(Value::Primitive(Primitive::Iterable(Rc::new(items))))
}

/// The default runtime scope handed to [`crate::Evaluator::new`] - see
/// `wisp_sem::types::builtin_scope` for the analyzer's type-level twin.
pub fn builtin_scope() -> Scope<Value> {
    let scope = Scope::root();

    scope.define(Symbol::intern("log"), builtin("log", 1, log_value)).expect("builtin scope starts empty");
    scope.define(Symbol::intern("print"), builtin("print", 1, print_value)).expect("builtin scope starts empty");
    scope.define(Symbol::intern("debug"), builtin("debug", 1, debug_value)).expect("builtin scope starts empty");
    scope
        .define(
            Symbol::intern("range"),
            Value::Function(Function::Builtin {
                name: Symbol::intern("range"),
                arity: 2,
                call: Rc::new(|args| range_value(args, wisp_util::Span::DUMMY)),
            }),
        )
        .expect("builtin scope starts empty");

    // Testing helpers mirrored from the analyzer's builtin_scope.
    scope
        .define(Symbol::intern("variable"), Value::Primitive(Primitive::String("variable".to_string())))
        .expect("builtin scope starts empty");
    scope
        .define(Symbol::intern("function0"), builtin("function0", 0, |_| Ok(Value::nil())))
        .expect("builtin scope starts empty");
    scope
        .define(Symbol::intern("function1"), builtin("function1", 1, |args| Ok(args[0].clone())))
        .expect("builtin scope starts empty");

    let object_scope = Scope::root();
    object_scope
        .define(Symbol::intern("method0"), builtin("method0", 0, |_| Ok(Value::nil())))
        .expect("object scope starts empty");
    object_scope.define(Symbol::intern("prototype"), Value::nil()).expect("object scope starts empty");
    scope
        .define(
            Symbol::intern("object"),
            Value::Object(ObjectValue { name: Some(Symbol::intern("object")), scope: object_scope }),
        )
        .expect("builtin scope starts empty");

    scope
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_builds_an_exclusive_integer_sequence() {
        let scope = builtin_scope();
        let range = scope.resolve(Symbol::intern("range"), true).unwrap();
        let Value::Function(Function::Builtin { call, .. }) = range else { panic!("expected builtin") };
        let args = vec![
            Value::Primitive(Primitive::Integer(BigInt::from(0))),
            Value::Primitive(Primitive::Integer(BigInt::from(3))),
        ];
        let Value::Primitive(Primitive::Iterable(items)) = call(&args).unwrap() else { panic!("expected iterable") };
        assert_eq!(items.len(), 3);
    }
}
