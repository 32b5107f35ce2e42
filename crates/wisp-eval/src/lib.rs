//! wisp-eval - Tree-Walk Evaluator
//!
//! ```text
//!  Source (the untyped AST, from wisp-par)
//!        |
//!        v
//!  +------------+     threads a Scope<Value>, starting from builtin_scope()
//!  | Evaluator  |     one method per AST shape
//!  +------------+
//!        |
//!        v
//!      Value        (the result of running the script's top-level statements)
//! ```
//!
//! Architecture: a single [`Evaluator`] struct walking the AST directly -
//! no intermediate IR, unlike `wisp-sem` - threading one `Scope<Value>`
//! and a `RETURN`-as-signal return type (rather than a thrown exception
//! or a Rust-level unwind) up through statement execution. `value` holds
//! the runtime value model; `arithmetic` the numeric operator rules;
//! `builtins` the initial scope's native functions; `error` the
//! evaluator's failure shape; `evaluator` the walk itself.

mod arithmetic;
mod builtins;
mod error;
mod evaluator;
pub mod value;

pub use builtins::builtin_scope;
pub use error::{EvaluateException, EvaluateResult};
pub use evaluator::Evaluator;
pub use value::{Function, ObjectValue, Primitive, Value};

/// Evaluate a parsed source unit with a fresh built-in scope - the
/// common case for a driver that only needs to run a script once.
pub fn evaluate(source: &wisp_par::Source) -> EvaluateResult<Value> {
    Evaluator::new().eval_source(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wisp_lex::Lexer;
    use wisp_par::Parser;

    #[test]
    fn evaluate_runs_a_parsed_script() {
        let tokens = Lexer::tokenize("LET x = 1 + 2;").expect("lex");
        let source = Parser::parse_source(tokens).expect("parse");
        evaluate(&source).expect("script should evaluate");
    }
}
