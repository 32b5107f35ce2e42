//! wisp-sem - Semantic Analyzer
//!
//! ```text
//!  Source (the untyped AST, from wisp-par)
//!        |
//!        v
//!  +------------+     threads a Scope<Type>, starting from builtin_scope()
//!  |  Analyzer  |     one method per AST shape
//!  +------------+
//!        |
//!        v
//!  ir::Source   (every Expr carries a resolved Type)
//! ```
//!
//! Architecture: a single [`Analyzer`] struct threading one `Scope<Type>`
//! through a recursive walk of the AST, producing the structurally
//! parallel `ir` tree. Scope-introducing constructs (`Def`, `If`, `For`,
//! object literals) open a child (or, for objects, a parentless root)
//! scope for the duration of the visit and restore the outer scope before
//! returning, success or failure - the analyzer and the evaluator
//! (`wisp-eval`) each enforce this independently since they do not share
//! traversal state.
//!
//! [`types`] holds the type lattice and subtyping relation; [`ir`] is the
//! typed tree the analyzer hands to a code generator; [`error`] is the
//! analyzer's failure shape; [`analysis`] is the walk itself.

mod analysis;
mod error;
pub mod ir;
mod types;

pub use analysis::Analyzer;
pub use error::{AnalyzeException, AnalyzeResult};
pub use types::{builtin_scope, resolve_type_name, FunctionType, ObjectType, Type};

/// Analyze a parsed source unit with a fresh built-in scope - the common
/// case for a driver that only needs one analysis pass.
pub fn analyze(source: &wisp_par::Source) -> AnalyzeResult<ir::Source> {
    Analyzer::new().analyze_source(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wisp_lex::Lexer;
    use wisp_par::Parser;

    fn analyze_source(src: &str) -> AnalyzeResult<ir::Source> {
        let tokens = Lexer::tokenize(src).expect("lex");
        let source = Parser::parse_source(tokens).expect("parse");
        analyze(&source)
    }

    #[test]
    fn let_with_mismatched_declared_type_fails() {
        // Boolean is not a subtype of Integer under any of the six
        // subtyping rules - unlike Integer/Decimal, which are
        // bidirectionally compatible and would analyze cleanly here.
        let err = analyze_source("LET x: Integer = TRUE;").unwrap_err();
        assert!(err.message.contains("declared type"));
    }

    #[test]
    fn return_outside_function_fails() {
        let err = analyze_source("RETURN 1;").unwrap_err();
        assert_eq!(err.message, "RETURN outside function");
    }

    #[test]
    fn unknown_property_on_object_without_prototype_fails() {
        let src = r#"
            LET o = OBJECT DO
                LET x = 1;
            END;
            LET y = o.missing;
        "#;
        let err = analyze_source(src).unwrap_err();
        assert!(err.message.contains("no member"));
    }

    #[test]
    fn if_condition_must_be_boolean() {
        let err = analyze_source("IF 1 DO END").unwrap_err();
        assert!(err.message.contains("boolean"));
    }

    #[test]
    fn well_typed_recursive_function_analyzes_cleanly() {
        let src = r#"
            DEF fib(n: Integer): Integer DO
                RETURN n IF n < 2;
                RETURN fib(n - 1) + fib(n - 2);
            END;
            LET result: Integer = fib(10);
        "#;
        analyze_source(src).expect("well-typed source should analyze");
    }

    #[test]
    fn object_field_then_method_analyze_with_own_scope() {
        let src = r#"
            LET point = OBJECT Point DO
                LET x: Integer = 1;
                LET y: Integer = 2;
                DEF sum(): Integer DO
                    RETURN 0;
                END
            END;
        "#;
        let ir = analyze_source(src).expect("object literal should analyze");
        match &ir.statements[0] {
            ir::Stmt::Let(let_stmt) => match let_stmt.var_type {
                Type::Object(_) => {}
                _ => panic!("expected an object type"),
            },
            _ => panic!("expected a let statement"),
        }
    }

    #[test]
    fn for_loop_binds_integer_loop_variable() {
        let src = r#"
            FOR i IN range(0, 3) DO
                LET doubled: Integer = i * 2;
            END
        "#;
        analyze_source(src).expect("for loop over range should analyze");
    }

    #[test]
    fn string_concatenation_with_plus_is_allowed() {
        analyze_source(r#"LET greeting: String = "a" + "b";"#).expect("string + string analyzes");
    }

    #[test]
    fn mixed_integer_decimal_arithmetic_is_rejected() {
        let err = analyze_source("LET x = 1 + 1.0;").unwrap_err();
        assert!(err.message.contains("must match"));
    }

    #[test]
    fn duplicate_let_in_same_scope_fails() {
        let err = analyze_source("LET x = 1; LET x = 2;").unwrap_err();
        assert!(err.message.contains("already defined"));
    }
}
