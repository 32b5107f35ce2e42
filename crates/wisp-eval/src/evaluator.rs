//! The Evaluator: AST → `Value`, threading a current `Scope<Value>`.
//!
//! Mirrors `wisp_sem::analysis::Analyzer` one-for-one in shape - one
//! method per AST shape, the same `in_child_scope` save/restore
//! discipline for `If`/`For`/`Def`-body/`ObjectExpr` - but walks toward a
//! runtime `Value` instead of a `Type`, and has to thread a `RETURN` far
//! enough up the statement loop to escape the enclosing function call
//! without unwinding the Rust stack.

use std::cmp::Ordering;
use std::rc::Rc;

use bigdecimal::BigDecimal;
use wisp_par as ast;
use wisp_util::{Scope, Span, Symbol};

use crate::arithmetic;
use crate::error::{EvaluateException, EvaluateResult};
use crate::value::{Function, ObjectValue, Primitive, Value};

/// The maximum number of `prototype` hops a single member lookup will
/// follow before giving up - a depth cap so a cyclic prototype chain
/// fails cleanly instead of looping forever.
const MAX_PROTOTYPE_DEPTH: usize = 64;

/// What a statement did, reported up to the block/function that ran it.
/// `Return` carries the span of the `RETURN` itself so a `RETURN` that
/// escapes all the way out of `eval_source` can still point at its
/// source location.
enum Flow {
    Next,
    Return(Value, Span),
}

pub struct Evaluator {
    scope: Scope<Value>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self { scope: crate::builtins::builtin_scope() }
    }

    pub fn with_scope(scope: Scope<Value>) -> Self {
        Self { scope }
    }

    /// Run every top-level statement in turn. A `RETURN` reaching here
    /// has no enclosing function to return from.
    pub fn eval_source(&mut self, source: &ast::Source) -> EvaluateResult<Value> {
        match self.exec_block(&source.statements)? {
            Flow::Next => Ok(Value::nil()),
            Flow::Return(_, span) => Err(EvaluateException::new("RETURN outside function", span)),
        }
    }

    /// Run `f` in a fresh child of the current scope, restoring the
    /// current scope afterward regardless of whether `f` succeeded -
    /// the evaluator's half of the save/restore discipline (see
    /// `wisp_sem::analysis::Analyzer::in_child_scope` for the analyzer's).
    fn in_child_scope<T>(&mut self, f: impl FnOnce(&mut Self) -> EvaluateResult<T>) -> EvaluateResult<T> {
        let outer = self.scope.clone();
        self.scope = outer.child();
        let result = f(self);
        self.scope = outer;
        result
    }

    fn exec_block(&mut self, stmts: &[ast::Stmt]) -> EvaluateResult<Flow> {
        for stmt in stmts {
            match self.exec_stmt(stmt)? {
                Flow::Next => continue,
                returned @ Flow::Return(..) => return Ok(returned),
            }
        }
        Ok(Flow::Next)
    }

    fn exec_stmt(&mut self, stmt: &ast::Stmt) -> EvaluateResult<Flow> {
        match stmt {
            ast::Stmt::Let(s) => {
                self.exec_let(s)?;
                Ok(Flow::Next)
            }
            ast::Stmt::Def(s) => {
                self.exec_def(s)?;
                Ok(Flow::Next)
            }
            ast::Stmt::If(s) => self.exec_if(s),
            ast::Stmt::For(s) => self.exec_for(s),
            ast::Stmt::Return(s) => Ok(self.exec_return(s)?),
            ast::Stmt::Expression(e) => {
                self.eval_expr(e)?;
                Ok(Flow::Next)
            }
            ast::Stmt::Assignment(s) => {
                self.exec_assignment(s)?;
                Ok(Flow::Next)
            }
        }
    }

    // -- Let --------------------------------------------------------

    fn exec_let(&mut self, s: &ast::LetStmt) -> EvaluateResult<()> {
        if self.scope.contains_local(s.name) {
            return Err(EvaluateException::new(format!("'{}' is already defined in this scope", s.name), s.span));
        }
        let value = match &s.value {
            Some(expr) => self.eval_expr(expr)?,
            None => Value::nil(),
        };
        self.scope
            .define(s.name, value)
            .map_err(|_| EvaluateException::new(format!("'{}' is already defined in this scope", s.name), s.span))?;
        Ok(())
    }

    // -- Def --------------------------------------------------------

    fn exec_def(&mut self, s: &ast::DefStmt) -> EvaluateResult<()> {
        if self.scope.contains_local(s.name) {
            return Err(EvaluateException::new(format!("'{}' is already defined in this scope", s.name), s.span));
        }
        let params = s.params.iter().map(|p| p.name).collect();
        let func = Function::Def {
            name: Some(s.name),
            is_method: false,
            params,
            body: Rc::new(s.body.clone()),
            defining_scope: self.scope.clone(),
        };
        self.scope
            .define(s.name, Value::Function(func))
            .map_err(|_| EvaluateException::new(format!("'{}' is already defined in this scope", s.name), s.span))?;
        Ok(())
    }

    // -- If -----------------------------------------------------------

    fn exec_if(&mut self, s: &ast::IfStmt) -> EvaluateResult<Flow> {
        let cond = self.eval_expr(&s.cond)?;
        let taken = cond.as_boolean().ok_or_else(|| EvaluateException::new("'IF' condition must be boolean", s.cond.span()))?;
        if taken {
            self.in_child_scope(|this| this.exec_block(&s.then_body))
        } else {
            self.in_child_scope(|this| this.exec_block(&s.else_body))
        }
    }

    // -- For ------------------------------------------------------------

    /// Each element gets a fresh iteration scope (binding the loop
    /// variable) nested around a fresh body scope - two levels, not one,
    /// so the body can `LET` its own locals without colliding with a
    /// same-named loop variable from an outer `For`.
    fn exec_for(&mut self, s: &ast::ForStmt) -> EvaluateResult<Flow> {
        let iterable = self.eval_expr(&s.iterable)?;
        let Value::Primitive(Primitive::Iterable(items)) = iterable else {
            return Err(EvaluateException::new("'FOR' iterable must be an iterable value", s.iterable.span()));
        };
        for item in items.iter() {
            let flow = self.in_child_scope(|this| {
                this.scope
                    .define(s.name, item.clone())
                    .map_err(|_| EvaluateException::new(format!("duplicate loop variable '{}'", s.name), s.span))?;
                this.in_child_scope(|that| that.exec_block(&s.body))
            })?;
            if let Flow::Return(value, span) = flow {
                return Ok(Flow::Return(value, span));
            }
        }
        Ok(Flow::Next)
    }

    // -- Return ---------------------------------------------------------

    fn exec_return(&mut self, s: &ast::ReturnStmt) -> EvaluateResult<Flow> {
        let value = match &s.value {
            Some(expr) => self.eval_expr(expr)?,
            None => Value::nil(),
        };
        Ok(Flow::Return(value, s.span))
    }

    // -- Assignment -------------------------------------------------

    fn exec_assignment(&mut self, s: &ast::AssignmentStmt) -> EvaluateResult<()> {
        match &s.target {
            ast::Expr::Variable(v) => {
                let value = self.eval_expr(&s.value)?;
                self.scope.assign(v.name, value).map_err(|_| EvaluateException::new(format!("'{}' is not defined", v.name), v.span))?;
                Ok(())
            }
            ast::Expr::Property(p) => {
                let receiver = self.eval_expr(&p.receiver)?;
                let object = receiver
                    .as_object()
                    .ok_or_else(|| EvaluateException::new("property assignment requires an object receiver", p.span))?
                    .clone();
                let value = self.eval_expr(&s.value)?;
                // Writes only into the object's own scope - never the
                // `prototype` chain and never the lexical parent a
                // method body can otherwise see through.
                object
                    .scope
                    .assign_local(p.name, value)
                    .map_err(|_| EvaluateException::new(format!("object has no member '{}'", p.name), p.span))?;
                Ok(())
            }
            _ => Err(EvaluateException::new("assignment target must be a variable or a property", s.target.span())),
        }
    }

    // -- Expressions ------------------------------------------------

    fn eval_expr(&mut self, expr: &ast::Expr) -> EvaluateResult<Value> {
        match expr {
            ast::Expr::Literal(l) => Ok(Self::eval_literal(l)),
            ast::Expr::Group(g) => self.eval_expr(&g.inner),
            ast::Expr::Binary(b) => self.eval_binary(b),
            ast::Expr::Variable(v) => self.eval_variable(v),
            ast::Expr::Property(p) => self.eval_property(p),
            ast::Expr::Function(f) => self.eval_function_call(f),
            ast::Expr::Method(m) => self.eval_method_call(m),
            ast::Expr::ObjectExpr(o) => self.eval_object(o),
        }
    }

    fn eval_literal(l: &ast::LiteralExpr) -> Value {
        let primitive = match &l.value {
            ast::LiteralValue::Nil => Primitive::Nil,
            ast::LiteralValue::Boolean(b) => Primitive::Boolean(*b),
            ast::LiteralValue::Integer(i) => Primitive::Integer(i.clone()),
            ast::LiteralValue::Decimal(d) => Primitive::Decimal(d.clone()),
            ast::LiteralValue::Character(c) => Primitive::Character(*c),
            ast::LiteralValue::String(s) => Primitive::String(s.clone()),
        };
        Value::Primitive(primitive)
    }

    fn eval_variable(&mut self, v: &ast::VariableExpr) -> EvaluateResult<Value> {
        self.scope.resolve(v.name, false).ok_or_else(|| EvaluateException::new(format!("unknown identifier '{}'", v.name), v.span))
    }

    fn eval_property(&mut self, p: &ast::PropertyExpr) -> EvaluateResult<Value> {
        let receiver = self.eval_expr(&p.receiver)?;
        let object = receiver.as_object().ok_or_else(|| EvaluateException::new("property access requires an object receiver", p.span))?;
        Self::lookup_member(object, p.name, p.span)
    }

    /// Walk the object's own scope, then its `prototype` chain, looking
    /// for `name` - never the lexical parent the object's scope happens
    /// to be nested under. Capped at [`MAX_PROTOTYPE_DEPTH`] hops.
    fn lookup_member(object: &ObjectValue, name: Symbol, span: Span) -> EvaluateResult<Value> {
        let mut current = object.scope.clone();
        for _ in 0..=MAX_PROTOTYPE_DEPTH {
            if let Some(value) = current.resolve(name, true) {
                return Ok(value);
            }
            match current.resolve(Symbol::intern("prototype"), true) {
                Some(Value::Object(proto)) => current = proto.scope,
                Some(_) => return Err(EvaluateException::new("'prototype' must be an object", span)),
                None => return Err(EvaluateException::new(format!("object has no member '{name}'"), span)),
            }
        }
        Err(EvaluateException::new("prototype chain exceeded the maximum lookup depth", span))
    }

    fn eval_function_call(&mut self, f: &ast::FunctionExpr) -> EvaluateResult<Value> {
        let callee = self.scope.resolve(f.name, false).ok_or_else(|| EvaluateException::new(format!("unknown function '{}'", f.name), f.span))?;
        let func = callee.as_function().ok_or_else(|| EvaluateException::new(format!("'{}' is not callable", f.name), f.span))?.clone();
        let mut args = Vec::with_capacity(f.args.len());
        for arg in &f.args {
            args.push(self.eval_expr(arg)?);
        }
        self.call_function(&func, args, f.span)
    }

    /// `receiver.name(args...)`: a method `Def` gets the receiver
    /// prepended as an implicit first argument; a plain function value
    /// reached through a property is just called with the written
    /// arguments.
    fn eval_method_call(&mut self, m: &ast::MethodExpr) -> EvaluateResult<Value> {
        let receiver = self.eval_expr(&m.receiver)?;
        let object = receiver.as_object().ok_or_else(|| EvaluateException::new("method call requires an object receiver", m.span))?;
        let member = Self::lookup_member(object, m.name, m.span)?;
        let func = member.as_function().ok_or_else(|| EvaluateException::new(format!("'{}' is not callable", m.name), m.span))?.clone();

        let is_method = matches!(&func, Function::Def { is_method: true, .. });
        let mut args = Vec::with_capacity(m.args.len() + 1);
        if is_method {
            args.push(receiver.clone());
        }
        for arg in &m.args {
            args.push(self.eval_expr(arg)?);
        }
        self.call_function(&func, args, m.span)
    }

    /// Invoke `func` with already-evaluated `args`. Builtins run inline;
    /// a `Def` gets a fresh parameter scope (`this` bound first if it is
    /// a method) nested under its defining scope, and a fresh body scope
    /// nested under that - a two-scope call protocol.
    fn call_function(&self, func: &Function, args: Vec<Value>, span: Span) -> EvaluateResult<Value> {
        match func {
            Function::Builtin { name, arity, call } => {
                if args.len() != *arity {
                    return Err(EvaluateException::new(format!("'{name}' expects {arity} argument(s), got {}", args.len()), span));
                }
                call(&args)
            }
            Function::Def { name, is_method, params, body, defining_scope } => {
                let expected_args = if *is_method { params.len() + 1 } else { params.len() };
                if args.len() != expected_args {
                    let label = name.map(|s| s.to_string()).unwrap_or_else(|| "<anonymous>".to_string());
                    return Err(EvaluateException::new(format!("'{label}' expects {} argument(s), got {}", expected_args, args.len()), span));
                }
                let param_scope = defining_scope.child();
                let mut remaining = args.into_iter();
                if *is_method {
                    if params.iter().any(|p| p.as_str() == "this") {
                        return Err(EvaluateException::new("'this' cannot be used as an explicit parameter name", span));
                    }
                    param_scope.define(Symbol::intern("this"), remaining.next().expect("arity already checked")).expect("fresh parameter scope");
                }
                for (param, value) in params.iter().zip(remaining) {
                    param_scope
                        .define(*param, value)
                        .map_err(|_| EvaluateException::new(format!("duplicate parameter name '{param}'"), span))?;
                }

                let body_scope = param_scope.child();
                let mut callee = Evaluator::with_scope(body_scope);
                match callee.exec_block(body)? {
                    Flow::Next => Ok(Value::nil()),
                    Flow::Return(value, _) => Ok(value),
                }
            }
        }
    }

    /// Allocates an `ObjectValue` with a scope parented on the scope in
    /// effect here, then evaluates fields as `Let`s and methods as
    /// `is_method` `Def`s directly into it.
    fn eval_object(&mut self, o: &ast::ObjectExpr) -> EvaluateResult<Value> {
        let object_scope = self.scope.child();
        let previous = std::mem::replace(&mut self.scope, object_scope.clone());

        let evaluated = self.eval_object_body(o);

        self.scope = previous;
        evaluated?;

        Ok(Value::Object(ObjectValue { name: o.name, scope: object_scope }))
    }

    fn eval_object_body(&mut self, o: &ast::ObjectExpr) -> EvaluateResult<()> {
        for field in &o.fields {
            self.exec_let(field)?;
        }
        for method in &o.methods {
            if self.scope.contains_local(method.name) {
                return Err(EvaluateException::new(format!("'{}' is already defined in this scope", method.name), method.span));
            }
            let params = method.params.iter().map(|p| p.name).collect();
            let func = Function::Def {
                name: Some(method.name),
                is_method: true,
                params,
                body: Rc::new(method.body.clone()),
                defining_scope: self.scope.clone(),
            };
            self.scope
                .define(method.name, Value::Function(func))
                .map_err(|_| EvaluateException::new(format!("'{}' is already defined in this scope", method.name), method.span))?;
        }
        Ok(())
    }

    // -- Binary operators ------------------------------------------------

    fn eval_binary(&mut self, b: &ast::BinaryExpr) -> EvaluateResult<Value> {
        match b.op {
            ast::BinOp::And => {
                let left = self.eval_expr(&b.left)?;
                if !Self::require_boolean(&left, b.span)? {
                    return Ok(Value::boolean(false));
                }
                let right = self.eval_expr(&b.right)?;
                Ok(Value::boolean(Self::require_boolean(&right, b.span)?))
            }
            ast::BinOp::Or => {
                let left = self.eval_expr(&b.left)?;
                if Self::require_boolean(&left, b.span)? {
                    return Ok(Value::boolean(true));
                }
                let right = self.eval_expr(&b.right)?;
                Ok(Value::boolean(Self::require_boolean(&right, b.span)?))
            }
            _ => {
                let left = self.eval_expr(&b.left)?;
                let right = self.eval_expr(&b.right)?;
                match b.op {
                    ast::BinOp::Add => Self::eval_add(&left, &right, b.span),
                    ast::BinOp::Sub | ast::BinOp::Mul | ast::BinOp::Div => Self::eval_arithmetic(b.op, &left, &right, b.span),
                    ast::BinOp::Eq => Ok(Value::boolean(left == right)),
                    ast::BinOp::Ne => Ok(Value::boolean(left != right)),
                    ast::BinOp::Lt | ast::BinOp::Le | ast::BinOp::Gt | ast::BinOp::Ge => Self::eval_compare(b.op, &left, &right, b.span),
                    ast::BinOp::And | ast::BinOp::Or => unreachable!("handled above"),
                }
            }
        }
    }

    fn require_boolean(value: &Value, span: Span) -> EvaluateResult<bool> {
        value.as_boolean().ok_or_else(|| EvaluateException::new("'AND' / 'OR' operands must be boolean", span))
    }

    /// `+` falls back to string concatenation (via each operand's display
    /// form) whenever either side is a `String`; otherwise it is ordinary
    /// same-kind numeric addition.
    fn eval_add(left: &Value, right: &Value, span: Span) -> EvaluateResult<Value> {
        let is_string = |v: &Value| matches!(v, Value::Primitive(Primitive::String(_)));
        if is_string(left) || is_string(right) {
            return Ok(Value::Primitive(Primitive::String(format!("{}{}", left.display_form(), right.display_form()))));
        }
        match (left, right) {
            (Value::Primitive(Primitive::Integer(a)), Value::Primitive(Primitive::Integer(b))) => {
                Ok(Value::Primitive(Primitive::Integer(arithmetic::integer_add(a, b))))
            }
            (Value::Primitive(Primitive::Decimal(a)), Value::Primitive(Primitive::Decimal(b))) => {
                Ok(Value::Primitive(Primitive::Decimal(arithmetic::decimal_add(a, b))))
            }
            _ => Err(EvaluateException::new("'+' operands must both be String, both Integer, or both Decimal", span)),
        }
    }

    /// `-`, `*`, `/`: both operands must be the same numeric kind
    /// (Integer-Integer or Decimal-Decimal); mixing the two is rejected
    /// rather than silently promoted, matching the analyzer's rule.
    fn eval_arithmetic(op: ast::BinOp, left: &Value, right: &Value, span: Span) -> EvaluateResult<Value> {
        match (left, right) {
            (Value::Primitive(Primitive::Integer(a)), Value::Primitive(Primitive::Integer(b))) => {
                let result = match op {
                    ast::BinOp::Sub => arithmetic::integer_sub(a, b),
                    ast::BinOp::Mul => arithmetic::integer_mul(a, b),
                    ast::BinOp::Div => arithmetic::integer_div(a, b, span)?,
                    _ => unreachable!("only Sub/Mul/Div reach here"),
                };
                Ok(Value::Primitive(Primitive::Integer(result)))
            }
            (Value::Primitive(Primitive::Decimal(a)), Value::Primitive(Primitive::Decimal(b))) => {
                let result = match op {
                    ast::BinOp::Sub => arithmetic::decimal_sub(a, b),
                    ast::BinOp::Mul => arithmetic::decimal_mul(a, b),
                    ast::BinOp::Div => arithmetic::decimal_div(a, b, span)?,
                    _ => unreachable!("only Sub/Mul/Div reach here"),
                };
                Ok(Value::Primitive(Primitive::Decimal(result)))
            }
            _ => Err(EvaluateException::new("numeric operands must match (Integer with Integer, Decimal with Decimal)", span)),
        }
    }

    /// `<`, `<=`, `>`, `>=`: Integer and Decimal compare against each
    /// other (by promoting the Integer side to `BigDecimal`), mirroring
    /// the analyzer's `Comparable` rule, which admits Integer/Decimal as
    /// bidirectionally subtype-compatible. Boolean, Character and String
    /// compare only against their own kind.
    fn eval_compare(op: ast::BinOp, left: &Value, right: &Value, span: Span) -> EvaluateResult<Value> {
        let ordering = if let (Some(a), Some(b)) = (Self::as_decimal(left), Self::as_decimal(right)) {
            a.cmp(&b)
        } else {
            match (left, right) {
                (Value::Primitive(Primitive::Boolean(a)), Value::Primitive(Primitive::Boolean(b))) => a.cmp(b),
                (Value::Primitive(Primitive::Character(a)), Value::Primitive(Primitive::Character(b))) => a.cmp(b),
                (Value::Primitive(Primitive::String(a)), Value::Primitive(Primitive::String(b))) => a.cmp(b),
                _ => return Err(EvaluateException::new("comparison operands must be comparable and subtype-compatible", span)),
            }
        };
        let result = match op {
            ast::BinOp::Lt => ordering == Ordering::Less,
            ast::BinOp::Le => ordering != Ordering::Greater,
            ast::BinOp::Gt => ordering == Ordering::Greater,
            ast::BinOp::Ge => ordering != Ordering::Less,
            _ => unreachable!("only comparison operators reach here"),
        };
        Ok(Value::boolean(result))
    }

    fn as_decimal(value: &Value) -> Option<BigDecimal> {
        match value {
            Value::Primitive(Primitive::Integer(i)) => Some(BigDecimal::from(i.clone())),
            Value::Primitive(Primitive::Decimal(d)) => Some(d.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wisp_lex::Lexer;
    use wisp_par::Parser;

    fn eval_source(src: &str) -> EvaluateResult<Value> {
        let tokens = Lexer::tokenize(src).expect("lex");
        let source = Parser::parse_source(tokens).expect("parse");
        Evaluator::new().eval_source(&source)
    }

    #[test]
    fn recursive_fibonacci_evaluates() {
        let src = r#"
            DEF fib(n) DO
                RETURN n IF n < 2;
                RETURN fib(n - 1) + fib(n - 2);
            END;
            LET result = fib(10);
            LET ok = result == 55;
            IF ok DO ELSE
                LET fail = 1 / 0;
            END
        "#;
        eval_source(src).expect("fib(10) should equal 55");
    }

    #[test]
    fn string_concatenation_uses_display_form() {
        let src = r#"
            LET greeting = "hello, " + "world";
            LET ok = greeting == "hello, world";
            IF ok DO ELSE
                LET fail = 1 / 0;
            END
        "#;
        eval_source(src).expect("concatenation should produce the expected string");
    }

    #[test]
    fn object_method_reads_field_through_this() {
        let src = r#"
            LET counter = OBJECT DO
                LET value = 1;
                DEF read() DO
                    RETURN this.value;
                END
            END;
            LET result = counter.read();
        "#;
        eval_source(src).expect("method call through this should succeed");
    }

    #[test]
    fn for_loop_over_range_accumulates() {
        let src = r#"
            LET total = 0;
            FOR i IN range(0, 5) DO
                total = total + i;
            END
            LET ok = total == 10;
            IF ok DO ELSE
                LET fail = 1 / 0;
            END
        "#;
        eval_source(src).expect("for loop over range should accumulate 0+1+2+3+4");
    }

    #[test]
    fn duplicate_let_in_same_scope_fails() {
        let err = eval_source("LET x = 1; LET x = 2;").unwrap_err();
        assert!(err.message.contains("already defined"));
    }

    #[test]
    fn integer_division_by_zero_fails() {
        let err = eval_source("LET x = 1 / 0;").unwrap_err();
        assert!(err.message.contains("division by zero"));
    }

    #[test]
    fn return_outside_function_fails() {
        let err = eval_source("RETURN 1;").unwrap_err();
        assert_eq!(err.message, "RETURN outside function");
    }

    #[test]
    fn and_short_circuits_without_evaluating_right_operand() {
        // If short-circuiting failed, this would try to `AND` a Boolean
        // with an Integer and fail with a type error instead of
        // evaluating cleanly to `FALSE`.
        eval_source("LET x = FALSE AND (1 / 0 == 1);").expect("right operand must not be evaluated");
    }

    #[test]
    fn this_as_explicit_parameter_name_is_rejected() {
        let src = r#"
            LET o = OBJECT DO
                DEF broken(this) DO
                    RETURN this;
                END
            END;
            LET result = o.broken(1);
        "#;
        let err = eval_source(src).unwrap_err();
        assert!(err.message.contains("'this'"));
    }

    #[test]
    fn property_assignment_does_not_walk_the_prototype_chain() {
        let src = r#"
            LET base = OBJECT DO
                LET shared = 1;
            END;
            LET derived = OBJECT DO
                LET prototype = base;
            END;
            derived.shared = 2;
        "#;
        let err = eval_source(src).unwrap_err();
        assert!(err.message.contains("no member"));
    }

    #[test]
    fn mixed_integer_decimal_comparison_is_allowed() {
        eval_source("LET x = 1 < 1.5;").expect("Integer compares against Decimal");
    }

    #[test]
    fn mixed_integer_decimal_arithmetic_is_rejected() {
        let err = eval_source("LET x = 1 + 1.0;").unwrap_err();
        assert!(err.message.contains("must match"));
    }
}
