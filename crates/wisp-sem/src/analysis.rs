//! The Analyzer: AST → typed IR, threading a current `Scope<Type>`.
//!
//! One method per AST shape, each returning the IR counterpart or an
//! [`AnalyzeException`]. Scope-introducing constructs (`Def`, `If`,
//! `For`, `ObjectExpr`) go through [`Analyzer::in_child_scope`], which
//! centralizes the save-current/restore-on-exit discipline the evaluator
//! also requires and which the analyzer follows for the same reason:
//! every exit path, success or failure, must leave the scope exactly as
//! it found it.

use wisp_par as ast;
use wisp_util::{Scope, Span, Symbol};

use crate::error::{AnalyzeException, AnalyzeResult};
use crate::ir;
use crate::types::{FunctionType, ObjectType, Type};

pub struct Analyzer {
    scope: Scope<Type>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    pub fn new() -> Self {
        Self { scope: crate::types::builtin_scope() }
    }

    pub fn with_scope(scope: Scope<Type>) -> Self {
        Self { scope }
    }

    pub fn analyze_source(&mut self, source: &ast::Source) -> AnalyzeResult<ir::Source> {
        let mut statements = Vec::with_capacity(source.statements.len());
        for stmt in &source.statements {
            statements.push(self.analyze_stmt(stmt)?);
        }
        Ok(ir::Source { statements })
    }

    fn analyze_stmt(&mut self, stmt: &ast::Stmt) -> AnalyzeResult<ir::Stmt> {
        match stmt {
            ast::Stmt::Let(s) => self.analyze_let(s).map(ir::Stmt::Let),
            ast::Stmt::Def(s) => self.analyze_def(s).map(ir::Stmt::Def),
            ast::Stmt::If(s) => self.analyze_if(s).map(ir::Stmt::If),
            ast::Stmt::For(s) => self.analyze_for(s).map(ir::Stmt::For),
            ast::Stmt::Return(s) => self.analyze_return(s).map(ir::Stmt::Return),
            ast::Stmt::Expression(e) => self.analyze_expr(e).map(ir::Stmt::Expression),
            ast::Stmt::Assignment(s) => self.analyze_assignment(s).map(ir::Stmt::Assignment),
        }
    }

    /// Run `f` in a fresh child of the current scope, restoring the
    /// current scope afterward regardless of whether `f` succeeded.
    fn in_child_scope<T>(&mut self, f: impl FnOnce(&mut Self) -> AnalyzeResult<T>) -> AnalyzeResult<T> {
        let outer = self.scope.clone();
        self.scope = outer.child();
        let result = f(self);
        self.scope = outer;
        result
    }

    fn resolve_optional_type(&self, name: Option<Symbol>, span: Span) -> AnalyzeResult<Option<Type>> {
        match name {
            Some(sym) => {
                let text = sym.as_str();
                crate::types::resolve_type_name(&text)
                    .map(Some)
                    .ok_or_else(|| AnalyzeException::new(format!("unknown type '{text}'"), span))
            }
            None => Ok(None),
        }
    }

    // -- Let --------------------------------------------------------

    fn analyze_let(&mut self, s: &ast::LetStmt) -> AnalyzeResult<ir::LetStmt> {
        if self.scope.contains_local(s.name) {
            return Err(AnalyzeException::new(format!("'{}' is already defined in this scope", s.name), s.span));
        }
        let declared = self.resolve_optional_type(s.declared_type, s.span)?;
        let value = s.value.as_ref().map(|v| self.analyze_expr(v)).transpose()?;

        let var_type = match (&declared, &value) {
            (Some(declared), Some(value)) => {
                if !value.ty().is_subtype(declared) {
                    return Err(AnalyzeException::new(
                        "initializer type is not compatible with the declared type",
                        s.span,
                    ));
                }
                declared.clone()
            }
            (Some(declared), None) => declared.clone(),
            (None, Some(value)) => value.ty().clone(),
            (None, None) => Type::Dynamic,
        };

        self.scope
            .define(s.name, var_type.clone())
            .map_err(|_| AnalyzeException::new(format!("'{}' is already defined in this scope", s.name), s.span))?;
        Ok(ir::LetStmt { name: s.name, var_type, value, span: s.span })
    }

    // -- Def ----------------------------------------------------------

    fn analyze_def(&mut self, s: &ast::DefStmt) -> AnalyzeResult<ir::DefStmt> {
        if self.scope.contains_local(s.name) {
            return Err(AnalyzeException::new(format!("'{}' is already defined in this scope", s.name), s.span));
        }

        let mut params = Vec::with_capacity(s.params.len());
        let mut param_types = Vec::with_capacity(s.params.len());
        for param in &s.params {
            let param_type = self.resolve_optional_type(param.type_name, s.span)?.unwrap_or(Type::Dynamic);
            param_types.push(param_type.clone());
            params.push(ir::Param { name: param.name, param_type });
        }
        let return_type = self.resolve_optional_type(s.return_type, s.span)?.unwrap_or(Type::Dynamic);

        let fn_type = Type::Function(FunctionType { parameters: param_types, returns: Box::new(return_type.clone()) });
        self.scope
            .define(s.name, fn_type)
            .map_err(|_| AnalyzeException::new(format!("'{}' is already defined in this scope", s.name), s.span))?;

        let body = self.in_child_scope(|this| {
            for param in &params {
                this.scope.define(param.name, param.param_type.clone()).map_err(|_| {
                    AnalyzeException::new(format!("duplicate parameter name '{}'", param.name), s.span)
                })?;
            }
            this.scope
                .define(Symbol::intern("$RETURN"), return_type.clone())
                .expect("a function's body scope is always fresh");
            let mut body = Vec::with_capacity(s.body.len());
            for stmt in &s.body {
                body.push(this.analyze_stmt(stmt)?);
            }
            Ok(body)
        })?;

        Ok(ir::DefStmt { name: s.name, params, return_type, body, span: s.span })
    }

    // -- If -------------------------------------------------------------

    fn analyze_if(&mut self, s: &ast::IfStmt) -> AnalyzeResult<ir::IfStmt> {
        let cond = self.analyze_expr(&s.cond)?;
        if !cond.ty().is_subtype(&Type::Boolean) {
            return Err(AnalyzeException::new("'IF' condition must be boolean", s.cond.span()));
        }
        let then_body = self.in_child_scope(|this| {
            s.then_body.iter().map(|stmt| this.analyze_stmt(stmt)).collect::<AnalyzeResult<Vec<ir::Stmt>>>()
        })?;
        let else_body = self.in_child_scope(|this| {
            s.else_body.iter().map(|stmt| this.analyze_stmt(stmt)).collect::<AnalyzeResult<Vec<ir::Stmt>>>()
        })?;
        Ok(ir::IfStmt { cond, then_body, else_body, span: s.span })
    }

    // -- For --------------------------------------------------------------

    fn analyze_for(&mut self, s: &ast::ForStmt) -> AnalyzeResult<ir::ForStmt> {
        let iterable = self.analyze_expr(&s.iterable)?;
        if *iterable.ty() == Type::Nil {
            return Err(AnalyzeException::new("'FOR' iterable must not be Nil", s.iterable.span()));
        }
        let name = s.name;
        let body = self.in_child_scope(|this| {
            this.scope
                .define(name, Type::Integer)
                .map_err(|_| AnalyzeException::new(format!("duplicate loop variable '{name}'"), s.span))?;
            s.body.iter().map(|stmt| this.analyze_stmt(stmt)).collect::<AnalyzeResult<Vec<ir::Stmt>>>()
        })?;
        Ok(ir::ForStmt { name, iterable, body, span: s.span })
    }

    // -- Return -------------------------------------------------------

    fn analyze_return(&mut self, s: &ast::ReturnStmt) -> AnalyzeResult<ir::ReturnStmt> {
        let expected = self
            .scope
            .resolve(Symbol::intern("$RETURN"), false)
            .ok_or_else(|| AnalyzeException::new("RETURN outside function", s.span))?;
        let value = s.value.as_ref().map(|v| self.analyze_expr(v)).transpose()?;
        let actual = value.as_ref().map(|v| v.ty().clone()).unwrap_or(Type::Nil);
        if !actual.is_subtype(&expected) {
            return Err(AnalyzeException::new(
                "returned value is not compatible with the function's declared return type",
                s.span,
            ));
        }
        Ok(ir::ReturnStmt { value, span: s.span })
    }

    // -- Assignment ---------------------------------------------------

    fn analyze_assignment(&mut self, s: &ast::AssignmentStmt) -> AnalyzeResult<ir::Assignment> {
        match &s.target {
            ast::Expr::Variable(v) => {
                let bound = self
                    .scope
                    .resolve(v.name, false)
                    .ok_or_else(|| AnalyzeException::new(format!("unknown identifier '{}'", v.name), v.span))?;
                let value = self.analyze_expr(&s.value)?;
                if !value.ty().is_subtype(&bound) {
                    return Err(AnalyzeException::new(
                        "assigned value type is not compatible with the variable's type",
                        s.span,
                    ));
                }
                Ok(ir::Assignment::Variable(ir::VariableAssignment { name: v.name, value, span: s.span }))
            }
            ast::Expr::Property(p) => {
                let receiver = self.analyze_expr(&p.receiver)?;
                let member_type = self.resolve_member_type(receiver.ty(), p.name, p.span)?;
                let value = self.analyze_expr(&s.value)?;
                if !value.ty().is_subtype(&member_type) {
                    return Err(AnalyzeException::new(
                        "assigned value type is not compatible with the property's type",
                        s.span,
                    ));
                }
                Ok(ir::Assignment::Property(ir::PropertyAssignment {
                    receiver: Box::new(receiver),
                    name: p.name,
                    value,
                    span: s.span,
                }))
            }
            _ => Err(AnalyzeException::new("assignment target must be a variable or a property", s.target.span())),
        }
    }

    fn resolve_member_type(&self, receiver: &Type, name: Symbol, span: Span) -> AnalyzeResult<Type> {
        match receiver {
            Type::Dynamic => Ok(Type::Dynamic),
            Type::Object(obj) => obj.scope.resolve(name, true).ok_or_else(|| {
                AnalyzeException::new(format!("object has no member '{name}'"), span)
            }),
            _ => Err(AnalyzeException::new("property access requires an object or dynamic receiver", span)),
        }
    }

    // -- Expressions ----------------------------------------------------

    fn analyze_expr(&mut self, expr: &ast::Expr) -> AnalyzeResult<ir::Expr> {
        match expr {
            ast::Expr::Literal(l) => Ok(ir::Expr::Literal(Self::analyze_literal(l))),
            ast::Expr::Group(g) => {
                let inner = self.analyze_expr(&g.inner)?;
                let ty = inner.ty().clone();
                Ok(ir::Expr::Group(ir::GroupIr { inner: Box::new(inner), ty, span: g.span }))
            }
            ast::Expr::Binary(b) => self.analyze_binary(b).map(ir::Expr::Binary),
            ast::Expr::Variable(v) => self.analyze_variable(v).map(ir::Expr::Variable),
            ast::Expr::Property(p) => self.analyze_property(p).map(ir::Expr::Property),
            ast::Expr::Function(f) => self.analyze_function(f).map(ir::Expr::Function),
            ast::Expr::Method(m) => self.analyze_method(m).map(ir::Expr::Method),
            ast::Expr::ObjectExpr(o) => self.analyze_object(o).map(ir::Expr::ObjectExpr),
        }
    }

    fn analyze_literal(l: &ast::LiteralExpr) -> ir::LiteralIr {
        let ty = match &l.value {
            ast::LiteralValue::Nil => Type::Nil,
            ast::LiteralValue::Boolean(_) => Type::Boolean,
            ast::LiteralValue::Integer(_) => Type::Integer,
            ast::LiteralValue::Decimal(_) => Type::Decimal,
            ast::LiteralValue::Character(_) => Type::Character,
            ast::LiteralValue::String(_) => Type::String,
        };
        ir::LiteralIr { value: l.value.clone(), ty, span: l.span }
    }

    fn analyze_variable(&mut self, v: &ast::VariableExpr) -> AnalyzeResult<ir::VariableIr> {
        let ty = self
            .scope
            .resolve(v.name, false)
            .ok_or_else(|| AnalyzeException::new(format!("unknown identifier '{}'", v.name), v.span))?;
        Ok(ir::VariableIr { name: v.name, ty, span: v.span })
    }

    fn analyze_property(&mut self, p: &ast::PropertyExpr) -> AnalyzeResult<ir::PropertyIr> {
        let receiver = self.analyze_expr(&p.receiver)?;
        let ty = self.resolve_member_type(receiver.ty(), p.name, p.span)?;
        Ok(ir::PropertyIr { receiver: Box::new(receiver), name: p.name, ty, span: p.span })
    }

    fn analyze_function(&mut self, f: &ast::FunctionExpr) -> AnalyzeResult<ir::FunctionIr> {
        let fn_type = self
            .scope
            .resolve(f.name, false)
            .ok_or_else(|| AnalyzeException::new(format!("unknown function '{}'", f.name), f.span))?;
        let Type::Function(func) = &fn_type else {
            return Err(AnalyzeException::new(format!("'{}' is not callable", f.name), f.span));
        };
        if func.parameters.len() != f.args.len() {
            return Err(AnalyzeException::new(
                format!("'{}' expects {} argument(s), got {}", f.name, func.parameters.len(), f.args.len()),
                f.span,
            ));
        }
        let mut args = Vec::with_capacity(f.args.len());
        for (arg, expected) in f.args.iter().zip(&func.parameters) {
            let analyzed = self.analyze_expr(arg)?;
            if !analyzed.ty().is_subtype(expected) {
                return Err(AnalyzeException::new("argument type mismatch", arg.span()));
            }
            args.push(analyzed);
        }
        let ty = (*func.returns).clone();
        Ok(ir::FunctionIr { name: f.name, args, ty, span: f.span })
    }

    fn analyze_method(&mut self, m: &ast::MethodExpr) -> AnalyzeResult<ir::MethodIr> {
        let receiver = self.analyze_expr(&m.receiver)?;
        let member_type = self.resolve_member_type(receiver.ty(), m.name, m.span)?;
        let (args, ty) = match &member_type {
            Type::Dynamic => {
                let mut args = Vec::with_capacity(m.args.len());
                for arg in &m.args {
                    args.push(self.analyze_expr(arg)?);
                }
                (args, Type::Dynamic)
            }
            Type::Function(func) => {
                if func.parameters.len() != m.args.len() {
                    return Err(AnalyzeException::new(
                        format!("'{}' expects {} argument(s), got {}", m.name, func.parameters.len(), m.args.len()),
                        m.span,
                    ));
                }
                let parameters = func.parameters.clone();
                let returns = (*func.returns).clone();
                let mut args = Vec::with_capacity(m.args.len());
                for (arg, expected) in m.args.iter().zip(&parameters) {
                    let analyzed = self.analyze_expr(arg)?;
                    if !analyzed.ty().is_subtype(expected) {
                        return Err(AnalyzeException::new("argument type mismatch", arg.span()));
                    }
                    args.push(analyzed);
                }
                (args, returns)
            }
            _ => return Err(AnalyzeException::new(format!("'{}' is not callable", m.name), m.span)),
        };
        Ok(ir::MethodIr { receiver: Box::new(receiver), name: m.name, args, ty, span: m.span })
    }

    /// `object := ... (let)* (def)* ...`: a fresh `ObjectType` whose scope
    /// has no parent, populated with field bindings (as `Let`) then
    /// method bindings (as `Def`).
    fn analyze_object(&mut self, o: &ast::ObjectExpr) -> AnalyzeResult<ir::ObjectIr> {
        let object_scope = Scope::root();
        let previous = std::mem::replace(&mut self.scope, object_scope.clone());

        let analyzed = self.analyze_object_body(o);

        self.scope = previous;
        let (fields, methods) = analyzed?;

        let ty = Type::Object(ObjectType { name: o.name, scope: object_scope });
        Ok(ir::ObjectIr { name: o.name, fields, methods, ty, span: o.span })
    }

    fn analyze_object_body(&mut self, o: &ast::ObjectExpr) -> AnalyzeResult<(Vec<ir::LetStmt>, Vec<ir::DefStmt>)> {
        let mut fields = Vec::with_capacity(o.fields.len());
        for field in &o.fields {
            fields.push(self.analyze_let(field)?);
        }
        let mut methods = Vec::with_capacity(o.methods.len());
        for method in &o.methods {
            methods.push(self.analyze_def(method)?);
        }
        Ok((fields, methods))
    }

    fn analyze_binary(&mut self, b: &ast::BinaryExpr) -> AnalyzeResult<ir::BinaryIr> {
        let left = self.analyze_expr(&b.left)?;
        let right = self.analyze_expr(&b.right)?;
        let ty = match b.op {
            ast::BinOp::Add | ast::BinOp::Sub | ast::BinOp::Mul | ast::BinOp::Div => {
                Self::analyze_arithmetic(b.op, &left, &right, b.span)?
            }
            ast::BinOp::Eq | ast::BinOp::Ne => {
                if !(left.ty().is_subtype(right.ty()) || right.ty().is_subtype(left.ty())) {
                    return Err(AnalyzeException::new("'==' / '!=' operands must be subtype-compatible", b.span));
                }
                Type::Boolean
            }
            ast::BinOp::Lt | ast::BinOp::Le | ast::BinOp::Gt | ast::BinOp::Ge => {
                if !left.ty().is_subtype(&Type::Comparable) || !right.ty().is_subtype(&Type::Comparable) {
                    return Err(AnalyzeException::new("comparison operands must be comparable", b.span));
                }
                if !(left.ty().is_subtype(right.ty()) || right.ty().is_subtype(left.ty())) {
                    return Err(AnalyzeException::new("comparison operands must be subtype-compatible", b.span));
                }
                Type::Boolean
            }
            ast::BinOp::And | ast::BinOp::Or => {
                if *left.ty() != Type::Boolean || *right.ty() != Type::Boolean {
                    return Err(AnalyzeException::new("'AND' / 'OR' operands must be boolean", b.span));
                }
                Type::Boolean
            }
        };
        Ok(ir::BinaryIr { op: b.op, left: Box::new(left), right: Box::new(right), ty, span: b.span })
    }

    fn analyze_arithmetic(op: ast::BinOp, left: &ir::Expr, right: &ir::Expr, span: Span) -> AnalyzeResult<Type> {
        if *left.ty() == Type::Dynamic && *right.ty() == Type::Dynamic {
            return Ok(Type::Dynamic);
        }
        if op == ast::BinOp::Add && (*left.ty() == Type::String || *right.ty() == Type::String) {
            return Ok(Type::String);
        }
        let resolved_left = if *left.ty() == Type::Dynamic { right.ty() } else { left.ty() };
        let resolved_right = if *right.ty() == Type::Dynamic { left.ty() } else { right.ty() };
        match (resolved_left, resolved_right) {
            (Type::Integer, Type::Integer) => Ok(Type::Integer),
            (Type::Decimal, Type::Decimal) => Ok(Type::Decimal),
            (Type::Integer, Type::Decimal) | (Type::Decimal, Type::Integer) => {
                Err(AnalyzeException::new("numeric operands must match (Integer with Integer, Decimal with Decimal)", span))
            }
            _ => Err(AnalyzeException::new("arithmetic operands must be Integer or Decimal", span)),
        }
    }
}
