//! `TextEmitter` - a minimal reference [`CodeGen`] implementation.
//!
//! It does not target any particular host language; it emits a flat,
//! fully-parenthesized prefix notation (`(let x (+ 1 2))`) that exercises
//! every IR shape and every contract the trait calls out, so `CodeGen`
//! itself can be exercised end-to-end without committing this crate to a
//! specific backend. A real Python/Go/TS/C++ emitter follows the same
//! one-method-per-IR-shape structure against its own target syntax.

use std::fmt::Write as _;

use wisp_par::{BinOp, LiteralValue};
use wisp_sem::ir;
use wisp_sem::Type;

use crate::codegen::CodeGen;
use crate::error::{GenerateException, GenerateResult};

#[derive(Default)]
pub struct TextEmitter {
    out: String,
}

impl TextEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    fn emit_block(&mut self, statements: &[ir::Stmt]) -> GenerateResult<()> {
        for stmt in statements {
            self.emit_stmt(stmt)?;
            self.out.push(' ');
        }
        Ok(())
    }

    fn emit_stmt(&mut self, stmt: &ir::Stmt) -> GenerateResult<()> {
        match stmt {
            ir::Stmt::Let(s) => self.emit_let(s),
            ir::Stmt::Def(s) => self.emit_def(s),
            ir::Stmt::If(s) => self.emit_if(s),
            ir::Stmt::For(s) => self.emit_for(s),
            ir::Stmt::Return(s) => self.emit_return(s),
            ir::Stmt::Expression(e) => self.emit_expr(e),
            ir::Stmt::Assignment(a) => self.emit_assignment(a),
        }
    }

    fn emit_let(&mut self, s: &ir::LetStmt) -> GenerateResult<()> {
        write!(self.out, "(let {} ", s.name).expect("writing to a String cannot fail");
        match &s.value {
            Some(value) => self.emit_expr(value)?,
            None => self.out.push_str("nil"),
        }
        self.out.push(')');
        Ok(())
    }

    fn emit_def(&mut self, s: &ir::DefStmt) -> GenerateResult<()> {
        write!(self.out, "(def {} (", s.name).expect("writing to a String cannot fail");
        for (i, param) in s.params.iter().enumerate() {
            if i > 0 {
                self.out.push(' ');
            }
            write!(self.out, "{}", param.name).expect("writing to a String cannot fail");
        }
        self.out.push_str(") ");
        self.emit_block(&s.body)?;
        self.out.push(')');
        Ok(())
    }

    fn emit_if(&mut self, s: &ir::IfStmt) -> GenerateResult<()> {
        self.out.push_str("(if ");
        self.emit_expr(&s.cond)?;
        self.out.push_str(" (");
        self.emit_block(&s.then_body)?;
        self.out.push_str(") (");
        self.emit_block(&s.else_body)?;
        self.out.push_str("))");
        Ok(())
    }

    fn emit_for(&mut self, s: &ir::ForStmt) -> GenerateResult<()> {
        write!(self.out, "(for {} ", s.name).expect("writing to a String cannot fail");
        self.emit_expr(&s.iterable)?;
        self.out.push_str(" (");
        self.emit_block(&s.body)?;
        self.out.push_str("))");
        Ok(())
    }

    fn emit_return(&mut self, s: &ir::ReturnStmt) -> GenerateResult<()> {
        self.out.push_str("(return");
        if let Some(value) = &s.value {
            self.out.push(' ');
            self.emit_expr(value)?;
        }
        self.out.push(')');
        Ok(())
    }

    fn emit_assignment(&mut self, a: &ir::Assignment) -> GenerateResult<()> {
        match a {
            ir::Assignment::Variable(v) => {
                write!(self.out, "(set {} ", v.name).expect("writing to a String cannot fail");
                self.emit_expr(&v.value)?;
                self.out.push(')');
            }
            ir::Assignment::Property(p) => {
                self.out.push_str("(set-property ");
                self.emit_expr(&p.receiver)?;
                write!(self.out, " {} ", p.name).expect("writing to a String cannot fail");
                self.emit_expr(&p.value)?;
                self.out.push(')');
            }
        }
        Ok(())
    }

    fn emit_expr(&mut self, expr: &ir::Expr) -> GenerateResult<()> {
        match expr {
            ir::Expr::Literal(l) => self.emit_literal(l),
            ir::Expr::Group(g) => self.emit_expr(&g.inner),
            ir::Expr::Binary(b) => self.emit_binary(b),
            ir::Expr::Variable(v) => {
                write!(self.out, "{}", v.name).expect("writing to a String cannot fail");
                Ok(())
            }
            ir::Expr::Property(p) => {
                self.out.push_str("(get ");
                self.emit_expr(&p.receiver)?;
                write!(self.out, " {})", p.name).expect("writing to a String cannot fail");
                Ok(())
            }
            ir::Expr::Function(f) => self.emit_call(f.name, &f.args),
            ir::Expr::Method(m) => self.emit_method(m),
            ir::Expr::ObjectExpr(o) => self.emit_object(o),
        }
    }

    fn emit_literal(&mut self, l: &ir::LiteralIr) -> GenerateResult<()> {
        match &l.value {
            LiteralValue::Nil => self.out.push_str("nil"),
            LiteralValue::Boolean(b) => write!(self.out, "{b}").expect("writing to a String cannot fail"),
            LiteralValue::Integer(i) => write!(self.out, "{i}").expect("writing to a String cannot fail"),
            LiteralValue::Decimal(d) => write!(self.out, "{d}").expect("writing to a String cannot fail"),
            LiteralValue::Character(c) => write!(self.out, "{c:?}").expect("writing to a String cannot fail"),
            LiteralValue::String(s) => write!(self.out, "{s:?}").expect("writing to a String cannot fail"),
        }
        Ok(())
    }

    /// `/` picks the host call by the IR's resolved `Type` rather than by
    /// inspecting the runtime values: the division result type
    /// distinguishes integer vs. decimal, so the generator selects the
    /// correct host call.
    fn emit_binary(&mut self, b: &ir::BinaryIr) -> GenerateResult<()> {
        let tag = if b.op == BinOp::Div {
            match b.ty {
                Type::Integer => "div_int",
                Type::Decimal => "div_dec",
                _ => return Err(GenerateException::new("division must resolve to Integer or Decimal", b.span)),
            }
        } else {
            b.op.as_str()
        };
        write!(self.out, "({tag} ", ).expect("writing to a String cannot fail");
        self.emit_expr(&b.left)?;
        self.out.push(' ');
        self.emit_expr(&b.right)?;
        self.out.push(')');
        Ok(())
    }

    fn emit_call(&mut self, name: wisp_util::Symbol, args: &[ir::Expr]) -> GenerateResult<()> {
        write!(self.out, "(call {name}").expect("writing to a String cannot fail");
        for arg in args {
            self.out.push(' ');
            self.emit_expr(arg)?;
        }
        self.out.push(')');
        Ok(())
    }

    fn emit_method(&mut self, m: &ir::MethodIr) -> GenerateResult<()> {
        self.out.push_str("(call-method ");
        self.emit_expr(&m.receiver)?;
        write!(self.out, " {}", m.name).expect("writing to a String cannot fail");
        for arg in &m.args {
            self.out.push(' ');
            self.emit_expr(arg)?;
        }
        self.out.push(')');
        Ok(())
    }

    /// Fields then methods, in the declaration order the IR's
    /// `ObjectIr::fields`/`methods` lists already preserve - never
    /// re-sorted by name or by the object's scope, which has no ordering
    /// guarantee of its own once a `prototype` is involved.
    fn emit_object(&mut self, o: &ir::ObjectIr) -> GenerateResult<()> {
        self.out.push_str("(object");
        if let Some(name) = o.name {
            write!(self.out, " {name}").expect("writing to a String cannot fail");
        }
        for field in &o.fields {
            self.out.push(' ');
            self.emit_let(field)?;
        }
        for method in &o.methods {
            self.out.push(' ');
            self.emit_def(method)?;
        }
        self.out.push(')');
        Ok(())
    }
}

impl CodeGen for TextEmitter {
    type Output = String;

    fn emit_source(&mut self, source: &ir::Source) -> GenerateResult<String> {
        self.out.clear();
        self.out.push_str("(source ");
        self.emit_block(&source.statements)?;
        self.out.push(')');
        Ok(std::mem::take(&mut self.out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wisp_lex::Lexer;
    use wisp_par::Parser;

    fn emit(src: &str) -> GenerateResult<String> {
        let tokens = Lexer::tokenize(src).expect("lex");
        let source = Parser::parse_source(tokens).expect("parse");
        let ir = wisp_sem::analyze(&source).expect("analyze");
        TextEmitter::new().emit_source(&ir)
    }

    #[test]
    fn emits_integer_division_with_the_integer_tag() {
        let text = emit("LET x = 4 / 2;").unwrap();
        assert!(text.contains("div_int"));
    }

    #[test]
    fn emits_decimal_division_with_the_decimal_tag() {
        let text = emit("LET x = 4.0 / 2.0;").unwrap();
        assert!(text.contains("div_dec"));
    }

    #[test]
    fn emits_object_fields_before_methods_in_order() {
        let text = emit("LET o = OBJECT DO LET x = 1; LET y = 2; DEF get() DO RETURN this.x; END END;").unwrap();
        let x_pos = text.find("(let x 1)").unwrap();
        let y_pos = text.find("(let y 2)").unwrap();
        let def_pos = text.find("(def get").unwrap();
        assert!(x_pos < y_pos);
        assert!(y_pos < def_pos);
    }

    #[test]
    fn preserves_binary_operator_tags() {
        let text = emit("LET x = 1 < 2;").unwrap();
        assert!(text.contains("(< 1 2)"));
    }
}
