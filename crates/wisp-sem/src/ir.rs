//! The typed intermediate representation the analyzer produces.
//!
//! Structurally mirrors `wisp_par::ast` node-for-node, with two
//! differences: every expression node carries its resolved [`Type`], and
//! `Assignment` is split into
//! `Assignment::Variable` / `Assignment::Property` so the legal targets
//! are explicit in the type rather than re-validated by every consumer.

use wisp_par::{BinOp, LiteralValue};
use wisp_util::{Span, Symbol};

use crate::types::Type;

#[derive(Debug, Clone)]
pub struct Source {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone)]
pub enum Stmt {
    Let(LetStmt),
    Def(DefStmt),
    If(IfStmt),
    For(ForStmt),
    Return(ReturnStmt),
    Expression(Expr),
    Assignment(Assignment),
}

#[derive(Debug, Clone)]
pub struct LetStmt {
    pub name: Symbol,
    /// The resolved variable type: the declared type if present, else the
    /// value's type, else `DYNAMIC`.
    pub var_type: Type,
    pub value: Option<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct Param {
    pub name: Symbol,
    pub param_type: Type,
}

#[derive(Debug, Clone)]
pub struct DefStmt {
    pub name: Symbol,
    pub params: Vec<Param>,
    pub return_type: Type,
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct IfStmt {
    pub cond: Expr,
    pub then_body: Vec<Stmt>,
    pub else_body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ForStmt {
    pub name: Symbol,
    pub iterable: Expr,
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub span: Span,
}

/// `Assignment` is split into two sub-forms here, making the legal
/// targets explicit.
#[derive(Debug, Clone)]
pub enum Assignment {
    Variable(VariableAssignment),
    Property(PropertyAssignment),
}

#[derive(Debug, Clone)]
pub struct VariableAssignment {
    pub name: Symbol,
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct PropertyAssignment {
    pub receiver: Box<Expr>,
    pub name: Symbol,
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum Expr {
    Literal(LiteralIr),
    Group(GroupIr),
    Binary(BinaryIr),
    Variable(VariableIr),
    Property(PropertyIr),
    Function(FunctionIr),
    Method(MethodIr),
    ObjectExpr(ObjectIr),
}

impl Expr {
    /// Every IR expression node carries exactly one `Type`.
    pub fn ty(&self) -> &Type {
        match self {
            Expr::Literal(e) => &e.ty,
            Expr::Group(e) => &e.ty,
            Expr::Binary(e) => &e.ty,
            Expr::Variable(e) => &e.ty,
            Expr::Property(e) => &e.ty,
            Expr::Function(e) => &e.ty,
            Expr::Method(e) => &e.ty,
            Expr::ObjectExpr(e) => &e.ty,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Expr::Literal(e) => e.span,
            Expr::Group(e) => e.span,
            Expr::Binary(e) => e.span,
            Expr::Variable(e) => e.span,
            Expr::Property(e) => e.span,
            Expr::Function(e) => e.span,
            Expr::Method(e) => e.span,
            Expr::ObjectExpr(e) => e.span,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LiteralIr {
    pub value: LiteralValue,
    pub ty: Type,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct GroupIr {
    pub inner: Box<Expr>,
    pub ty: Type,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct BinaryIr {
    pub op: BinOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub ty: Type,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct VariableIr {
    pub name: Symbol,
    pub ty: Type,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct PropertyIr {
    pub receiver: Box<Expr>,
    pub name: Symbol,
    pub ty: Type,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct FunctionIr {
    pub name: Symbol,
    pub args: Vec<Expr>,
    pub ty: Type,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct MethodIr {
    pub receiver: Box<Expr>,
    pub name: Symbol,
    pub args: Vec<Expr>,
    pub ty: Type,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ObjectIr {
    pub name: Option<Symbol>,
    pub fields: Vec<LetStmt>,
    pub methods: Vec<DefStmt>,
    pub ty: Type,
    pub span: Span,
}
