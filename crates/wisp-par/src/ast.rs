//! The untyped syntax tree the parser produces.
//!
//! Every shape here is a tagged union, unchanged across later stages: the
//! analyzer and evaluator each walk this tree independently (see
//! `wisp-sem`/`wisp-eval`) rather than sharing a decorated copy, so the AST
//! itself carries no resolved type information - that only exists on the IR
//! the analyzer produces.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use wisp_util::{Span, Symbol};

#[derive(Clone, Debug, PartialEq)]
pub struct Source {
    pub statements: Vec<Stmt>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Def(DefStmt),
    If(IfStmt),
    For(ForStmt),
    Return(ReturnStmt),
    Expression(Expr),
    Assignment(AssignmentStmt),
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Let(s) => s.span,
            Stmt::Def(s) => s.span,
            Stmt::If(s) => s.span,
            Stmt::For(s) => s.span,
            Stmt::Return(s) => s.span,
            Stmt::Expression(e) => e.span(),
            Stmt::Assignment(s) => s.span,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LetStmt {
    pub name: Symbol,
    pub declared_type: Option<Symbol>,
    pub value: Option<Expr>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    pub name: Symbol,
    pub type_name: Option<Symbol>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DefStmt {
    pub name: Symbol,
    pub params: Vec<Param>,
    pub return_type: Option<Symbol>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IfStmt {
    pub cond: Expr,
    pub then_body: Vec<Stmt>,
    pub else_body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ForStmt {
    pub name: Symbol,
    pub iterable: Expr,
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub span: Span,
}

/// `target` is restricted to [`Expr::Variable`] or [`Expr::Property`]; the
/// grammar admits any expression on the left of `=` and the analyzer /
/// evaluator enforce the restriction.
#[derive(Clone, Debug, PartialEq)]
pub struct AssignmentStmt {
    pub target: Expr,
    pub value: Expr,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    Group(GroupExpr),
    Binary(BinaryExpr),
    Variable(VariableExpr),
    Property(PropertyExpr),
    Function(FunctionExpr),
    Method(MethodExpr),
    ObjectExpr(ObjectExpr),
}

impl Expr {
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

#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    Nil,
    Boolean(bool),
    Integer(BigInt),
    Decimal(BigDecimal),
    Character(char),
    String(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct LiteralExpr {
    pub value: LiteralValue,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GroupExpr {
    pub inner: Box<Expr>,
    pub span: Span,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
}

impl BinOp {
    /// The exact source spelling, preserved for the code generator so its
    /// operator tags stay unique and stable.
    pub fn as_str(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::And => "AND",
            BinOp::Or => "OR",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BinaryExpr {
    pub op: BinOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariableExpr {
    pub name: Symbol,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PropertyExpr {
    pub receiver: Box<Expr>,
    pub name: Symbol,
    pub span: Span,
}

/// A call to a bare name: `name(args...)`.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionExpr {
    pub name: Symbol,
    pub args: Vec<Expr>,
    pub span: Span,
}

/// A call through a receiver: `receiver.name(args...)`.
#[derive(Clone, Debug, PartialEq)]
pub struct MethodExpr {
    pub receiver: Box<Expr>,
    pub name: Symbol,
    pub args: Vec<Expr>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectExpr {
    pub name: Option<Symbol>,
    pub fields: Vec<LetStmt>,
    pub methods: Vec<DefStmt>,
    pub span: Span,
}
