//! Statement nodes.

use super::Expr;
use crate::{Span, TypeKeyword};

#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
    pub line: u32,
    pub column: u32,
}

impl Stmt {
    #[inline]
    pub fn new(kind: StmtKind, span: Span, line: u32, column: u32) -> Self {
        Stmt {
            kind,
            span,
            line,
            column,
        }
    }
}

/// Type annotation: a built-in keyword or a named type.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeRef {
    Builtin(TypeKeyword),
    Named(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoopKind {
    /// `loop { ... }`
    Infinite,
    /// `while cond { ... }`
    While(Expr),
    /// `loop (n) << { ... }`
    Count(Expr),
    /// `loop i </ n: { ... }`
    Range { var: String, bound: Expr },
}

/// `use` declaration.
///
/// `use crate::a::b as c` has path `["crate", "a", "b"]` and alias `c`;
/// `use a::{b, self}` has path `["a"]` and items `["b", "self"]`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UseDecl {
    pub path: Vec<String>,
    pub items: Vec<String>,
    pub alias: Option<String>,
    pub is_glob: bool,
    pub is_public: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    Expr(Expr),
    /// `let`/`const` binding. Multi-name bindings (`let a:b:c := v`) carry
    /// an `ExprKind::MultiAssign` initializer and the first name.
    Let {
        name: String,
        is_const: bool,
        ty: Option<TypeRef>,
        init: Option<Expr>,
    },
    Function {
        name: String,
        params: Vec<String>,
        return_type: Option<TypeRef>,
        body: Vec<Stmt>,
        is_public: bool,
    },
    If {
        cond: Expr,
        then_branch: Vec<Stmt>,
        else_branch: Option<Vec<Stmt>>,
        /// Written as `cond -> stmt` or `?(cond) -> stmt`.
        compact: bool,
    },
    Loop {
        kind: LoopKind,
        body: Vec<Stmt>,
    },
    Return(Option<Expr>),
    Halt(Option<Expr>),
    Break,
    Continue,
    Mod {
        name: String,
        is_public: bool,
        /// `None` for `mod name;`
        body: Option<Vec<Stmt>>,
    },
    Use(UseDecl),
}

/// A parsed source file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}
