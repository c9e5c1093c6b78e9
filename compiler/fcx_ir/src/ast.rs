//! Abstract syntax tree.
//!
//! The tree is owned top-down: every child is held by exactly one parent
//! through `Box` or `Vec`. Every node records its span and the 1-based
//! line and column of its first token.

mod expr;
mod stmt;

pub use expr::{
    AsmInput, AtomicOpKind, BinaryOp, Expr, ExprKind, InlineAsm, Literal, MemoryOpKind,
    SyscallKind,
};
pub use stmt::{LoopKind, Program, Stmt, StmtKind, TypeRef, UseDecl};
