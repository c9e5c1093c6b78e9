//! Expression nodes.
//!
//! Left-associative chains (`a + b + ... + z`, `a, b, ..., z`) are built
//! by the Pratt loop without recursion, so their depth is bounded only by
//! the input length. Dropping and debug-printing an [`Expr`] therefore
//! must not recurse once per node on the native stack.

use std::fmt;

use fcx_stack::ensure_sufficient_stack;

use super::Stmt;
use crate::{BigInt, OpKind, Span};

#[derive(Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
    pub line: u32,
    pub column: u32,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span, line: u32, column: u32) -> Self {
        Expr {
            kind,
            span,
            line,
            column,
        }
    }

    /// A node taking its position from `start` and spanning through `end`.
    pub fn spanning(kind: ExprKind, start: &Expr, end: Span) -> Self {
        Expr {
            kind,
            span: start.span.merge(end),
            line: start.line,
            column: start.column,
        }
    }

    /// Take the node's kind, leaving a childless placeholder behind.
    ///
    /// `Expr` implements `Drop`, so its fields cannot be moved out by
    /// destructuring.
    #[must_use]
    pub fn into_kind(mut self) -> ExprKind {
        std::mem::replace(&mut self.kind, ExprKind::hollow())
    }

    /// The identifier name, if this is a bare identifier.
    pub fn as_ident(&self) -> Option<&str> {
        match &self.kind {
            ExprKind::Ident(name) => Some(name),
            _ => None,
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        if self.kind.is_leaf() {
            return;
        }
        let mut pending = Vec::new();
        self.kind.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.kind.detach_children(&mut pending);
        }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            f.debug_struct("Expr")
                .field("kind", &self.kind)
                .field("span", &self.span)
                .field("line", &self.line)
                .field("column", &self.column)
                .finish()
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Int(u64),
    BigInt(Box<BigInt>),
    Float(f64),
    Str(String),
    Char(char),
}

/// Binary operator: a registered operator or one of the structural
/// separators the lexer keeps outside the registry.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BinaryOp {
    Op(OpKind),
    /// `a, b` sequence.
    Comma,
    /// `a.b` field access.
    Dot,
    /// `a : b` tuple pairing.
    Tuple,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Literal(Literal),
    Ident(String),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        op: OpKind,
        operand: Box<Expr>,
    },
    /// `cond ? a : b`, `a </> b, c` and other three-operand forms.
    Ternary {
        op: OpKind,
        first: Box<Expr>,
        second: Box<Expr>,
        third: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    Index {
        base: Box<Expr>,
        index: Box<Expr>,
    },
    /// `@ptr`
    Deref {
        pointer: Box<Expr>,
    },
    Assign {
        op: OpKind,
        target: Box<Expr>,
        value: Box<Expr>,
    },
    /// `a:b:c := value`
    MultiAssign {
        targets: Vec<String>,
        value: Option<Box<Expr>>,
    },
    /// `name <=> fn(params) { body }`
    FunctionDef {
        name: String,
        params: Vec<String>,
        body: Vec<Stmt>,
    },
    MemoryOp {
        op: MemoryOpKind,
        operands: Vec<Expr>,
    },
    AtomicOp {
        op: AtomicOpKind,
        operands: Vec<Expr>,
    },
    SyscallOp {
        op: SyscallKind,
        /// Syscall number for the raw `sys%(n, ...)` form.
        number: Option<Box<Expr>>,
        args: Vec<Expr>,
    },
    InlineAsm(Box<InlineAsm>),
    /// `cond -> <statement>` seen inside an expression. The statement
    /// parser turns it into a compact `if`; it never survives into a
    /// finished tree.
    ArrowGuard(Box<Expr>),
}

impl ExprKind {
    fn hollow() -> Self {
        ExprKind::Literal(Literal::Int(0))
    }

    fn is_leaf(&self) -> bool {
        matches!(self, ExprKind::Literal(_) | ExprKind::Ident(_))
    }

    /// Move every direct child expression into `out`, leaving `self` a leaf.
    ///
    /// Function bodies are statements and stay attached; their nesting is
    /// bounded by the parser's depth limit.
    fn detach_children(&mut self, out: &mut Vec<Expr>) {
        if self.is_leaf() {
            return;
        }
        match std::mem::replace(self, ExprKind::hollow()) {
            ExprKind::Binary { left, right, .. } => out.extend([*left, *right]),
            ExprKind::Unary { operand: child, .. }
            | ExprKind::Deref { pointer: child }
            | ExprKind::ArrowGuard(child) => out.push(*child),
            ExprKind::Ternary {
                first,
                second,
                third,
                ..
            } => out.extend([*first, *second, *third]),
            ExprKind::Call { callee, args } => {
                out.push(*callee);
                out.extend(args);
            }
            ExprKind::Index { base, index } => out.extend([*base, *index]),
            ExprKind::Assign { target, value, .. } => out.extend([*target, *value]),
            ExprKind::MultiAssign { value, .. } => out.extend(value.map(|value| *value)),
            ExprKind::MemoryOp { operands, .. } | ExprKind::AtomicOp { operands, .. } => {
                out.extend(operands);
            }
            ExprKind::SyscallOp { number, args, .. } => {
                out.extend(number.map(|number| *number));
                out.extend(args);
            }
            ExprKind::InlineAsm(asm) => {
                let InlineAsm { inputs, .. } = *asm;
                out.extend(inputs.into_iter().map(|input| input.expr));
            }
            ExprKind::Literal(_) | ExprKind::Ident(_) | ExprKind::FunctionDef { .. } => {}
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MemoryOpKind {
    Allocate,
    Deallocate,
    StackAlloc,
    StackFree,
    MmioMap,
    MmioUnmap,
    /// Infix `->>`, `<-` and relatives.
    LayoutAccess,
    ArenaAlloc,
    ArenaReset,
    SlabAlloc,
    SlabFree,
    AlignUp,
    AlignDown,
    IsAligned,
    Prefetch,
    PrefetchWrite,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AtomicOpKind {
    Read,
    Write,
    Cas,
    Swap,
    Triple,
    CondWrite,
    FetchAdd,
    FetchSub,
    And,
    Or,
    Xor,
    Shl,
    Shr,
    Fence,
    BarrierFull,
    BarrierAcquire,
    BarrierRelease,
    Spawn,
}

impl AtomicOpKind {
    /// Operands the prefix form consumes.
    pub const fn arity(self) -> usize {
        match self {
            AtomicOpKind::Fence
            | AtomicOpKind::BarrierFull
            | AtomicOpKind::BarrierAcquire
            | AtomicOpKind::BarrierRelease => 0,
            AtomicOpKind::Read | AtomicOpKind::Spawn => 1,
            AtomicOpKind::Write
            | AtomicOpKind::Swap
            | AtomicOpKind::CondWrite
            | AtomicOpKind::FetchAdd
            | AtomicOpKind::FetchSub
            | AtomicOpKind::And
            | AtomicOpKind::Or
            | AtomicOpKind::Xor
            | AtomicOpKind::Shl
            | AtomicOpKind::Shr => 2,
            AtomicOpKind::Cas | AtomicOpKind::Triple => 3,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SyscallKind {
    Write,
    Read,
    Raw,
    Wrapper,
    PrivEscalate,
    CapabilityCheck,
    ResourceQuery,
    ResourceAlloc,
}

/// Inline assembly block.
///
/// `${name}` references in the source template are rewritten to positional
/// `$N` placeholders; each distinct name becomes a leading `"r"` input.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineAsm {
    pub template: String,
    pub outputs: Vec<String>,
    pub inputs: Vec<AsmInput>,
    pub clobbers: Vec<String>,
    pub is_volatile: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AsmInput {
    pub constraint: String,
    pub expr: Expr,
}
