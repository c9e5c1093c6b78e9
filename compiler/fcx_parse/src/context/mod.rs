//! Parse contexts and operator disambiguation.
//!
//! A handful of symbols mean different things depending on where they
//! appear. The parser keeps a small stack of [`Context`] tags while it
//! parses operator operands, and [`disambiguate`] consults the innermost
//! tag together with the immediate neighbours of the operator:
//!
//! | Symbol | Default | Resolved | When |
//! |--------|---------|----------|------|
//! | `<=>`  | `Cas` | `FunctionDef` | bare name on the left and `fn` next, or inside a function header |
//! | `<<<`  | `RotateLeft` | `FormatPrint` | inside `print>`/`fmt>`/`scan>` |
//! | `<<`   | `LShift` | `DirectInput` | inside syscall arguments |
//! | `>>`   | `RShift` | `DirectOutput` | inside syscall arguments |


use std::fmt;

use fcx_ir::OpKind;
use fcx_lexer::OperatorRegistry;
use smallvec::SmallVec;
use tracing::debug;

/// Contexts tracked at once. Deeper pushes are counted but not stored.
pub const MAX_CONTEXT_DEPTH: usize = 16;

/// What the parser is inside of.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Context {
    #[default]
    Expression,
    FunctionDef,
    AtomicOp,
    FormatString,
    Assignment,
    Syscall,
    MemoryOp,
}

impl Context {
    /// Phrase for "while parsing ..." notes.
    pub fn description(self) -> &'static str {
        match self {
            Context::Expression => "an expression",
            Context::FunctionDef => "a function definition",
            Context::AtomicOp => "an atomic operation",
            Context::FormatString => "a format string",
            Context::Assignment => "an assignment",
            Context::Syscall => "syscall arguments",
            Context::MemoryOp => "a memory operation",
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Bounded stack of [`Context`] tags.
///
/// Pushes past [`MAX_CONTEXT_DEPTH`] are not stored, but they still hide
/// the stored contexts: until they are popped again, [`current`] is
/// `Expression`, so an outer tag never leaks into a deeper construct.
///
/// [`current`]: ContextStack::current
#[derive(Clone, Debug, Default)]
pub struct ContextStack {
    stack: SmallVec<[Context; MAX_CONTEXT_DEPTH]>,
    /// Pushes refused at capacity and not yet popped.
    shadowed: usize,
}

impl ContextStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a context. Returns `false` when the stack is full and the
    /// context was not stored; it must still be popped.
    pub fn push(&mut self, context: Context) -> bool {
        if self.stack.len() >= MAX_CONTEXT_DEPTH {
            self.shadowed += 1;
            debug!(?context, shadowed = self.shadowed, "context stack full, push not stored");
            return false;
        }
        self.stack.push(context);
        true
    }

    /// Pop the innermost context. Returns `None` for a push that was not
    /// stored, and for an empty stack.
    pub fn pop(&mut self) -> Option<Context> {
        if self.shadowed > 0 {
            self.shadowed -= 1;
            return None;
        }
        self.stack.pop()
    }

    /// Innermost context, `Expression` when empty or past capacity.
    pub fn current(&self) -> Context {
        if self.shadowed > 0 {
            return Context::Expression;
        }
        self.stack.last().copied().unwrap_or_default()
    }

    /// Stored contexts.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty() && self.shadowed == 0
    }

    pub fn clear(&mut self) {
        self.stack.clear();
        self.shadowed = 0;
    }
}

/// Surroundings of an operator token, as seen by [`disambiguate`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct DisambiguationInput {
    /// The left operand is a plain name (optionally behind `@`).
    pub left_is_bare_ident: bool,
    /// The token after the operator is `fn`.
    pub next_is_fn: bool,
    pub context: Context,
}

/// Resolve the meaning of `kind` at this position.
pub fn disambiguate(
    kind: OpKind,
    input: DisambiguationInput,
    registry: &OperatorRegistry,
) -> OpKind {
    let resolved = match (kind, input.context) {
        (OpKind::Cas, Context::FunctionDef) => OpKind::FunctionDef,
        (OpKind::Cas, _) if input.left_is_bare_ident && input.next_is_fn => OpKind::FunctionDef,
        (OpKind::Cas, _) => OpKind::Cas,
        (OpKind::RotateLeft, Context::FormatString) => OpKind::FormatPrint,
        (OpKind::LShift, Context::Syscall) => OpKind::DirectInput,
        (OpKind::RShift, Context::Syscall) => OpKind::DirectOutput,
        _ => registry.primary(kind).map_or(kind, |desc| desc.kind),
    };
    if resolved != kind {
        debug!(from = ?kind, to = ?resolved, context = ?input.context, "operator disambiguated");
    }
    resolved
}

/// Symbols whose meaning depends on context.
pub fn is_context_sensitive(kind: OpKind) -> bool {
    matches!(
        kind,
        OpKind::Cas | OpKind::RotateLeft | OpKind::LShift | OpKind::RShift
    )
}
