//! Compact-if guards.
//!
//! `x > 0 -> ret x;` reaches the statement parser as
//! `x > ArrowGuard(0)`, because `->` binds tighter than `>`. The guard is
//! lifted back out here and the right spine rebuilt as the condition.

use fcx_diagnostic::ErrorCode;
use fcx_ir::ast::{Expr, ExprKind};
use fcx_stack::ensure_sufficient_stack;

use crate::{Mark, Parser};

/// Split off a compact-if guard ending the right spine of `expr`.
///
/// Returns the condition with the guard removed, or the expression
/// unchanged when there is no guard on the spine.
pub(super) fn split_compact_guard(expr: Expr) -> Result<Expr, Expr> {
    let (span, line, column) = (expr.span, expr.line, expr.column);
    match expr.into_kind() {
        ExprKind::ArrowGuard(cond) => Ok(*cond),
        ExprKind::Binary { op, left, right } => {
            let left_span = left.span;
            let rebuild = |right: Expr, span| {
                Expr::new(
                    ExprKind::Binary {
                        op,
                        left,
                        right: Box::new(right),
                    },
                    span,
                    line,
                    column,
                )
            };
            match ensure_sufficient_stack(|| split_compact_guard(*right)) {
                Ok(right) => {
                    let span = left_span.merge(right.span);
                    Ok(rebuild(right, span))
                }
                Err(right) => Err(rebuild(right, span)),
            }
        }
        kind => Err(Expr::new(kind, span, line, column)),
    }
}

/// First guard anywhere inside `expr`, in source order. Function bodies
/// are statements and were checked when they were parsed.
///
/// Walks with an explicit stack: left-leaning operator chains can be as
/// deep as the input is long.
fn find_guard(expr: &Expr) -> Option<Mark> {
    let mut pending = vec![expr];
    while let Some(expr) = pending.pop() {
        // Children are pushed last-first so the leftmost is visited next.
        match &expr.kind {
            ExprKind::ArrowGuard(_) => return Some(Mark::of(expr)),
            ExprKind::Literal(_) | ExprKind::Ident(_) | ExprKind::FunctionDef { .. } => {}
            ExprKind::Binary { left, right, .. }
            | ExprKind::Index {
                base: left,
                index: right,
            }
            | ExprKind::Assign {
                target: left,
                value: right,
                ..
            } => pending.extend([&**right, &**left]),
            ExprKind::Unary { operand: inner, .. } | ExprKind::Deref { pointer: inner } => {
                pending.push(&**inner);
            }
            ExprKind::Ternary {
                first,
                second,
                third,
                ..
            } => pending.extend([&**third, &**second, &**first]),
            ExprKind::Call { callee, args } => {
                pending.extend(args.iter().rev());
                pending.push(&**callee);
            }
            ExprKind::MultiAssign { value, .. } => pending.extend(value.as_deref()),
            ExprKind::MemoryOp { operands, .. } | ExprKind::AtomicOp { operands, .. } => {
                pending.extend(operands.iter().rev());
            }
            ExprKind::SyscallOp { number, args, .. } => {
                pending.extend(args.iter().rev());
                pending.extend(number.as_deref());
            }
            ExprKind::InlineAsm(asm) => {
                pending.extend(asm.inputs.iter().rev().map(|input| &input.expr));
            }
        }
    }
    None
}

impl Parser<'_, '_> {
    /// Report a guard that did not end up at statement level.
    pub(super) fn reject_stray_guard(&mut self, expr: &Expr) -> Option<()> {
        match find_guard(expr) {
            Some(at) => {
                self.error_at(
                    at,
                    ErrorCode::E1009,
                    "compact '->' guard is only valid at statement level",
                );
                None
            }
            None => Some(()),
        }
    }
}
