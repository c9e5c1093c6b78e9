//! Operator families with their own operand syntax.

use fcx_diagnostic::ErrorCode;
use fcx_ir::ast::{AtomicOpKind, Expr, ExprKind, MemoryOpKind, SyscallKind};
use fcx_ir::{OpKind, TokenKind};

use super::function_name;
use crate::context::Context;
use crate::precedence::Precedence;
use crate::{Mark, Parser};

/// Tokens after `->` that turn it into a compact-if guard.
fn starts_guarded_statement(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Ret
            | TokenKind::Halt
            | TokenKind::Break
            | TokenKind::Continue
            | TokenKind::If
            | TokenKind::Loop
            | TokenKind::While
            | TokenKind::Let
            | TokenKind::Const
    )
}

impl Parser<'_, '_> {
    /// `<=>`: function definition, compare-and-swap or swap.
    ///
    /// `name <=> fn(..) { .. }` defines a function; `a <=> b, c` is a CAS
    /// and `a <=> b` an atomic exchange.
    pub(crate) fn cas(&mut self, left: Expr) -> Option<Expr> {
        if self.resolve_op(OpKind::Cas, &left)? == OpKind::FunctionDef {
            return self.function_def(left);
        }
        let start = Mark::of(&left);
        self.in_context(Context::AtomicOp, |p| {
            let expected = p.parse_precedence(Precedence::Comparison)?;
            let (op, operands) = if p.eat(&TokenKind::Comma) {
                let desired = p.parse_precedence(Precedence::Comparison)?;
                (AtomicOpKind::Cas, vec![left, expected, desired])
            } else {
                (AtomicOpKind::Swap, vec![left, expected])
            };
            Some(p.expr_from(start, ExprKind::AtomicOp { op, operands }))
        })
    }

    /// `<==>` and `<===>`.
    pub(crate) fn swap(&mut self, left: Expr) -> Option<Expr> {
        let start = Mark::of(&left);
        self.in_context(Context::AtomicOp, |p| {
            let mut operands = vec![left, p.parse_precedence(Precedence::Comparison)?];
            if p.eat(&TokenKind::Comma) {
                operands.push(p.parse_precedence(Precedence::Comparison)?);
            }
            Some(p.expr_from(
                start,
                ExprKind::AtomicOp {
                    op: AtomicOpKind::Swap,
                    operands,
                },
            ))
        })
    }

    /// `name <=> fn(params) [-> type] { body }`
    fn function_def(&mut self, left: Expr) -> Option<Expr> {
        let start = Mark::of(&left);
        let Some(name) = function_name(&left).map(str::to_string) else {
            self.error_at(start, ErrorCode::E1005, "Expected function name before '<=>'");
            return None;
        };
        self.in_context(Context::FunctionDef, |p| {
            p.expect(&TokenKind::Fn, ErrorCode::E1005, "Expected 'fn' after '<=>'")?;
            let params = p.parameters()?;
            p.return_type()?;
            p.expect(
                &TokenKind::LBrace,
                ErrorCode::E1005,
                "Expected '{' before function body",
            )?;
            let body = p.block_body()?;
            Some(p.expr_from(start, ExprKind::FunctionDef { name, params, body }))
        })
    }

    /// Prefix atomics: `! p`, `!! p, v`, `!!! p, a, b`, `|!|`.
    pub(crate) fn atomic(&mut self) -> Option<Expr> {
        let start = self.mark_previous();
        let op = self.previous_op()?.atomic_op()?;
        let expected = op.arity();
        self.in_context(Context::AtomicOp, |p| {
            let mut operands = Vec::with_capacity(expected);
            for found in 0..expected {
                let missing = if found == 0 {
                    !p.at_expression_start()
                } else {
                    !p.eat(&TokenKind::Comma)
                };
                if missing {
                    p.error_at_current(
                        ErrorCode::E1006,
                        format!("atomic operation expects {expected} operands, found {found}"),
                    );
                    return None;
                }
                operands.push(p.parse_precedence(Precedence::Unary)?);
            }
            Some(p.expr_from(start, ExprKind::AtomicOp { op, operands }))
        })
    }

    /// `ptr !! value`, `ptr =! value`
    pub(crate) fn atomic_write(&mut self, pointer: Expr) -> Option<Expr> {
        let start = Mark::of(&pointer);
        let value = self.parse_precedence(Precedence::FieldLayout.next())?;
        Some(self.expr_from(
            start,
            ExprKind::AtomicOp {
                op: AtomicOpKind::Write,
                operands: vec![pointer, value],
            },
        ))
    }

    /// `counter ?!! 1`, `flags !|= mask`
    pub(crate) fn atomic_binary(&mut self, target: Expr) -> Option<Expr> {
        let start = Mark::of(&target);
        let op = self.previous_op()?.atomic_op()?;
        let operand = self.parse_precedence(Precedence::Call)?;
        Some(self.expr_from(
            start,
            ExprKind::AtomicOp {
                op,
                operands: vec![target, operand],
            },
        ))
    }

    /// `base ->> field` and the other layout accessors.
    pub(crate) fn layout(&mut self, base: Expr) -> Option<Expr> {
        let start = Mark::of(&base);
        let field = self.parse_precedence(Precedence::FieldLayout.next())?;
        Some(self.expr_from(
            start,
            ExprKind::MemoryOp {
                op: MemoryOpKind::LayoutAccess,
                operands: vec![base, field],
            },
        ))
    }

    /// `->`: a compact-if guard in front of a statement keyword, member
    /// access otherwise.
    pub(crate) fn arrow(&mut self, left: Expr) -> Option<Expr> {
        if starts_guarded_statement(&self.current.kind) {
            let start = Mark::of(&left);
            return Some(self.expr_from(start, ExprKind::ArrowGuard(Box::new(left))));
        }
        self.layout(left)
    }

    /// Memory family prefixes: `mem> size, align`, `>mem p`, `arena> a, n`.
    pub(crate) fn memory(&mut self) -> Option<Expr> {
        let start = self.mark_previous();
        let op = self.previous_op()?.memory_op()?;
        let operands =
            self.in_context(Context::MemoryOp, |p| p.optional_list(Precedence::Assignment))?;
        Some(self.expr_from(start, ExprKind::MemoryOp { op, operands }))
    }

    /// Prefix `$/ fd buf[, len]`.
    pub(crate) fn syscall_io(&mut self) -> Option<Expr> {
        let start = self.mark_previous();
        let op = self.previous_op()?.syscall()?;
        self.in_context(Context::Syscall, |p| {
            let fd = p.parse_precedence(Precedence::Call)?;
            p.eat(&TokenKind::Comma);
            let buf = p.parse_precedence(Precedence::Call)?;
            let mut args = vec![fd, buf];
            if p.eat(&TokenKind::Comma) {
                args.push(p.parse_precedence(Precedence::Additive)?);
            }
            Some(p.expr_from(
                start,
                ExprKind::SyscallOp {
                    op,
                    number: None,
                    args,
                },
            ))
        })
    }

    /// Infix `fd $/ buf[, len]`.
    pub(crate) fn syscall_io_infix(&mut self, fd: Expr) -> Option<Expr> {
        let start = Mark::of(&fd);
        let op = self.previous_op()?.syscall()?;
        self.in_context(Context::Syscall, |p| {
            let buf = p.parse_precedence(Precedence::Additive.next())?;
            let mut args = vec![fd, buf];
            if p.eat(&TokenKind::Comma) {
                args.push(p.parse_precedence(Precedence::Additive)?);
            }
            Some(p.expr_from(
                start,
                ExprKind::SyscallOp {
                    op,
                    number: None,
                    args,
                },
            ))
        })
    }

    /// `sys%(number, args...)`
    pub(crate) fn raw_syscall(&mut self) -> Option<Expr> {
        let start = self.mark_previous();
        self.expect(
            &TokenKind::LParen,
            ErrorCode::E1001,
            "Expected '(' after raw syscall operator",
        )?;
        self.in_context(Context::Syscall, |p| {
            let number = p.parse_precedence(Precedence::Assignment)?;
            let mut args = Vec::new();
            while p.eat(&TokenKind::Comma) {
                args.push(p.parse_precedence(Precedence::Assignment)?);
            }
            p.expect(
                &TokenKind::RParen,
                ErrorCode::E1003,
                "Expected ')' after syscall arguments",
            )?;
            Some(p.expr_from(
                start,
                ExprKind::SyscallOp {
                    op: SyscallKind::Raw,
                    number: Some(Box::new(number)),
                    args,
                },
            ))
        })
    }

    /// `#! cap`, `!# cap`
    pub(crate) fn privilege(&mut self) -> Option<Expr> {
        let start = self.mark_previous();
        let op = self.previous_op()?.syscall()?;
        let operand =
            self.in_context(Context::Syscall, |p| p.parse_precedence(Precedence::Call))?;
        Some(self.expr_from(
            start,
            ExprKind::SyscallOp {
                op,
                number: None,
                args: vec![operand],
            },
        ))
    }

    /// Wrapper and resource syscalls: `open> path, flags`, `fork>`.
    pub(crate) fn syscall_args(&mut self) -> Option<Expr> {
        let start = self.mark_previous();
        let op = self.previous_op()?.syscall()?;
        let args =
            self.in_context(Context::Syscall, |p| p.optional_list(Precedence::Assignment))?;
        Some(self.expr_from(
            start,
            ExprKind::SyscallOp {
                op,
                number: None,
                args,
            },
        ))
    }
}
