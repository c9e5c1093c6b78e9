//! Expression parsing.
//!
//! - `mod.rs`: the Pratt loop, literals, grouping, postfix forms and the
//!   generic unary/binary/ternary handlers
//! - `ops.rs`: memory, atomic and syscall families, `<=>` and `->`
//! - `asm.rs`: inline assembly

mod asm;
mod ops;

use fcx_diagnostic::ErrorCode;
use fcx_ir::ast::{BinaryOp, Expr, ExprKind, Literal};
use fcx_ir::{OpKind, TokenKind};
use fcx_lexer::Associativity;

use crate::context::{disambiguate, is_context_sensitive, Context, DisambiguationInput};
use crate::precedence::Precedence;
use crate::rules::rule_for;
use crate::{Mark, Parser};

impl Parser<'_, '_> {
    /// Parse an expression whose operators all bind at least as tightly as
    /// `min`.
    pub(crate) fn parse_precedence(&mut self, min: Precedence) -> Option<Expr> {
        self.nested(|p| p.parse_precedence_inner(min))
    }

    fn parse_precedence_inner(&mut self, min: Precedence) -> Option<Expr> {
        let Some(prefix) = rule_for(&self.current.kind, self.registry).prefix else {
            self.error_at_current(ErrorCode::E1002, "Expected expression");
            return None;
        };
        self.advance();
        let mut left = prefix(self)?;

        loop {
            let rule = rule_for(&self.current.kind, self.registry);
            let Some(infix) = rule.infix else { break };
            if rule.precedence < min {
                break;
            }
            self.advance();
            left = infix(self, left)?;
        }
        Some(left)
    }

    /// True if the current token can begin an expression.
    pub(crate) fn at_expression_start(&self) -> bool {
        rule_for(&self.current.kind, self.registry).prefix.is_some()
    }

    /// Zero or more comma-separated expressions, each at `min`.
    pub(crate) fn optional_list(&mut self, min: Precedence) -> Option<Vec<Expr>> {
        let mut items = Vec::new();
        if !self.at_expression_start() {
            return Some(items);
        }
        loop {
            items.push(self.parse_precedence(min)?);
            if !self.eat(&TokenKind::Comma) {
                return Some(items);
            }
        }
    }

    /// Resolve a context-sensitive operator, enforcing strict mode.
    pub(crate) fn resolve_op(&mut self, kind: OpKind, left: &Expr) -> Option<OpKind> {
        let input = DisambiguationInput {
            left_is_bare_ident: function_name(left).is_some(),
            next_is_fn: self.check(&TokenKind::Fn),
            context: self.contexts.current(),
        };
        let resolved = disambiguate(kind, input, self.registry);
        if resolved != kind && self.options.disallow_ambiguous_ops && is_context_sensitive(kind) {
            let symbol = self.registry.primary(kind).map_or("?", |desc| desc.symbol);
            self.error_at_previous(
                ErrorCode::E1001,
                format!("Ambiguous operator '{symbol}' resolves to {resolved:?} here"),
            );
            return None;
        }
        Some(resolved)
    }

    // Prefix handlers

    pub(crate) fn literal(&mut self) -> Option<Expr> {
        let literal = match &self.previous.kind {
            TokenKind::Int(value) => Literal::Int(*value),
            TokenKind::BigInt(value) => Literal::BigInt(value.clone()),
            TokenKind::Float(bits) => Literal::Float(f64::from_bits(*bits)),
            TokenKind::Str(text) => Literal::Str(text.to_string()),
            TokenKind::Char(c) => Literal::Char(*c),
            _ => {
                self.error_at_previous(ErrorCode::E1002, "Expected expression");
                return None;
            }
        };
        Some(self.expr_from(self.mark_previous(), ExprKind::Literal(literal)))
    }

    /// Identifiers, plus `ptr`/`rawptr` used as values.
    pub(crate) fn identifier(&mut self) -> Option<Expr> {
        let name = match &self.previous.kind {
            TokenKind::Ident(name) => name.to_string(),
            TokenKind::Type(ty) => ty.as_str().to_string(),
            _ => {
                self.error_at_previous(ErrorCode::E1002, "Expected expression");
                return None;
            }
        };
        Some(self.expr_from(self.mark_previous(), ExprKind::Ident(name)))
    }

    pub(crate) fn grouping(&mut self) -> Option<Expr> {
        let inner = self.parse_expression()?;
        self.expect(&TokenKind::RParen, ErrorCode::E1003, "Expected ')' after expression")?;
        Some(inner)
    }

    /// `@ptr`
    pub(crate) fn deref(&mut self) -> Option<Expr> {
        let start = self.mark_previous();
        let pointer = self.parse_precedence(Precedence::Unary)?;
        Some(self.expr_from(
            start,
            ExprKind::Deref {
                pointer: Box::new(pointer),
            },
        ))
    }

    /// Sign, negation and unary intrinsics: `-x`, `sqrt> x`, `popcount> m`.
    pub(crate) fn unary(&mut self) -> Option<Expr> {
        let start = self.mark_previous();
        let op = self.previous_op()?;
        let operand = self.parse_precedence(Precedence::Call)?;
        Some(self.expr_from(
            start,
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
        ))
    }

    /// `print>`, `fmt>`, `scan>` and relatives. The operand is parsed in
    /// format-string context, where `<<<` means formatted output.
    pub(crate) fn format(&mut self) -> Option<Expr> {
        let start = self.mark_previous();
        let op = self.previous_op()?;
        let operand =
            self.in_context(Context::FormatString, |p| p.parse_precedence(Precedence::Assignment))?;
        Some(self.expr_from(
            start,
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
        ))
    }

    // Infix handlers

    pub(crate) fn call(&mut self, callee: Expr) -> Option<Expr> {
        let start = Mark::of(&callee);
        let mut args = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                args.push(self.parse_precedence(Precedence::Assignment)?);
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RParen, ErrorCode::E1003, "Expected ')' after arguments")?;
        Some(self.expr_from(
            start,
            ExprKind::Call {
                callee: Box::new(callee),
                args,
            },
        ))
    }

    pub(crate) fn index(&mut self, base: Expr) -> Option<Expr> {
        let start = Mark::of(&base);
        let index = self.parse_expression()?;
        self.expect(&TokenKind::RBracket, ErrorCode::E1003, "Expected ']' after index")?;
        Some(self.expr_from(
            start,
            ExprKind::Index {
                base: Box::new(base),
                index: Box::new(index),
            },
        ))
    }

    pub(crate) fn comma(&mut self, left: Expr) -> Option<Expr> {
        self.separator(left, BinaryOp::Comma, Precedence::Sequence)
    }

    /// `a : b`. When the right side is an assignment to a name and the
    /// left is a colon chain of names, the whole becomes `a:b := v`.
    pub(crate) fn tuple(&mut self, left: Expr) -> Option<Expr> {
        let right = self.parse_precedence(Precedence::Sequence.next())?;
        let targets = match &right.kind {
            ExprKind::Assign { target, .. } => target.as_ident().and_then(|last| {
                let mut names = chain_names(&left)?;
                names.push(last.to_string());
                Some(names)
            }),
            _ => None,
        };
        let Some(targets) = targets else {
            return Some(binary_node(self, left, BinaryOp::Tuple, right));
        };
        let value = match right.into_kind() {
            ExprKind::Assign { value, .. } => Some(value),
            _ => None,
        };
        Some(self.expr_from(Mark::of(&left), ExprKind::MultiAssign { targets, value }))
    }

    pub(crate) fn field(&mut self, left: Expr) -> Option<Expr> {
        self.separator(left, BinaryOp::Dot, Precedence::FieldLayout)
    }

    fn separator(&mut self, left: Expr, op: BinaryOp, precedence: Precedence) -> Option<Expr> {
        let right = self.parse_precedence(precedence.next())?;
        Some(binary_node(self, left, op, right))
    }

    /// Any registered binary operator without dedicated syntax.
    pub(crate) fn binary(&mut self, left: Expr) -> Option<Expr> {
        let kind = self.previous_op()?;
        let (precedence, assoc) = self.binding(kind);
        let op = self.resolve_op(kind, &left)?;
        let rhs = if assoc == Associativity::Right {
            precedence
        } else {
            precedence.next()
        };
        let right = self.parse_precedence(rhs)?;
        Some(binary_node(self, left, BinaryOp::Op(op), right))
    }

    /// `a OP b, c` for three-operand operators; without the comma the
    /// operator is binary.
    pub(crate) fn ternary(&mut self, first: Expr) -> Option<Expr> {
        let op = self.previous_op()?;
        let (precedence, _) = self.binding(op);
        let second = self.parse_precedence(precedence.next())?;
        if !self.eat(&TokenKind::Comma) {
            return Some(binary_node(self, first, BinaryOp::Op(op), second));
        }
        let third = self.parse_precedence(precedence.next())?;
        let start = Mark::of(&first);
        Some(self.expr_from(
            start,
            ExprKind::Ternary {
                op,
                first: Box::new(first),
                second: Box::new(second),
                third: Box::new(third),
            },
        ))
    }

    /// `=`, `:=` and the compound assignments. Right associative.
    ///
    /// A colon chain of names on the left (`a:b:c := v`) becomes a
    /// multi-assignment.
    pub(crate) fn assignment(&mut self, target: Expr) -> Option<Expr> {
        let op = self.previous_op()?;
        let start = Mark::of(&target);
        let targets = match &target.kind {
            ExprKind::Binary {
                op: BinaryOp::Tuple,
                ..
            } => chain_names(&target),
            _ => None,
        };
        if targets.is_none() && !is_assignable(&target) {
            self.error_at(start, ErrorCode::E1007, "Invalid assignment target");
            return None;
        }

        let value = self.in_context(Context::Assignment, |p| {
            p.parse_precedence(Precedence::Assignment)
        })?;

        let kind = match targets {
            Some(targets) => ExprKind::MultiAssign {
                targets,
                value: Some(Box::new(value)),
            },
            None => ExprKind::Assign {
                op,
                target: Box::new(target),
                value: Box::new(value),
            },
        };
        Some(self.expr_from(start, kind))
    }

    /// `cond ? then : else`
    pub(crate) fn conditional(&mut self, cond: Expr) -> Option<Expr> {
        let op = self.previous_op()?;
        let then = self.parse_precedence(Precedence::CombinedAssign)?;
        self.expect(
            &TokenKind::Colon,
            ErrorCode::E1004,
            "Expected ':' in conditional expression",
        )?;
        let otherwise = self.parse_precedence(Precedence::Assignment)?;
        let start = Mark::of(&cond);
        Some(self.expr_from(
            start,
            ExprKind::Ternary {
                op,
                first: Box::new(cond),
                second: Box::new(then),
                third: Box::new(otherwise),
            },
        ))
    }

    /// Binding power and associativity of an operator kind.
    fn binding(&self, kind: OpKind) -> (Precedence, Associativity) {
        self.registry.primary(kind).map_or(
            (Precedence::Call, Associativity::Left),
            |desc| (Precedence::from_level(desc.precedence), desc.assoc),
        )
    }
}

fn binary_node(parser: &Parser<'_, '_>, left: Expr, op: BinaryOp, right: Expr) -> Expr {
    let start = Mark::of(&left);
    parser.expr_from(
        start,
        ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
    )
}

/// The name a `<=>` definition would bind: `name` or `@name`.
pub(crate) fn function_name(expr: &Expr) -> Option<&str> {
    match &expr.kind {
        ExprKind::Ident(name) => Some(name),
        ExprKind::Deref { pointer } => pointer.as_ident(),
        _ => None,
    }
}

fn is_assignable(expr: &Expr) -> bool {
    matches!(
        expr.kind,
        ExprKind::Ident(_)
            | ExprKind::Index { .. }
            | ExprKind::Deref { .. }
            | ExprKind::Binary {
                op: BinaryOp::Dot,
                ..
            }
    )
}

/// Names of a colon chain `a:b:c`, or of a single name.
fn chain_names(expr: &Expr) -> Option<Vec<String>> {
    let mut names = Vec::new();
    let mut pending = vec![expr];
    while let Some(expr) = pending.pop() {
        match &expr.kind {
            ExprKind::Ident(name) => names.push(name.clone()),
            ExprKind::Binary {
                op: BinaryOp::Tuple,
                left,
                right,
            } => pending.extend([&**right, &**left]),
            _ => return None,
        }
    }
    Some(names)
}
