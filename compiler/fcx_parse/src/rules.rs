//! Pratt rule table.
//!
//! One `match` from token kind to [`ParseRule`]. Operators with dedicated
//! syntax get explicit arms; every other registered operator falls back to
//! its primary descriptor (arity and associativity decide the shape).


use fcx_ir::ast::Expr;
use fcx_ir::{OpKind, TokenKind};
use fcx_lexer::{Arity, Associativity, OperatorRegistry};

use crate::precedence::Precedence;
use crate::Parser;

pub(crate) type PrefixFn<'src, 't> = fn(&mut Parser<'src, 't>) -> Option<Expr>;
pub(crate) type InfixFn<'src, 't> = fn(&mut Parser<'src, 't>, Expr) -> Option<Expr>;

/// Handlers and binding power for one token kind.
pub(crate) struct ParseRule<'src, 't> {
    pub prefix: Option<PrefixFn<'src, 't>>,
    pub infix: Option<InfixFn<'src, 't>>,
    /// Binding power of the infix form.
    pub precedence: Precedence,
}

impl<'src, 't> ParseRule<'src, 't> {
    const fn none() -> Self {
        ParseRule {
            prefix: None,
            infix: None,
            precedence: Precedence::None,
        }
    }

    const fn prefix(prefix: PrefixFn<'src, 't>) -> Self {
        ParseRule {
            prefix: Some(prefix),
            infix: None,
            precedence: Precedence::None,
        }
    }

    const fn infix(infix: InfixFn<'src, 't>, precedence: Precedence) -> Self {
        ParseRule {
            prefix: None,
            infix: Some(infix),
            precedence,
        }
    }

    const fn both(
        prefix: PrefixFn<'src, 't>,
        infix: InfixFn<'src, 't>,
        precedence: Precedence,
    ) -> Self {
        ParseRule {
            prefix: Some(prefix),
            infix: Some(infix),
            precedence,
        }
    }
}

/// Look up the rule for a token kind.
pub(crate) fn rule_for<'src, 't>(kind: &TokenKind, registry: &OperatorRegistry) -> ParseRule<'src, 't> {
    match kind {
        TokenKind::Int(_)
        | TokenKind::BigInt(_)
        | TokenKind::Float(_)
        | TokenKind::Str(_)
        | TokenKind::Char(_) => ParseRule::prefix(Parser::literal),
        TokenKind::Ident(_) => ParseRule::prefix(Parser::identifier),
        TokenKind::Type(ty) if ty.is_pointer() => ParseRule::prefix(Parser::identifier),
        TokenKind::LParen => ParseRule::both(Parser::grouping, Parser::call, Precedence::Call),
        TokenKind::LBracket => ParseRule::infix(Parser::index, Precedence::Call),
        TokenKind::Comma => ParseRule::infix(Parser::comma, Precedence::Sequence),
        TokenKind::Colon => ParseRule::infix(Parser::tuple, Precedence::Sequence),
        TokenKind::Dot => ParseRule::infix(Parser::field, Precedence::FieldLayout),
        TokenKind::Op(op) => op_rule(*op, registry),
        _ => ParseRule::none(),
    }
}

fn op_rule<'src, 't>(kind: OpKind, registry: &OperatorRegistry) -> ParseRule<'src, 't> {
    match kind {
        OpKind::At => ParseRule::prefix(Parser::deref),
        k if k.is_assignment() => ParseRule::infix(Parser::assignment, Precedence::Assignment),
        OpKind::Conditional => ParseRule::infix(Parser::conditional, Precedence::Logical),
        OpKind::Cas => ParseRule::infix(Parser::cas, Precedence::CombinedAssign),
        OpKind::Swap => ParseRule::infix(Parser::swap, Precedence::CombinedAssign),
        OpKind::AtomicWrite => {
            ParseRule::both(Parser::atomic, Parser::atomic_write, Precedence::FieldLayout)
        }
        OpKind::AtomicCond
        | OpKind::AtomicFetchAdd
        | OpKind::AtomicFetchSub
        | OpKind::AtomicAnd
        | OpKind::AtomicOr
        | OpKind::AtomicXor
        | OpKind::AtomicShl
        | OpKind::AtomicShr => {
            ParseRule::both(Parser::atomic, Parser::atomic_binary, Precedence::Unary)
        }
        k if k.atomic_op().is_some() => ParseRule::prefix(Parser::atomic),
        k if k.is_layout_access() => ParseRule::infix(Parser::layout, Precedence::FieldLayout),
        OpKind::Arrow => ParseRule::infix(Parser::arrow, Precedence::FieldLayout),
        OpKind::WriteSyscall | OpKind::ReadSyscall => {
            ParseRule::both(Parser::syscall_io, Parser::syscall_io_infix, Precedence::Additive)
        }
        OpKind::RawSyscall => ParseRule::prefix(Parser::raw_syscall),
        OpKind::PrivEscalate | OpKind::CapabilityCheck => ParseRule::prefix(Parser::privilege),
        k if k.syscall().is_some() => ParseRule::prefix(Parser::syscall_args),
        OpKind::InlineAsm => ParseRule::prefix(Parser::inline_asm),
        k if k.memory_op().is_some() => ParseRule::prefix(Parser::memory),
        k if k.is_format() => ParseRule::prefix(Parser::format),
        OpKind::Add | OpKind::Sub => {
            ParseRule::both(Parser::unary, Parser::binary, Precedence::Additive)
        }
        OpKind::EncodeBytes | OpKind::DecodeBytes => {
            ParseRule::both(Parser::unary, Parser::binary, Precedence::Unary)
        }
        OpKind::Offsetof | OpKind::StaticAssert => ParseRule::prefix(Parser::unary),
        // Statement terminator, never an operand separator.
        OpKind::DoubleSemicolon => ParseRule::none(),
        k => generic_rule(k, registry),
    }
}

/// Shape an operator from its primary descriptor.
fn generic_rule<'src, 't>(kind: OpKind, registry: &OperatorRegistry) -> ParseRule<'src, 't> {
    let Some(desc) = registry.primary(kind) else {
        return ParseRule::none();
    };
    let prefix: Option<PrefixFn<'src, 't>> = match desc.arity {
        Arity::Unary => Some(Parser::unary),
        _ => None,
    };
    let infix: Option<InfixFn<'src, 't>> = match (desc.assoc, desc.arity) {
        (Associativity::Neither, _) => None,
        (_, Arity::Ternary) => Some(Parser::ternary),
        _ => Some(Parser::binary),
    };
    ParseRule {
        prefix,
        infix,
        precedence: if infix.is_some() {
            Precedence::from_level(desc.precedence)
        } else {
            Precedence::None
        },
    }
}
