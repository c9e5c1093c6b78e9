//! Parser unit tests.
//!
//! - `expr.rs`: precedence, operator families, disambiguation
//! - `stmt.rs`: statements and items
//! - `recovery.rs`: error reporting, recovery and limits

mod expr;
mod recovery;

use fcx_ir::ast::{Expr, Program, StmtKind};
use fcx_lexer::{OperatorRegistry, OperatorTrie};

use crate::{parse_with_options, ParseResult, ParserOptions};

fn trie(registry: &OperatorRegistry) -> OperatorTrie {
    match OperatorTrie::build(registry) {
        Ok(trie) => trie,
        Err(err) => panic!("{err}"),
    }
}

fn parse_source(source: &str, options: ParserOptions) -> ParseResult {
    let registry = OperatorRegistry::new();
    let trie = trie(&registry);
    parse_with_options(source, &registry, &trie, options)
}

/// Parse a program that must be error free.
fn program(source: &str) -> Program {
    let result = parse_source(source, ParserOptions::default());
    assert!(
        !result.has_errors(),
        "unexpected errors in {source:?}: {:?} {:?}",
        result.errors,
        result.lex_errors
    );
    result.program
}

/// Parse a single expression statement.
fn expr(source: &str) -> Expr {
    let mut stmts = program(source).stmts;
    assert_eq!(stmts.len(), 1, "expected one statement in {source:?}");
    match stmts.remove(0).kind {
        StmtKind::Expr(expr) => expr,
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

/// Compact prefix rendering of an expression tree for assertions.
fn sexpr(expr: &Expr) -> String {
    use fcx_ir::ast::{BinaryOp, ExprKind, Literal};

    let list = |items: &[Expr]| items.iter().map(sexpr).collect::<Vec<_>>().join(" ");
    match &expr.kind {
        ExprKind::Literal(Literal::Int(value)) => value.to_string(),
        ExprKind::Literal(Literal::BigInt(_)) => "bigint".to_string(),
        ExprKind::Literal(Literal::Float(value)) => value.to_string(),
        ExprKind::Literal(Literal::Str(text)) => format!("{text:?}"),
        ExprKind::Literal(Literal::Char(c)) => format!("{c:?}"),
        ExprKind::Ident(name) => name.clone(),
        ExprKind::Binary { op, left, right } => {
            let op = match op {
                BinaryOp::Op(kind) => format!("{kind:?}"),
                BinaryOp::Comma => ",".to_string(),
                BinaryOp::Dot => ".".to_string(),
                BinaryOp::Tuple => ":".to_string(),
            };
            format!("({op} {} {})", sexpr(left), sexpr(right))
        }
        ExprKind::Unary { op, operand } => format!("({op:?} {})", sexpr(operand)),
        ExprKind::Ternary {
            op,
            first,
            second,
            third,
        } => format!("({op:?} {} {} {})", sexpr(first), sexpr(second), sexpr(third)),
        ExprKind::Call { callee, args } => format!("(call {} [{}])", sexpr(callee), list(args)),
        ExprKind::Index { base, index } => format!("(index {} {})", sexpr(base), sexpr(index)),
        ExprKind::Deref { pointer } => format!("(@ {})", sexpr(pointer)),
        ExprKind::Assign { op, target, value } => {
            format!("({op:?} {} {})", sexpr(target), sexpr(value))
        }
        ExprKind::MultiAssign { targets, value } => match value {
            Some(value) => format!("(multi {} {})", targets.join(":"), sexpr(value)),
            None => format!("(multi {})", targets.join(":")),
        },
        ExprKind::FunctionDef { name, params, body } => {
            format!("(fn {name} [{}] {})", params.join(" "), body.len())
        }
        ExprKind::MemoryOp { op, operands } => format!("(mem:{op:?} {})", list(operands)),
        ExprKind::AtomicOp { op, operands } => format!("(atomic:{op:?} {})", list(operands)),
        ExprKind::SyscallOp { op, number, args } => match number {
            Some(number) => format!("(sys:{op:?} #{} {})", sexpr(number), list(args)),
            None => format!("(sys:{op:?} {})", list(args)),
        },
        ExprKind::InlineAsm(asm) => format!("(asm {:?})", asm.template),
        ExprKind::ArrowGuard(cond) => format!("(guard {})", sexpr(cond)),
    }
}
