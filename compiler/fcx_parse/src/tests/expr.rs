use fcx_ir::ast::{ExprKind, Literal};
use pretty_assertions::assert_eq;

use super::{expr, program, sexpr};

fn shape(source: &str) -> String {
    sexpr(&expr(source))
}

// Precedence and associativity

#[test]
fn test_multiplicative_binds_tighter_than_additive() {
    assert_eq!(shape("1 + 2 * 3"), "(Add 1 (Mul 2 3))");
    assert_eq!(shape("1 * 2 + 3"), "(Add (Mul 1 2) 3)");
}

#[test]
fn test_left_associative_chain() {
    assert_eq!(shape("a - b - c"), "(Sub (Sub a b) c)");
}

#[test]
fn test_assignment_is_right_associative() {
    assert_eq!(shape("a = b = c"), "(Assign a (Assign b c))");
}

#[test]
fn test_compound_assignments() {
    assert_eq!(shape("x += 1"), "(AddAssign x 1)");
    assert_eq!(shape("x <<= 2"), "(LShiftAssign x 2)");
    assert_eq!(shape("x >>>= 1"), "(LogicalRShiftAssign x 1)");
    assert_eq!(shape("x := 5"), "(AssignInfer x 5)");
}

#[test]
fn test_shift_binds_tighter_than_comparison() {
    assert_eq!(shape("a << 1 < b"), "(Lt (LShift a 1) b)");
}

#[test]
fn test_grouping_overrides_precedence() {
    assert_eq!(shape("(1 + 2) * 3"), "(Mul (Add 1 2) 3)");
}

#[test]
fn test_call_and_index_postfix() {
    assert_eq!(shape("f(a, b + 1)[0]"), "(index (call f [a (Add b 1)]) 0)");
    assert_eq!(shape("f()"), "(call f [])");
}

#[test]
fn test_prefix_operators() {
    assert_eq!(shape("-x * y"), "(Mul (Sub x) y)");
    assert_eq!(shape("sqrt> x + 1"), "(Add (Sqrt x) 1)");
    assert_eq!(shape("@p + 1"), "(Add (@ p) 1)");
}

#[test]
fn test_field_access_left_nested() {
    assert_eq!(shape("a.b.c"), "(. (. a b) c)");
}

#[test]
fn test_conditional_expression() {
    assert_eq!(shape("c ? a : b"), "(Conditional c a b)");
    assert_eq!(shape("x := c ? 1 : 2"), "(AssignInfer x (Conditional c 1 2))");
}

#[test]
fn test_comma_sequence() {
    assert_eq!(shape("a, b"), "(, a b)");
}

#[test]
fn test_ternary_operator_with_and_without_comma() {
    assert_eq!(shape("x </> a, b"), "(SliceRange x a b)");
    assert_eq!(shape("a &< b"), "(BitfieldInsert a b)");
}

#[test]
fn test_multi_assignment_expression() {
    assert_eq!(shape("a:b:c := 5"), "(multi a:b:c 5)");
}

#[test]
fn test_literals() {
    match &expr("2.5").kind {
        ExprKind::Literal(Literal::Float(value)) => assert!((*value - 2.5).abs() < f64::EPSILON),
        other => panic!("expected a float, got {other:?}"),
    }
    assert_eq!(shape("'a'"), "'a'");
    assert_eq!(shape("\"hi\""), "\"hi\"");
    assert_eq!(shape("0xff"), "255");
    assert_eq!(shape("ptr"), "ptr");
}

// `<=>` and atomics

#[test]
fn test_function_definition_expression() {
    assert_eq!(shape("add <=> fn(a, b) { ret a + b; }"), "(fn add [a b] 1)");
    assert_eq!(shape("@fib <=> fn(n: i32) -> i32 { ret n }"), "(fn fib [n] 1)");
}

#[test]
fn test_cas_and_swap() {
    assert_eq!(shape("a <=> b, c"), "(atomic:Cas a b c)");
    assert_eq!(shape("a <=> b"), "(atomic:Swap a b)");
    assert_eq!(shape("a <==> b"), "(atomic:Swap a b)");
    assert_eq!(shape("a <===> b, c"), "(atomic:Swap a b c)");
}

#[test]
fn test_cas_inside_function_body() {
    let def = expr("f <=> fn() { a <=> b, c }");
    let ExprKind::FunctionDef { body, .. } = &def.kind else {
        panic!("expected a function definition");
    };
    match &body[0].kind {
        fcx_ir::ast::StmtKind::Expr(inner) => assert_eq!(sexpr(inner), "(atomic:Cas a b c)"),
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

#[test]
fn test_prefix_atomics() {
    assert_eq!(shape("!! p, 5"), "(atomic:Write p 5)");
    assert_eq!(shape("! flag"), "(atomic:Read flag)");
    assert_eq!(shape("|!|"), "(atomic:Fence )");
    assert_eq!(shape("!!! p, a, b"), "(atomic:Triple p a b)");
}

#[test]
fn test_infix_atomics() {
    assert_eq!(shape("p !! 1"), "(atomic:Write p 1)");
    assert_eq!(shape("p =! 1"), "(atomic:Write p 1)");
    assert_eq!(shape("count ?!! 1"), "(atomic:FetchAdd count 1)");
}

// Memory and layout

#[test]
fn test_memory_family() {
    assert_eq!(shape("mem> 1024, 8"), "(mem:Allocate 1024 8)");
    assert_eq!(shape(">mem p"), "(mem:Deallocate p)");
    assert_eq!(shape("arena> a, 64"), "(mem:ArenaAlloc a 64)");
    assert_eq!(shape(">arena a"), "(mem:ArenaReset a)");
}

#[test]
fn test_layout_access() {
    assert_eq!(shape("base ->> field"), "(mem:LayoutAccess base field)");
    assert_eq!(shape("p -> next"), "(mem:LayoutAccess p next)");
    assert_eq!(shape("p <- prev"), "(mem:LayoutAccess p prev)");
}

// Syscalls

#[test]
fn test_raw_syscall() {
    assert_eq!(shape("sys%(60, 0)"), "(sys:Raw #60 0)");
    assert_eq!(shape("sys%(39)"), "(sys:Raw #39 )");
}

#[test]
fn test_write_syscall_forms() {
    assert_eq!(shape("1 $/ msg, 5"), "(sys:Write 1 msg 5)");
    assert_eq!(shape("$/ 1 msg"), "(sys:Write 1 msg)");
    assert_eq!(shape("$/ 1, msg, len"), "(sys:Write 1 msg len)");
}

#[test]
fn test_privilege_and_wrappers() {
    assert_eq!(shape("#! caps"), "(sys:PrivEscalate caps)");
    assert_eq!(shape("open> path, flags"), "(sys:Wrapper path flags)");
    assert_eq!(shape("fork>"), "(sys:Wrapper )");
}

// Context-sensitive operators

#[test]
fn test_rotate_left_becomes_format_print_inside_print() {
    assert_eq!(shape("print> \"v\" <<< x"), "(PrintCompact (FormatPrint \"v\" x))");
    assert_eq!(shape("a <<< 3"), "(RotateLeft a 3)");
}

#[test]
fn test_shifts_become_direct_io_inside_syscalls() {
    assert_eq!(shape("@sys fd << buf"), "(sys:Wrapper (DirectInput fd buf))");
    assert_eq!(shape("@sys fd >> buf"), "(sys:Wrapper (DirectOutput fd buf))");
    assert_eq!(shape("fd << buf"), "(LShift fd buf)");
}

#[test]
fn test_cas_inside_function_body_past_context_capacity() {
    let source = format!(
        "{}f <=> fn() {{ a <=> b, c }}{}",
        "if x { ".repeat(15),
        " }".repeat(15)
    );
    assert_eq!(program(&source).stmts.len(), 1);

    let deeper = format!(
        "{}f <=> fn() {{ a <=> b, c }}{}",
        "if x { ".repeat(40),
        " }".repeat(40)
    );
    assert_eq!(program(&deeper).stmts.len(), 1);
}

// Inline assembly

#[test]
fn test_inline_asm_string_with_placeholders() {
    let asm = expr(r#"asm% "mov ${dst}, ${src}" -> "=r" <- "r"(x + 1) ~> "memory", "cc""#);
    let ExprKind::InlineAsm(asm) = &asm.kind else {
        panic!("expected inline assembly");
    };
    assert_eq!(asm.template, "mov $0, $1");
    assert_eq!(asm.outputs, vec!["=r".to_string()]);
    let inputs: Vec<_> = asm
        .inputs
        .iter()
        .map(|input| format!("{} {}", input.constraint, sexpr(&input.expr)))
        .collect();
    assert_eq!(inputs, vec!["r dst", "r src", "r (Add x 1)"]);
    assert_eq!(asm.clobbers, vec!["memory".to_string(), "cc".to_string()]);
    assert!(asm.is_volatile);
}

#[test]
fn test_inline_asm_block_is_normalized() {
    assert_eq!(
        shape("asm% {\n    mov rax, 60\n\n    syscall\n}"),
        "(asm \"mov rax, 60\\nsyscall\")"
    );
}

#[test]
fn test_expression_positions() {
    let parsed = expr("  a + b");
    assert_eq!((parsed.line, parsed.column), (1, 3));
    assert_eq!(parsed.span.start, 2);
    assert_eq!(parsed.span.end, 7);
}
