use fcx_diagnostic::ErrorCode;
use fcx_ir::ast::StmtKind;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::parse_source;
use crate::{Context, ParseResult, ParserOptions};

fn parse(source: &str) -> ParseResult {
    parse_source(source, ParserOptions::default())
}

fn codes(result: &ParseResult) -> Vec<ErrorCode> {
    result.errors.iter().map(|err| err.code).collect()
}

#[test]
fn test_recovers_after_each_bad_statement() {
    let result = parse("let = 1; let = 2; let ok := 3;");
    assert_eq!(codes(&result), vec![ErrorCode::E1001, ErrorCode::E1001]);
    assert_eq!(result.program.stmts.len(), 1);
    assert!(matches!(
        &result.program.stmts[0].kind,
        StmtKind::Let { name, .. } if name == "ok"
    ));
}

#[test]
fn test_expected_expression_does_not_consume_token() {
    let result = parse("let x := ; let y := 2");
    assert_eq!(codes(&result), vec![ErrorCode::E1002]);
    assert_eq!(result.errors[0].message, "Expected expression");
    assert_eq!(result.errors[0].column, 10);
    assert_eq!(result.program.stmts.len(), 1);
}

#[test]
fn test_unclosed_group() {
    let result = parse("(1 + 2");
    assert_eq!(codes(&result), vec![ErrorCode::E1003]);
    assert_eq!(result.errors[0].message, "Expected ')' after expression");
}

#[test]
fn test_conditional_without_colon() {
    let result = parse("x := c ? 1;");
    assert_eq!(codes(&result), vec![ErrorCode::E1004]);
    assert_eq!(result.errors[0].context, Context::Assignment);
}

#[test]
fn test_invalid_assignment_target() {
    let result = parse("1 = 2");
    assert_eq!(codes(&result), vec![ErrorCode::E1007]);
    assert_eq!(result.errors[0].message, "Invalid assignment target");
}

#[test]
fn test_atomic_operand_count() {
    let result = parse("!! p");
    assert_eq!(codes(&result), vec![ErrorCode::E1006]);
    assert_eq!(
        result.errors[0].message,
        "atomic operation expects 2 operands, found 1"
    );
    assert_eq!(result.errors[0].context, Context::AtomicOp);
}

#[test]
fn test_atomic_write_requires_value() {
    let result = parse("p!!; q !! 1");
    assert_eq!(codes(&result), vec![ErrorCode::E1002]);
    assert_eq!(result.errors[0].column, 4);
    assert_eq!(result.program.stmts.len(), 1);
}

#[test]
fn test_guard_outside_statement_level() {
    let result = parse("let y := x -> ret 1");
    assert_eq!(codes(&result), vec![ErrorCode::E1009]);
    // Recovery stops in front of `ret`, which then parses normally.
    assert_eq!(result.program.stmts.len(), 1);
    assert!(matches!(result.program.stmts[0].kind, StmtKind::Return(Some(_))));
}

#[test]
fn test_compact_conditional_needs_arrow() {
    let result = parse("?(x == 1) halt");
    assert_eq!(codes(&result), vec![ErrorCode::E1004]);
}

#[test]
fn test_pub_requires_item() {
    let result = parse("pub let x := 1");
    assert_eq!(codes(&result), vec![ErrorCode::E1001]);
    assert_eq!(result.program.stmts.len(), 1);
}

#[test]
fn test_recovery_inside_block() {
    let result = parse("fn f() { let = 1; ret 2 } let y := 3");
    assert_eq!(codes(&result), vec![ErrorCode::E1001]);
    assert_eq!(result.program.stmts.len(), 2);
    match &result.program.stmts[0].kind {
        StmtKind::Function { body, .. } => assert_eq!(body.len(), 1),
        other => panic!("expected fn, got {other:?}"),
    }
}

#[test]
fn test_stray_closing_brace() {
    let result = parse("} let x := 1");
    assert_eq!(codes(&result), vec![ErrorCode::E1002]);
    assert_eq!(result.program.stmts.len(), 1);
}

#[test]
fn test_missing_function_body() {
    let result = parse("add <=> fn(a, b) ret a");
    assert_eq!(codes(&result), vec![ErrorCode::E1005]);
    assert_eq!(result.errors[0].message, "Expected '{' before function body");
    assert_eq!(result.errors[0].context, Context::FunctionDef);
}

#[test]
fn test_nesting_limit() {
    let source = format!("{}1{}", "(".repeat(300), ")".repeat(300));
    let result = parse(&source);
    assert_eq!(codes(&result), vec![ErrorCode::E1010]);
    assert_eq!(result.errors[0].message, "expression nested too deeply");

    let shallow = format!("{}1{}", "(".repeat(10), ")".repeat(10));
    let result = parse_source(&shallow, ParserOptions::default().with_max_depth(8));
    assert_eq!(codes(&result), vec![ErrorCode::E1010]);
    assert!(!parse(&shallow).has_errors());
}

#[test]
fn test_long_flat_chains_parse() {
    let sum = format!("total := 1{}", " + 1".repeat(100_000));
    let result = parse(&sum);
    assert!(result.errors.is_empty());
    assert_eq!(result.program.stmts.len(), 1);

    let list = format!("f(0){}", ", x".repeat(100_000));
    let result = parse(&list);
    assert!(result.errors.is_empty());
    assert_eq!(result.program.stmts.len(), 1);

    let guarded = format!("1{} > 0 -> halt", " + 1".repeat(100_000));
    let result = parse(&guarded);
    assert!(result.errors.is_empty());
    assert!(matches!(
        result.program.stmts[0].kind,
        StmtKind::If { compact: true, .. }
    ));

    let names = format!("x{} := 1", ":x".repeat(100_000));
    let result = parse(&names);
    assert!(result.errors.is_empty());
    assert_eq!(result.program.stmts.len(), 1);
}

#[test]
fn test_guard_found_deep_in_long_chain() {
    let source = format!("let y := 1{} + x -> ret 1", " + 1".repeat(100_000));
    let result = parse(&source);
    assert_eq!(codes(&result), vec![ErrorCode::E1009]);
    assert!(matches!(result.program.stmts[0].kind, StmtKind::Return(Some(_))));
}

#[test]
fn test_error_limit_aborts() {
    let options = ParserOptions::default().with_error_limit(2);
    let result = parse_source("let = 1; let = 2; let = 3; let = 4; let ok := 1", options);
    assert_eq!(
        codes(&result),
        vec![ErrorCode::E1001, ErrorCode::E1001, ErrorCode::E9002]
    );
    assert_eq!(result.errors[2].message, "aborting due to 2 previous errors");
    assert!(result.program.stmts.is_empty());
}

#[test]
fn test_lex_errors_kept_separately() {
    let result = parse("let x := a ` b");
    assert!(result.errors.is_empty());
    assert_eq!(result.lex_errors.len(), 1);
    assert!(result.has_errors());
    assert_eq!(result.diagnostics().len(), 1);
    // The bad token is skipped: `a` ends the initializer, `b` is its own statement.
    assert_eq!(result.program.stmts.len(), 2);
}

#[test]
fn test_unterminated_asm_block() {
    let result = parse("asm% { mov rax, 1");
    assert_eq!(codes(&result), vec![ErrorCode::E1008]);
}

#[test]
fn test_asm_requires_body() {
    let result = parse("asm% 42");
    assert_eq!(codes(&result), vec![ErrorCode::E1001]);
    assert_eq!(result.errors[0].message, "Expected string or '{' after 'asm%'");
}

#[test]
fn test_strict_mode_rejects_context_resolution() {
    let strict = ParserOptions::default().strict();

    let result = parse_source("print> \"v\" <<< x", strict);
    assert_eq!(codes(&result), vec![ErrorCode::E1001]);
    assert_eq!(
        result.errors[0].message,
        "Ambiguous operator '<<<' resolves to FormatPrint here"
    );

    let result = parse_source("f <=> fn() {}", strict);
    assert_eq!(result.errors[0].code, ErrorCode::E1001);

    assert!(!parse_source("a <<< 3", strict).has_errors());
    assert!(!parse("print> \"v\" <<< x").has_errors());
}

#[test]
fn test_errors_convert_to_diagnostics() {
    let result = parse("x := c ? 1;");
    let diagnostics = result.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::E1004);
    assert!(diagnostics[0].notes.iter().any(|note| note.contains("while parsing")));
}

proptest! {
    #[test]
    fn test_arbitrary_input_terminates(source in "[a-z0-9 (){};:=<>!@$%#?,.+*/-]{0,64}") {
        let result = parse(&source);
        prop_assert!(result.program.stmts.len() <= source.len());
    }
}
