use fcx_diagnostic::ErrorCode;
use fcx_ir::{OpKind, Span, TokenKind, TypeKeyword};
use pretty_assertions::assert_eq;

use super::{tokenize, Lexer, RawBlock};
use crate::registry::{OperatorCategory, OperatorRegistry};
use crate::trie::OperatorTrie;

fn trie() -> OperatorTrie {
    match OperatorTrie::build(&OperatorRegistry::new()) {
        Ok(trie) => trie,
        Err(err) => panic!("{err}"),
    }
}

/// Token kinds without the trailing `Eof`.
fn kinds(source: &str) -> Vec<TokenKind> {
    let trie = trie();
    let mut tokens: Vec<TokenKind> = tokenize(source, &trie).into_iter().map(|t| t.kind).collect();
    assert_eq!(tokens.pop(), Some(TokenKind::Eof));
    tokens
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Ident(name.into())
}

fn op(kind: OpKind) -> TokenKind {
    TokenKind::Op(kind)
}

#[test]
fn test_let_statement() {
    assert_eq!(
        kinds("let x := 5;"),
        vec![
            TokenKind::Let,
            ident("x"),
            op(OpKind::AssignInfer),
            TokenKind::Int(5),
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_type_keywords() {
    assert_eq!(
        kinds("u1024 rawptr f64 i9"),
        vec![
            TokenKind::Type(TypeKeyword::U1024),
            TokenKind::Type(TypeKeyword::RawPtr),
            TokenKind::Type(TypeKeyword::F64),
            ident("i9"),
        ]
    );
}

#[test]
fn test_longest_operator_wins() {
    assert_eq!(
        kinds("a <<= b"),
        vec![ident("a"), op(OpKind::LShiftAssign), ident("b")]
    );
    assert_eq!(
        kinds("a<<<<<<b"),
        vec![ident("a"), op(OpKind::RotateLeft), op(OpKind::Lt), ident("b")]
    );
    assert_eq!(kinds("x->y"), vec![ident("x"), op(OpKind::Arrow), ident("y")]);
    assert_eq!(kinds("-5"), vec![op(OpKind::Sub), TokenKind::Int(5)]);
}

#[test]
fn test_word_operators_before_identifiers() {
    assert_eq!(kinds("mem> 64"), vec![op(OpKind::Allocate), TokenKind::Int(64)]);
    assert_eq!(kinds("mem 64"), vec![ident("mem"), TokenKind::Int(64)]);
    assert_eq!(kinds("memory"), vec![ident("memory")]);
    assert_eq!(
        kinds("print>\"hi\""),
        vec![op(OpKind::PrintCompact), TokenKind::Str("hi".into())]
    );
    assert_eq!(
        kinds("is_aligned?> p, 8"),
        vec![
            op(OpKind::IsAligned),
            ident("p"),
            TokenKind::Comma,
            TokenKind::Int(8),
        ]
    );
}

#[test]
fn test_colon_semicolon_dot_forms() {
    assert_eq!(
        kinds("a::b : c"),
        vec![
            ident("a"),
            TokenKind::DoubleColon,
            ident("b"),
            TokenKind::Colon,
            ident("c"),
        ]
    );
    assert_eq!(kinds("a :> b"), vec![ident("a"), op(OpKind::SliceEnd), ident("b")]);
    assert_eq!(kinds("a ;> b"), vec![ident("a"), op(OpKind::SliceEnd), ident("b")]);
    assert_eq!(kinds(";;"), vec![op(OpKind::DoubleSemicolon)]);
    assert_eq!(
        kinds("1..5 a.b"),
        vec![
            TokenKind::Int(1),
            op(OpKind::Range),
            TokenKind::Int(5),
            ident("a"),
            TokenKind::Dot,
            ident("b"),
        ]
    );
    assert_eq!(kinds("0..=9"), vec![TokenKind::Int(0), op(OpKind::RangeInclusive), TokenKind::Int(9)]);
}

#[test]
fn test_delimiters() {
    assert_eq!(
        kinds("( ) { } [ ] ,"),
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::LBracket,
            TokenKind::RBracket,
            TokenKind::Comma,
        ]
    );
}

#[test]
fn test_comments_win_over_slash_operators() {
    assert_eq!(kinds("a // line\nb /* block */ c"), vec![ident("a"), ident("b"), ident("c")]);
    assert_eq!(kinds("a /* never closed"), vec![ident("a")]);
    assert_eq!(kinds("a */ b"), vec![ident("a"), op(OpKind::PersistStore), ident("b")]);
    assert_eq!(kinds("a / b"), vec![ident("a"), op(OpKind::Div), ident("b")]);
}

#[test]
fn test_single_backslash_symbols() {
    assert_eq!(kinds(r"a <\ b"), vec![ident("a"), op(OpKind::SliceStart), ident("b")]);
    assert_eq!(kinds(r"a \> b"), vec![ident("a"), op(OpKind::SliceEnd), ident("b")]);
}

#[test]
fn test_string_literals() {
    assert_eq!(kinds(r#""a\tb\"c""#), vec![TokenKind::Str("a\tb\"c".into())]);
    assert_eq!(kinds(r#""keep \q""#), vec![TokenKind::Str(r"keep \q".into())]);
    assert_eq!(kinds("\"λ\""), vec![TokenKind::Str("λ".into())]);
}

#[test]
fn test_unterminated_string() {
    let trie = trie();
    let mut lexer = Lexer::new("x \"abc", &trie);
    assert_eq!(lexer.next_token().kind, ident("x"));
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Error("Unterminated string".into()));
    assert_eq!(token.span, Span::new(2, 6));
    assert!(lexer.next_token().is_eof());
    assert_eq!(lexer.errors().len(), 1);
    assert_eq!(lexer.errors()[0].code, ErrorCode::E0001);
}

#[test]
fn test_char_literals() {
    assert_eq!(
        kinds(r"'a' '\n' 'λ' '\''"),
        vec![
            TokenKind::Char('a'),
            TokenKind::Char('\n'),
            TokenKind::Char('λ'),
            TokenKind::Char('\''),
        ]
    );
}

#[test]
fn test_unterminated_char() {
    let trie = trie();
    let mut lexer = Lexer::new("'a", &trie);
    assert_eq!(
        lexer.next_token().kind,
        TokenKind::Error("Unterminated character literal".into())
    );
    assert_eq!(lexer.errors()[0].code, ErrorCode::E0002);

    lexer.reset("''");
    assert_eq!(
        lexer.next_token().kind,
        TokenKind::Error("Empty character literal".into())
    );
}

#[test]
fn test_numbers() {
    assert_eq!(
        kinds("0xFF 0b1010 0o17 1_000 2.5"),
        vec![
            TokenKind::Int(255),
            TokenKind::Int(10),
            TokenKind::Int(15),
            TokenKind::Int(1000),
            TokenKind::Float(2.5_f64.to_bits()),
        ]
    );
}

#[test]
fn test_bigint_literal() {
    let tokens = kinds("999999999999999999999999999999");
    match tokens.as_slice() {
        [TokenKind::BigInt(big)] => {
            assert_eq!(big.to_decimal_string(), "999999999999999999999999999999");
        }
        other => panic!("expected one BigInt, got {other:?}"),
    }
}

#[test]
fn test_number_errors() {
    let trie = trie();
    let too_large = format!("0x1{}", "0".repeat(256));
    let mut lexer = Lexer::new(&too_large, &trie);
    assert_eq!(
        lexer.next_token().kind,
        TokenKind::Error("Integer literal too large (max 1024 bits)".into())
    );
    assert_eq!(lexer.errors()[0].code, ErrorCode::E0005);

    let mut lexer = Lexer::new("0x;", &trie);
    assert!(matches!(lexer.next_token().kind, TokenKind::Error(_)));
    assert_eq!(lexer.errors()[0].code, ErrorCode::E0006);
    assert_eq!(lexer.next_token().kind, TokenKind::Semicolon);
}

#[test]
fn test_unknown_operator_with_suggestions() {
    let trie = trie();
    let mut lexer = Lexer::new("a $$ b", &trie);
    lexer.next_token();
    assert_eq!(
        lexer.next_token().kind,
        TokenKind::Error(
            "Unrecognized operator symbol: '$$' Did you mean: '$/', '$/$', '$%'?".into()
        )
    );
    assert_eq!(lexer.next_token().kind, ident("b"));
    assert_eq!(lexer.errors()[0].code, ErrorCode::E0003);
    assert_eq!(lexer.errors()[0].span, Span::new(2, 4));
}

#[test]
fn test_unknown_operator_without_suggestions() {
    assert_eq!(
        kinds("` x"),
        vec![
            TokenKind::Error("Unrecognized operator symbol: '`'".into()),
            ident("x"),
        ]
    );
}

#[test]
fn test_unknown_operator_run_is_capped() {
    let trie = trie();
    let source = "`".repeat(30);
    let mut lexer = Lexer::new(&source, &trie);
    assert_eq!(lexer.next_token().span, Span::new(0, 20));
    assert_eq!(lexer.next_token().span, Span::new(20, 30));
    assert!(lexer.next_token().is_eof());
}

#[test]
fn test_unexpected_character() {
    let trie = trie();
    let mut lexer = Lexer::new("a # é b", &trie);
    assert_eq!(lexer.next_token().kind, ident("a"));
    assert_eq!(
        lexer.next_token().kind,
        TokenKind::Error("Unexpected character: '#'".into())
    );
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Error("Unexpected character: 'é'".into()));
    assert_eq!(token.span.len(), 2);
    assert_eq!(lexer.next_token().kind, ident("b"));
    assert!(lexer.had_error());
    assert!(lexer.errors().iter().all(|e| e.code == ErrorCode::E0004));
}

#[test]
fn test_positions() {
    let trie = trie();
    let tokens = tokenize("let a\n  := 1", &trie);
    let positions: Vec<(u32, u32)> = tokens.iter().map(|t| (t.line, t.column)).collect();
    assert_eq!(positions, vec![(1, 1), (1, 5), (2, 3), (2, 6), (2, 7)]);
    assert_eq!(tokens[2].span, Span::new(8, 10));
}

#[test]
fn test_error_flag_is_sticky_until_reset() {
    let trie = trie();
    let mut lexer = Lexer::new("# ok", &trie);
    lexer.next_token();
    lexer.next_token();
    assert!(lexer.had_error());
    assert_eq!(lexer.take_errors().len(), 1);
    assert!(lexer.had_error());
    assert!(lexer.errors().is_empty());

    lexer.reset("ok");
    assert!(!lexer.had_error());
    assert_eq!(lexer.next_token().kind, ident("ok"));
}

#[test]
fn test_eof_repeats() {
    let trie = trie();
    let mut lexer = Lexer::new("", &trie);
    assert!(lexer.next_token().is_eof());
    assert!(lexer.next_token().is_eof());
    assert_eq!(tokenize("   \n\t", &trie).len(), 1);
}

#[test]
fn test_scan_raw_block() {
    let trie = trie();
    let mut lexer = Lexer::new("{ mov $0, 1 { x } } ;", &trie);
    assert_eq!(lexer.next_token().kind, TokenKind::LBrace);
    assert_eq!(
        lexer.scan_raw_block(),
        Ok(RawBlock {
            text: " mov $0, 1 { x } ",
            span: Span::new(1, 18),
        })
    );
    assert_eq!(lexer.next_token().kind, TokenKind::Semicolon);
}

#[test]
fn test_scan_raw_block_unterminated() {
    let trie = trie();
    let mut lexer = Lexer::new("{ nop", &trie);
    lexer.next_token();
    let err = match lexer.scan_raw_block() {
        Err(err) => err,
        Ok(block) => panic!("unexpected block {block:?}"),
    };
    assert_eq!(err.code, ErrorCode::E1008);
    assert_eq!(err.message, "Unterminated assembly block, expected '}'");
    assert!(lexer.next_token().is_eof());
    assert!(!lexer.had_error());
}

#[test]
fn test_category_coverage() {
    let registry = OperatorRegistry::new();
    let representatives = [
        ("<<", OperatorCategory::ShiftRotate),
        ("+=", OperatorCategory::ArithAssign),
        ("|>|", OperatorCategory::DataMovement),
        ("&>", OperatorCategory::Bitfield),
        ("mem>", OperatorCategory::MemoryAlloc),
        ("!!", OperatorCategory::AtomicConcur),
        ("$/", OperatorCategory::SyscallOs),
        ("print>", OperatorCategory::IoFormat),
        ("<?", OperatorCategory::Comparison),
        ("sqrt>", OperatorCategory::ArithDense),
    ];
    for (symbol, category) in representatives {
        let desc = registry
            .by_symbol(symbol)
            .unwrap_or_else(|| panic!("`{symbol}` missing"));
        assert_eq!(desc.category, category);
        assert_eq!(kinds(symbol), vec![op(desc.kind)], "`{symbol}`");
    }
}

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_lexer {
    use proptest::prelude::*;

    use super::{kinds, trie};
    use crate::lexer::tokenize;
    use crate::registry::OperatorRegistry;
    use fcx_ir::TokenKind;

    /// Symbols the lexer can never produce from source text.
    fn unreachable(symbol: &str) -> bool {
        symbol.starts_with("//") || symbol.starts_with("/*") || symbol.starts_with("::")
    }

    proptest! {
        #[test]
        fn terminates_on_arbitrary_input(source in "\\PC{0,200}") {
            let tokens = tokenize(&source, &trie());
            prop_assert!(tokens.len() <= source.len() + 1);
            prop_assert!(tokens.last().is_some_and(fcx_ir::Token::is_eof));
        }

        #[test]
        fn terminates_on_operator_soup(source in "[<>/|\\\\:;!?^@%$&*~`.,_=+#a-z0-9 \"'-]{0,120}") {
            let tokens = tokenize(&source, &trie());
            prop_assert!(tokens.len() <= source.len() + 1);
        }

        #[test]
        fn decimal_integers_round_trip(n in any::<u64>()) {
            prop_assert_eq!(kinds(&n.to_string()), vec![TokenKind::Int(n)]);
        }

        #[test]
        fn registered_symbols_lex_as_one_token(index in 0_usize..290) {
            let registry = OperatorRegistry::new();
            let desc = registry.by_index(index).unwrap_or_else(|| panic!("index {index}"));
            prop_assume!(!unreachable(desc.symbol));
            let source = format!(" {} ", desc.symbol);
            prop_assert_eq!(kinds(&source), vec![TokenKind::Op(desc.kind)]);
        }
    }
}
