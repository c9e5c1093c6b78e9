use fcx_diagnostic::ErrorCode;
use fcx_lexer::{OperatorRegistry, OperatorTrie};
use fcx_parse::{parse, ParserOptions};
use pretty_assertions::assert_eq;

use super::{queue_errors, CliOptions};

fn parse_source(source: &str) -> fcx_parse::ParseResult {
    let registry = OperatorRegistry::new();
    let trie = match OperatorTrie::build(&registry) {
        Ok(trie) => trie,
        Err(err) => panic!("{err}"),
    };
    parse(source, &registry, &trie)
}

#[test]
fn test_lexer_and_parser_errors_are_both_reported() {
    let result = parse_source("let = 1\nlet x := a ` b");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.lex_errors.len(), 1);

    let mut queue = queue_errors(&result.lex_errors, &result.errors, &CliOptions::default());
    assert_eq!(queue.error_count(), 2);
    let diagnostics = queue.flush();
    assert_eq!(diagnostics[0].code, ErrorCode::E1001);
    assert!(diagnostics[1].code.is_lexer_error());
}

#[test]
fn test_lexer_error_before_parser_error_is_kept() {
    let result = parse_source("let x := a ` b\nlet = 1");
    let mut queue = queue_errors(&result.lex_errors, &result.errors, &CliOptions::default());
    let codes: Vec<_> = queue.flush().iter().map(|diag| diag.code).collect();
    assert_eq!(codes.len(), 2);
    assert!(codes[0].is_lexer_error());
    assert_eq!(codes[1], ErrorCode::E1001);
}

#[test]
fn test_parser_error_limit_caps_queue() {
    let result = parse_source("let = 1\nlet = 2\nlet = 3");
    let options = CliOptions {
        parser: ParserOptions::default().with_error_limit(2),
        ..CliOptions::default()
    };
    let queue = queue_errors(&result.lex_errors, &result.errors, &options);
    assert_eq!(queue.error_count(), 2);
}
