//! Debug commands: `lex` and `parse` for inspecting the front end.

use fcx_ir::Token;
use fcx_lexer::{Lexer, OperatorRegistry};
use fcx_parse::parse_with_options;
use tracing::debug;

use super::{build_trie, read_file, report_errors, CliOptions};

/// Lex a file and display the token stream.
pub fn lex_file(path: &str, options: &CliOptions) {
    let content = read_file(path);
    let registry = OperatorRegistry::new();
    let trie = build_trie(&registry, options);

    let mut lexer = Lexer::new(&content, &trie);
    let mut tokens: Vec<Token> = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for tok in &tokens {
        println!("  {:?} @ {}:{} {}", tok.kind, tok.line, tok.column, tok.span);
    }

    let errors = lexer.take_errors();
    debug!(path, tokens = tokens.len(), errors = errors.len(), "lexed file");
    if !errors.is_empty() {
        report_errors(path, &errors, &[], options);
        std::process::exit(1);
    }
}

/// Parse a file and display the AST.
pub fn parse_file(path: &str, options: &CliOptions) {
    let content = read_file(path);
    let registry = OperatorRegistry::new();
    let trie = build_trie(&registry, options);

    debug!(path, options = ?options.parser, "parsing file");
    let result = parse_with_options(&content, &registry, &trie, options.parser);

    println!("Parse result for '{path}':");
    println!("  Statements: {}", result.program.stmts.len());
    println!(
        "  Errors: {}",
        result.lex_errors.len() + result.errors.len()
    );
    println!();
    println!("{:#?}", result.program);

    if result.has_errors() {
        report_errors(path, &result.lex_errors, &result.errors, options);
        std::process::exit(1);
    }
}
