//! Command handlers for the `fcx` CLI.
//!
//! Each submodule implements one command. Shared helpers for reading
//! sources, building the operator tables and reporting diagnostics live
//! here in the module root.

use std::io::IsTerminal;

use fcx_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use fcx_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue, DiagnosticSeverity, ErrorCode};
use fcx_lexer::{LexError, OperatorRegistry, OperatorTrie};
use fcx_parse::ParseError;

#[cfg(test)]
mod tests;

mod debug;
mod explain;
mod options;
mod registry;

pub use debug::{lex_file, parse_file};
pub use explain::explain_error;
pub use options::{parse_cli_options, CliOptions};
pub use registry::{print_registry, registry_listing};

/// Read a file from disk, exiting with a user-friendly error message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Build the operator trie, reporting a broken operator table as an
/// internal error.
pub(crate) fn build_trie(registry: &OperatorRegistry, options: &CliOptions) -> OperatorTrie {
    let checked = registry
        .validate()
        .map_err(|err| err.to_string())
        .and_then(|()| OperatorTrie::build(registry).map_err(|err| err.to_string()));
    match checked {
        Ok(trie) => trie,
        Err(message) => {
            let diag = Diagnostic::error(ErrorCode::E9001)
                .with_message(format!("invalid operator table: {message}"));
            let mut emitter = emitter(options, None);
            emitter.emit(&diag);
            emitter.flush();
            std::process::exit(1);
        }
    }
}

fn emitter(options: &CliOptions, path: Option<&str>) -> TerminalEmitter<std::io::Stderr> {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty());
    let color = options.effective_color(no_color);
    let emitter = TerminalEmitter::<std::io::Stderr>::stderr(color, std::io::stderr().is_terminal());
    match path {
        Some(path) => emitter.with_file_name(path),
        None => emitter,
    }
}

/// Queue lexer and parser errors for reporting.
///
/// Both are hard errors: the parser skips the lexer's error tokens, so a
/// lexer error is never also reported as a parser error.
pub(crate) fn queue_errors(
    lex_errors: &[LexError],
    parse_errors: &[ParseError],
    options: &CliOptions,
) -> DiagnosticQueue {
    let mut config = DiagnosticConfig::default();
    if options.parser.error_limit > 0 {
        config.error_limit = options.parser.error_limit;
    }
    let mut queue = DiagnosticQueue::with_config(config);
    let diagnostics = lex_errors
        .iter()
        .map(LexError::to_diagnostic)
        .chain(parse_errors.iter().map(ParseError::to_diagnostic));
    for diag in diagnostics {
        queue.add(diag, DiagnosticSeverity::Hard);
    }
    queue
}

/// Emit lexer and parser errors for `path`, sorted by position.
///
/// Returns the number of errors emitted.
pub(crate) fn report_errors(
    path: &str,
    lex_errors: &[LexError],
    parse_errors: &[ParseError],
    options: &CliOptions,
) -> usize {
    let mut queue = queue_errors(lex_errors, parse_errors, options);
    let error_count = queue.error_count();
    let mut emitter = emitter(options, Some(path));
    emitter.emit_all(&queue.flush());
    emitter.emit_summary(error_count, 0);
    emitter.flush();
    error_count
}
