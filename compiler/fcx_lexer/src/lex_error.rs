//! Lexical errors.
//!
//! The lexer never stops on an error: it emits a `TokenKind::Error` token
//! and records a [`LexError`] alongside it, then carries on.

#[cfg(test)]
mod tests;

use fcx_diagnostic::{Diagnostic, ErrorCode};
use fcx_ir::Span;

/// A lexical error with its source position.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub message: String,
    pub span: Span,
    pub line: u32,
    pub column: u32,
    pub code: ErrorCode,
}

impl LexError {
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span, line: u32, column: u32) -> Self {
        LexError {
            message: message.into(),
            span,
            line,
            column,
            code,
        }
    }

    /// Convert into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self.code {
            ErrorCode::E0001 | ErrorCode::E0002 => "literal starts here",
            ErrorCode::E0003 => "unknown operator",
            _ => "here",
        };
        let diag = Diagnostic::error(self.code)
            .with_message(self.message.clone())
            .with_label(self.span, label)
            .with_location(self.line, self.column);
        match self.code {
            ErrorCode::E0001 => diag.with_suggestion("add a closing `\"`"),
            ErrorCode::E0002 => diag.with_suggestion("add a closing `'`"),
            _ => diag,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

impl std::error::Error for LexError {}
