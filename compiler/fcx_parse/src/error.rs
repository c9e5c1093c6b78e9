//! Parse errors.
//!
//! The parser records a [`ParseError`] and returns `None` from the failing
//! production; recovery decides where parsing resumes. Errors become
//! [`Diagnostic`]s only at the crate boundary.


use std::fmt;

use fcx_diagnostic::{Diagnostic, ErrorCode};
use fcx_ir::Span;

use crate::context::Context;

/// A syntax error with its position and the context it occurred in.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    pub line: u32,
    pub column: u32,
    /// Innermost parse context when the error was recorded.
    pub context: Context,
}

impl ParseError {
    pub fn new(
        code: ErrorCode,
        message: impl Into<String>,
        span: Span,
        line: u32,
        column: u32,
        context: Context,
    ) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            line,
            column,
            context,
        }
    }

    /// Convert into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self.code {
            ErrorCode::E1002 => "expected an expression here",
            ErrorCode::E1003 => "unclosed here",
            ErrorCode::E1007 => "cannot assign to this",
            ErrorCode::E1008 => "block starts here",
            ErrorCode::E1009 => "guard used here",
            ErrorCode::E9002 => "error limit reached here",
            _ => "here",
        };
        let mut diag = Diagnostic::error(self.code)
            .with_message(self.message.clone())
            .with_label(self.span, label)
            .with_location(self.line, self.column);

        if self.context != Context::Expression {
            diag = diag.with_note(format!("while parsing {}", self.context));
        }

        match self.code {
            ErrorCode::E1004 => diag.with_suggestion("write the conditional as `cond ? then : else`"),
            ErrorCode::E1009 => {
                diag.with_suggestion("move `cond -> stmt` to its own statement or use `if cond { ... }`")
            }
            ErrorCode::E1010 => diag.with_suggestion("split the expression with intermediate `let` bindings"),
            ErrorCode::E9002 => diag.with_note("raise the limit with --error-limit=N, or 0 for no limit"),
            _ => diag,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

impl std::error::Error for ParseError {}
