//! Diagnostic system for the FCx front end.
//!
//! - Error codes for searchability (`fcx explain E1002`)
//! - Clear messages (what went wrong)
//! - Primary span and line/column (where it went wrong)
//! - Notes and suggestions (how to fix)
//!
//! The lexer and parser record their own lightweight error values and
//! convert them to [`Diagnostic`] at the boundary; the queue and emitters
//! only ever see diagnostics.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod queue;

pub use diagnostic::{too_many_errors, Diagnostic, Label, Severity};
pub use error_code::{ErrorCode, ParseErrorCodeError};
pub use errors::ErrorDocs;
pub use queue::{DiagnosticConfig, DiagnosticQueue, DiagnosticSeverity};
