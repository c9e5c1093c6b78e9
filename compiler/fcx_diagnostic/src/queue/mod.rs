//! Diagnostic queue for collecting, deduplicating, and sorting diagnostics.
//!
//! - Error limits to prevent overwhelming output
//! - Deduplication of same-line syntax errors
//! - Soft error suppression after hard errors
//! - Follow-on error filtering

use std::hash::{Hash, Hasher};

use crate::Diagnostic;

/// Number of characters to use for message prefix deduplication.
const MESSAGE_PREFIX_LEN: usize = 30;

/// Hash the first N characters of a message for dedup comparison.
#[inline]
fn message_prefix_hash(msg: &str) -> u64 {
    let byte_end = msg
        .char_indices()
        .nth(MESSAGE_PREFIX_LEN)
        .map_or(msg.len(), |(idx, _)| idx);
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    msg[..byte_end].hash(&mut hasher);
    hasher.finish()
}

/// Case-insensitive substring check without allocation.
#[inline]
fn contains_ascii_ci(haystack: &str, needle: &str) -> bool {
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

/// How the queue treats a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticSeverity {
    /// Always reported.
    Hard,
    /// Dropped once a hard error has been recorded, for errors that are
    /// only worth reporting on their own.
    Soft,
}

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors before stopping (0 = unlimited).
    pub error_limit: usize,
    /// Filter out follow-on errors that result from previous errors.
    pub filter_follow_on: bool,
    /// Deduplicate diagnostics with same line and similar content.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 10,
            filter_follow_on: true,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limits (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            filter_follow_on: false,
            deduplicate: false,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
struct QueuedDiagnostic {
    diagnostic: Diagnostic,
    line: u32,
    column: u32,
}

/// Queue for collecting, deduplicating, and sorting diagnostics.
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// queue.add(diagnostic, DiagnosticSeverity::Hard);
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    diagnostics: Vec<QueuedDiagnostic>,
    /// Count of errors (not warnings/notes).
    error_count: usize,
    /// Last line with a syntax error (for dedup).
    last_syntax_line: Option<u32>,
    /// Last (line, `message_prefix_hash`) for non-syntax error dedup.
    last_error: Option<(u32, u64)>,
    has_hard_error: bool,
    config: DiagnosticConfig,
}

impl Default for DiagnosticQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::with_config(DiagnosticConfig::default())
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            error_count: 0,
            last_syntax_line: None,
            last_error: None,
            has_hard_error: false,
            config,
        }
    }

    /// Add a diagnostic positioned by its own `location` (1:1 if unset).
    ///
    /// Returns `true` if the diagnostic was added, `false` if it was filtered.
    pub fn add(&mut self, diag: Diagnostic, severity: DiagnosticSeverity) -> bool {
        let (line, column) = diag.location.unwrap_or((1, 1));
        self.add_with_severity(diag, line, column, severity)
    }

    /// Add a diagnostic at an explicit position.
    pub fn add_with_severity(
        &mut self,
        diag: Diagnostic,
        line: u32,
        column: u32,
        severity: DiagnosticSeverity,
    ) -> bool {
        let soft = matches!(severity, DiagnosticSeverity::Soft);

        if self.limit_reached() {
            return false;
        }

        let is_error = diag.is_error();

        if soft && self.has_hard_error {
            return false;
        }

        if self.config.filter_follow_on && Self::is_follow_on(&diag) {
            return false;
        }

        if self.config.deduplicate && self.is_duplicate(&diag, line) {
            return false;
        }

        if is_error && !soft {
            self.has_hard_error = true;
        }

        if is_error {
            if diag.code.is_parser_error() {
                self.last_syntax_line = Some(line);
            } else {
                self.last_error = Some((line, message_prefix_hash(&diag.message)));
            }
            self.error_count += 1;
        }

        self.diagnostics.push(QueuedDiagnostic {
            diagnostic: diag,
            line,
            column,
        });
        true
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn has_hard_error(&self) -> bool {
        self.has_hard_error
    }

    /// Sort diagnostics by position and return them, clearing the queue.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let already_sorted = self
            .diagnostics
            .windows(2)
            .all(|w| (w[0].line, w[0].column) <= (w[1].line, w[1].column));

        if !already_sorted {
            self.diagnostics.sort_by_key(|d| (d.line, d.column));
        }

        let result: Vec<Diagnostic> = self.diagnostics.drain(..).map(|d| d.diagnostic).collect();

        self.error_count = 0;
        self.last_syntax_line = None;
        self.last_error = None;
        self.has_hard_error = false;

        result
    }

    /// Get diagnostics without clearing the queue.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().map(|d| &d.diagnostic)
    }

    /// Follow-on errors mention an operand or value that an earlier error
    /// already made invalid.
    fn is_follow_on(diag: &Diagnostic) -> bool {
        if !diag.is_error() {
            return false;
        }
        let msg = &diag.message;
        contains_ascii_ci(msg, "invalid operand")
            || contains_ascii_ci(msg, "invalid type")
            || msg.contains("<error>")
    }

    fn is_duplicate(&self, diag: &Diagnostic, line: u32) -> bool {
        if !diag.is_error() {
            return false;
        }

        if diag.code.is_parser_error() {
            self.last_syntax_line == Some(line)
        } else {
            self.last_error
                .is_some_and(|(last_line, last_hash)| {
                    last_line == line && message_prefix_hash(&diag.message) == last_hash
                })
        }
    }
}
