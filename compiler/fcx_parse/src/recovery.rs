//! Error recovery.
//!
//! Panic-mode recovery: the first error in a statement sets `panic_mode`,
//! which silences follow-on errors. The statement loops then skip tokens
//! until a likely statement boundary and clear the flag.

use fcx_ir::ast::Stmt;
use fcx_ir::{OpKind, TokenKind};
use tracing::trace;

use crate::Parser;

impl Parser<'_, '_> {
    /// Skip to the next statement boundary and leave panic mode.
    ///
    /// Stops after a `;`, in front of a statement keyword, or in front of a
    /// `}` so the enclosing block can close.
    pub(crate) fn synchronize(&mut self) {
        self.panic_mode = false;
        while !self.is_at_end() {
            if matches!(
                self.previous.kind,
                TokenKind::Semicolon | TokenKind::Op(OpKind::DoubleSemicolon)
            ) || self.current.kind.is_statement_start()
                || self.check(&TokenKind::RBrace)
            {
                return;
            }
            trace!(token = ?self.current.kind, line = self.current.line, "recovery skipped token");
            self.advance();
        }
    }

    /// Parse a statement, recovering on failure.
    ///
    /// Always consumes at least one token unless at EOF, so statement loops
    /// cannot stall.
    pub(crate) fn statement_or_recover(&mut self) -> Option<Stmt> {
        let before = self.current.span;
        let stmt = self.parse_statement();
        if stmt.is_none() {
            self.synchronize();
            if self.current.span == before && !self.is_at_end() {
                self.advance();
            }
        }
        stmt
    }
}
