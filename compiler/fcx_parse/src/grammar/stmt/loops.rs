//! `loop` and `while`.

use fcx_diagnostic::ErrorCode;
use fcx_ir::ast::{LoopKind, Stmt, StmtKind};
use fcx_ir::{OpKind, TokenKind};

use crate::precedence::Precedence;
use crate::Parser;

impl Parser<'_, '_> {
    /// `loop { }`, `loop (n) << { }` or `loop i </ n: { }`.
    pub(super) fn loop_statement(&mut self) -> Option<Stmt> {
        let start = self.mark_current();
        self.advance();

        let kind = if self.eat(&TokenKind::LParen) {
            let count = self.parse_expression()?;
            self.reject_stray_guard(&count)?;
            self.expect(&TokenKind::RParen, ErrorCode::E1003, "Expected ')' after loop count")?;
            if !self.eat_op(OpKind::LShift) {
                self.error_at_current(ErrorCode::E1001, "Expected '<<' after loop count");
                return None;
            }
            LoopKind::Count(count)
        } else if let TokenKind::Ident(var) = &self.current.kind {
            let var = var.to_string();
            self.advance();
            if !self.eat_op(OpKind::SliceStart) {
                self.error_at_current(ErrorCode::E1001, "Expected '</' after loop variable");
                return None;
            }
            // Parsed above the `:` separator so the colon ends the bound.
            let bound = self.parse_precedence(Precedence::Assignment)?;
            self.reject_stray_guard(&bound)?;
            self.expect(&TokenKind::Colon, ErrorCode::E1001, "Expected ':' after loop bound")?;
            LoopKind::Range { var, bound }
        } else {
            LoopKind::Infinite
        };

        self.expect(&TokenKind::LBrace, ErrorCode::E1001, "Expected '{' before loop body")?;
        let body = self.block_body()?;
        Some(self.stmt_from(start, StmtKind::Loop { kind, body }))
    }

    /// `while cond { }`
    pub(super) fn while_statement(&mut self) -> Option<Stmt> {
        let start = self.mark_current();
        self.advance();
        let cond = self.parse_expression()?;
        self.reject_stray_guard(&cond)?;
        self.expect(&TokenKind::LBrace, ErrorCode::E1001, "Expected '{' after while condition")?;
        let body = self.block_body()?;
        Some(self.stmt_from(
            start,
            StmtKind::Loop {
                kind: LoopKind::While(cond),
                body,
            },
        ))
    }
}
