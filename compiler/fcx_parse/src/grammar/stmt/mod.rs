//! Statement parsing.
//!
//! Statements are recursive descent over the Pratt core. Semicolons are
//! optional everywhere; a stray one is skipped. `;;` lexes as a registered
//! operator but is a plain terminator here.

mod guard;
mod items;
mod loops;

use fcx_diagnostic::ErrorCode;
use fcx_ir::ast::{Expr, ExprKind, Stmt, StmtKind, TypeRef};
use fcx_ir::{OpKind, TokenKind};

use crate::context::Context;
use crate::precedence::Precedence;
use crate::{Mark, Parser};

impl Parser<'_, '_> {
    pub(crate) fn parse_statement(&mut self) -> Option<Stmt> {
        self.nested(Self::statement)
    }

    fn statement(&mut self) -> Option<Stmt> {
        match self.current.kind {
            TokenKind::Pub => self.pub_item(),
            TokenKind::Fn => self.function(self.mark_current(), false),
            TokenKind::Mod => self.module(self.mark_current(), false),
            TokenKind::Use => self.use_decl(self.mark_current(), false),
            TokenKind::Let | TokenKind::Const => self.let_statement(),
            TokenKind::If => self.if_statement(),
            TokenKind::Loop => self.loop_statement(),
            TokenKind::While => self.while_statement(),
            TokenKind::Ret | TokenKind::Halt => self.exit_statement(),
            TokenKind::Break | TokenKind::Continue => {
                let start = self.mark_current();
                let kind = if self.check(&TokenKind::Break) {
                    StmtKind::Break
                } else {
                    StmtKind::Continue
                };
                self.advance();
                self.eat_terminator();
                Some(self.stmt_from(start, kind))
            }
            TokenKind::Op(OpKind::Conditional) => self.compact_conditional(),
            _ => self.expression_statement(),
        }
    }

    /// Statements inside `{ ... }`, after the opening brace.
    pub(crate) fn block_body(&mut self) -> Option<Vec<Stmt>> {
        self.in_context(Context::Expression, |p| {
            let mut stmts = Vec::new();
            while !p.check(&TokenKind::RBrace) && !p.is_at_end() && !p.aborted {
                if p.eat_terminator() {
                    continue;
                }
                if let Some(stmt) = p.statement_or_recover() {
                    stmts.push(stmt);
                }
            }
            p.expect(&TokenKind::RBrace, ErrorCode::E1003, "Expected '}' after block")?;
            Some(stmts)
        })
    }

    fn expression_statement(&mut self) -> Option<Stmt> {
        let start = self.mark_current();
        let expr = self.parse_expression()?;
        match guard::split_compact_guard(expr) {
            Ok(cond) => self.compact_if(start, cond),
            Err(expr) => {
                self.reject_stray_guard(&expr)?;
                self.eat_terminator();
                Some(self.stmt_from(start, StmtKind::Expr(expr)))
            }
        }
    }

    /// `?(cond) -> stmt`
    fn compact_conditional(&mut self) -> Option<Stmt> {
        let start = self.mark_current();
        self.advance();
        let expr = self.parse_expression()?;
        match guard::split_compact_guard(expr) {
            Ok(cond) => self.compact_if(start, cond),
            Err(_) => {
                self.error_at_current(ErrorCode::E1004, "Expected '->' after compact condition");
                None
            }
        }
    }

    /// The statement guarded by `cond ->`.
    fn compact_if(&mut self, start: Mark, cond: Expr) -> Option<Stmt> {
        self.reject_stray_guard(&cond)?;
        let then = self.parse_statement()?;
        Some(self.stmt_from(
            start,
            StmtKind::If {
                cond,
                then_branch: vec![then],
                else_branch: None,
                compact: true,
            },
        ))
    }

    /// `let`/`const name [: type] [= | := expr]`, or `let a:b:c := expr`.
    fn let_statement(&mut self) -> Option<Stmt> {
        let start = self.mark_current();
        let is_const = self.check(&TokenKind::Const);
        self.advance();

        let name_mark = self.mark_current();
        let name = self.expect_ident(ErrorCode::E1001, "Expected variable name")?;

        let mut ty = None;
        if self.eat(&TokenKind::Colon) {
            match &self.current.kind {
                TokenKind::Type(keyword) => {
                    ty = Some(TypeRef::Builtin(*keyword));
                    self.advance();
                }
                TokenKind::Ident(second) => {
                    let second = second.to_string();
                    self.advance();
                    if self.check(&TokenKind::Colon) || self.check_op(OpKind::AssignInfer) {
                        return self.multi_let(start, name_mark, is_const, vec![name, second]);
                    }
                    ty = Some(TypeRef::Named(second));
                }
                _ => {
                    self.error_at_current(ErrorCode::E1001, "Expected type after ':'");
                    return None;
                }
            }
        }

        let init = if self.eat_op(OpKind::Assign) || self.eat_op(OpKind::AssignInfer) {
            let value = self.in_context(Context::Assignment, |p| {
                p.parse_precedence(Precedence::Assignment)
            })?;
            self.reject_stray_guard(&value)?;
            Some(value)
        } else {
            None
        };
        self.eat_terminator();

        Some(self.stmt_from(
            start,
            StmtKind::Let {
                name,
                is_const,
                ty,
                init,
            },
        ))
    }

    /// Rest of `let a:b:c [:= expr]` once two names are known.
    fn multi_let(
        &mut self,
        start: Mark,
        names_start: Mark,
        is_const: bool,
        mut targets: Vec<String>,
    ) -> Option<Stmt> {
        while self.eat(&TokenKind::Colon) {
            targets.push(self.expect_ident(ErrorCode::E1001, "Expected name in multi-assignment")?);
        }
        let value = if self.eat_op(OpKind::AssignInfer) || self.eat_op(OpKind::Assign) {
            let value = self.in_context(Context::Assignment, |p| {
                p.parse_precedence(Precedence::Assignment)
            })?;
            self.reject_stray_guard(&value)?;
            Some(Box::new(value))
        } else {
            None
        };
        self.eat_terminator();

        let name = targets.first().cloned().unwrap_or_default();
        let init = self.expr_from(names_start, ExprKind::MultiAssign { targets, value });
        Some(self.stmt_from(
            start,
            StmtKind::Let {
                name,
                is_const,
                ty: None,
                init: Some(init),
            },
        ))
    }

    /// `if cond { } [else { } | else if ...]`, or `if cond -> stmt`.
    fn if_statement(&mut self) -> Option<Stmt> {
        let start = self.mark_current();
        self.advance();
        let cond = match guard::split_compact_guard(self.parse_expression()?) {
            Ok(cond) => return self.compact_if(start, cond),
            Err(cond) => cond,
        };
        self.reject_stray_guard(&cond)?;
        self.expect(&TokenKind::LBrace, ErrorCode::E1001, "Expected '{' after if condition")?;
        let then_branch = self.block_body()?;

        let else_branch = if self.eat(&TokenKind::Else) {
            if self.check(&TokenKind::If) {
                Some(vec![self.parse_statement()?])
            } else {
                self.expect(&TokenKind::LBrace, ErrorCode::E1001, "Expected '{' after 'else'")?;
                Some(self.block_body()?)
            }
        } else {
            None
        };

        Some(self.stmt_from(
            start,
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
                compact: false,
            },
        ))
    }

    /// `ret [expr]`, `halt [expr]`
    fn exit_statement(&mut self) -> Option<Stmt> {
        let start = self.mark_current();
        let is_halt = self.check(&TokenKind::Halt);
        self.advance();

        let value = if self.at_terminator()
            || self.check(&TokenKind::RBrace)
            || self.current.kind.is_statement_start()
            || self.is_at_end()
        {
            None
        } else {
            let value = self.parse_expression()?;
            self.reject_stray_guard(&value)?;
            Some(value)
        };
        self.eat_terminator();

        let kind = if is_halt {
            StmtKind::Halt(value)
        } else {
            StmtKind::Return(value)
        };
        Some(self.stmt_from(start, kind))
    }
}
