//! Items: functions, modules and `use` declarations.

use fcx_diagnostic::ErrorCode;
use fcx_ir::ast::{Stmt, StmtKind, TypeRef, UseDecl};
use fcx_ir::{OpKind, TokenKind};

use crate::context::Context;
use crate::{Mark, Parser};

impl Parser<'_, '_> {
    /// `pub fn`, `pub mod`, `pub use`
    pub(super) fn pub_item(&mut self) -> Option<Stmt> {
        let start = self.mark_current();
        self.advance();
        match self.current.kind {
            TokenKind::Fn => self.function(start, true),
            TokenKind::Mod => self.module(start, true),
            TokenKind::Use => self.use_decl(start, true),
            _ => {
                self.error_at_current(ErrorCode::E1001, "Expected 'fn', 'mod', or 'use' after 'pub'");
                None
            }
        }
    }

    /// `fn name(params) [-> type] { body }`, with `current` on `fn`.
    pub(super) fn function(&mut self, start: Mark, is_public: bool) -> Option<Stmt> {
        self.advance();
        let name = self.expect_ident(ErrorCode::E1005, "Expected function name")?;
        self.in_context(Context::FunctionDef, |p| {
            let params = p.parameters()?;
            let return_type = p.return_type()?;
            p.expect(
                &TokenKind::LBrace,
                ErrorCode::E1005,
                "Expected '{' before function body",
            )?;
            let body = p.block_body()?;
            Some(p.stmt_from(
                start,
                StmtKind::Function {
                    name,
                    params,
                    return_type,
                    body,
                    is_public,
                },
            ))
        })
    }

    /// `(a, b: i32, c)`. Parameter types are accepted and not kept.
    pub(crate) fn parameters(&mut self) -> Option<Vec<String>> {
        self.expect(&TokenKind::LParen, ErrorCode::E1005, "Expected '(' before parameters")?;
        let mut params = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                params.push(self.expect_ident(ErrorCode::E1005, "Expected parameter name")?);
                if self.eat(&TokenKind::Colon) {
                    self.type_ref()?;
                }
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RParen, ErrorCode::E1005, "Expected ')' after parameters")?;
        Some(params)
    }

    /// Optional `-> type`. The outer `Option` is failure.
    pub(crate) fn return_type(&mut self) -> Option<Option<TypeRef>> {
        if self.eat_op(OpKind::Arrow) {
            self.type_ref().map(Some)
        } else {
            Some(None)
        }
    }

    fn type_ref(&mut self) -> Option<TypeRef> {
        let ty = match &self.current.kind {
            TokenKind::Type(keyword) => TypeRef::Builtin(*keyword),
            TokenKind::Ident(name) => TypeRef::Named(name.to_string()),
            _ => {
                self.error_at_current(ErrorCode::E1001, "Expected type");
                return None;
            }
        };
        self.advance();
        Some(ty)
    }

    /// `mod name;` or `mod name { ... }`, with `current` on `mod`.
    pub(super) fn module(&mut self, start: Mark, is_public: bool) -> Option<Stmt> {
        self.advance();
        let name = self.expect_ident(ErrorCode::E1001, "Expected module name")?;
        let body = if self.eat(&TokenKind::LBrace) {
            Some(self.block_body()?)
        } else {
            self.eat_terminator();
            None
        };
        Some(self.stmt_from(
            start,
            StmtKind::Mod {
                name,
                is_public,
                body,
            },
        ))
    }

    /// `use a::b`, `use crate::a::*`, `use a::{b, self}`, `use a::b as c`,
    /// with `current` on `use`.
    pub(super) fn use_decl(&mut self, start: Mark, is_public: bool) -> Option<Stmt> {
        self.advance();
        let mut decl = UseDecl {
            is_public,
            ..UseDecl::default()
        };
        decl.path.push(self.path_segment()?);

        while self.eat(&TokenKind::DoubleColon) {
            if self.eat_op(OpKind::Mul) {
                decl.is_glob = true;
                break;
            }
            if self.eat(&TokenKind::LBrace) {
                while !self.check(&TokenKind::RBrace) {
                    let item = if self.eat(&TokenKind::SelfKw) {
                        "self".to_string()
                    } else {
                        self.expect_ident(ErrorCode::E1001, "Expected name in use list")?
                    };
                    decl.items.push(item);
                    if !self.eat(&TokenKind::Comma) {
                        break;
                    }
                }
                self.expect(&TokenKind::RBrace, ErrorCode::E1003, "Expected '}' after use list")?;
                break;
            }
            decl.path.push(self.path_segment()?);
        }

        if self.eat(&TokenKind::As) {
            decl.alias = Some(self.expect_ident(ErrorCode::E1001, "Expected name after 'as'")?);
        }
        self.eat_terminator();
        Some(self.stmt_from(start, StmtKind::Use(decl)))
    }

    fn path_segment(&mut self) -> Option<String> {
        let segment = match &self.current.kind {
            TokenKind::Ident(name) => name.to_string(),
            TokenKind::Crate => "crate".to_string(),
            TokenKind::SelfKw => "self".to_string(),
            TokenKind::Super => "super".to_string(),
            _ => {
                self.error_at_current(ErrorCode::E1001, "Expected path segment in 'use'");
                return None;
            }
        };
        self.advance();
        Some(segment)
    }
}
