//! Inline assembly.
//!
//! ```text
//! asm% "mov ${dst}, ${src}"
//! asm% { mov rax, 60
//!        syscall } -> "=r" <- "r"(code) ~> "memory", "cc"
//! ```
//!
//! Block bodies are taken verbatim from the lexer and normalized line by
//! line. `${name}` placeholders become positional `$N` operands bound to
//! leading `"r"` inputs.

#[cfg(test)]
mod tests;

use fcx_diagnostic::ErrorCode;
use fcx_ir::ast::{AsmInput, Expr, ExprKind, InlineAsm};
use fcx_ir::{OpKind, TokenKind};

use crate::precedence::Precedence;
use crate::{Mark, Parser};

impl Parser<'_, '_> {
    pub(crate) fn inline_asm(&mut self) -> Option<Expr> {
        let start = self.mark_previous();

        let source = if let TokenKind::Str(text) = &self.current.kind {
            let text = text.to_string();
            self.advance();
            text
        } else if self.check(&TokenKind::LBrace) {
            // `current` is the `{`; the lexer sits right after it.
            match self.lexer.scan_raw_block() {
                Ok(block) => {
                    let text = normalize_block(block.text);
                    self.advance();
                    text
                }
                Err(err) => {
                    let at = Mark {
                        span: err.span,
                        line: err.line,
                        column: err.column,
                    };
                    self.error_at(at, err.code, err.message);
                    self.advance();
                    return None;
                }
            }
        } else {
            self.error_at_current(ErrorCode::E1001, "Expected string or '{' after 'asm%'");
            return None;
        };

        let (template, names) = rewrite_placeholders(&source);
        let mut inputs: Vec<AsmInput> = names
            .into_iter()
            .map(|name| AsmInput {
                constraint: "r".to_string(),
                expr: Expr::new(ExprKind::Ident(name), start.span, start.line, start.column),
            })
            .collect();

        let outputs = if self.eat_op(OpKind::Arrow) || matches!(self.current.kind, TokenKind::Str(_)) {
            self.asm_strings()?
        } else {
            Vec::new()
        };

        if self.eat_op(OpKind::ReverseLayout) {
            loop {
                let constraint = self.asm_string()?;
                self.expect(
                    &TokenKind::LParen,
                    ErrorCode::E1001,
                    "Expected '(' after input constraint",
                )?;
                let expr = self.parse_precedence(Precedence::Assignment)?;
                self.expect(
                    &TokenKind::RParen,
                    ErrorCode::E1003,
                    "Expected ')' after input operand",
                )?;
                inputs.push(AsmInput { constraint, expr });
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }

        let clobbers = if self.eat_op(OpKind::NotMove) {
            self.asm_strings()?
        } else {
            Vec::new()
        };

        Some(self.expr_from(
            start,
            ExprKind::InlineAsm(Box::new(InlineAsm {
                template,
                outputs,
                inputs,
                clobbers,
                is_volatile: true,
            })),
        ))
    }

    /// One or more comma-separated string literals.
    fn asm_strings(&mut self) -> Option<Vec<String>> {
        let mut strings = vec![self.asm_string()?];
        while self.eat(&TokenKind::Comma) {
            strings.push(self.asm_string()?);
        }
        Some(strings)
    }

    fn asm_string(&mut self) -> Option<String> {
        if let TokenKind::Str(text) = &self.current.kind {
            let text = text.to_string();
            self.advance();
            Some(text)
        } else {
            self.error_at_current(ErrorCode::E1001, "Expected constraint string");
            None
        }
    }
}

/// Drop blank lines, strip indentation and collapse interior whitespace.
fn normalize_block(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Replace `${name}` with `$N`, numbering names by first appearance.
///
/// Returns the rewritten template and the names in index order. A `${`
/// without a closing brace or with an empty name is left as written.
fn rewrite_placeholders(template: &str) -> (String, Vec<String>) {
    let mut out = String::with_capacity(template.len());
    let mut names: Vec<String> = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find("${") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let name = after
            .find('}')
            .map(|close| &after[..close])
            .filter(|name| !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_'));
        match name {
            Some(name) => {
                let index = names.iter().position(|n| n == name).unwrap_or_else(|| {
                    names.push(name.to_string());
                    names.len() - 1
                });
                out.push('$');
                out.push_str(&index.to_string());
                rest = &after[name.len() + 1..];
            }
            None => {
                out.push_str("${");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    (out, names)
}
