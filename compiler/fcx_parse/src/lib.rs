//! Pratt parser for FCx.
//!
//! Produces an owned [`fcx_ir::ast::Program`] from source text, pulling
//! tokens from [`fcx_lexer::Lexer`] one at a time. Operator parsing is
//! table driven: `rules::rule_for` maps every token kind to prefix and
//! infix handlers plus a binding power, so adding an operator to the
//! registry only needs a rule when it wants special syntax.
//!
//! Statements are recursive descent on top of the Pratt core. Errors are
//! collected, not thrown; the `recovery` module decides where parsing resumes.

mod context;
mod error;
mod grammar;
mod options;
mod precedence;
mod recovery;
mod rules;

#[cfg(test)]
mod tests;

pub use context::{
    disambiguate, is_context_sensitive, Context, ContextStack, DisambiguationInput,
    MAX_CONTEXT_DEPTH,
};
pub use error::ParseError;
pub use options::ParserOptions;
pub use precedence::Precedence;

use fcx_diagnostic::{Diagnostic, ErrorCode};
use fcx_ir::ast::{Expr, ExprKind, Program, Stmt, StmtKind};
use fcx_ir::{OpKind, Span, Token, TokenKind};
use fcx_lexer::{LexError, Lexer, OperatorRegistry, OperatorTrie};
use fcx_stack::ensure_sufficient_stack;
use tracing::{debug, debug_span};

/// Output of a whole-file parse.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParseResult {
    pub program: Program,
    pub errors: Vec<ParseError>,
    pub lex_errors: Vec<LexError>,
}

impl ParseResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || !self.lex_errors.is_empty()
    }

    /// Lexer diagnostics first, then parser diagnostics.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lex_errors
            .iter()
            .map(LexError::to_diagnostic)
            .chain(self.errors.iter().map(ParseError::to_diagnostic))
            .collect()
    }
}

/// Parse a source file with default options.
pub fn parse(source: &str, registry: &OperatorRegistry, trie: &OperatorTrie) -> ParseResult {
    parse_with_options(source, registry, trie, ParserOptions::default())
}

pub fn parse_with_options(
    source: &str,
    registry: &OperatorRegistry,
    trie: &OperatorTrie,
    options: ParserOptions,
) -> ParseResult {
    let _span = debug_span!("parse", bytes = source.len()).entered();
    let mut parser = Parser::new(source, registry, trie, options);
    let program = parser.parse_program();
    debug!(
        stmts = program.stmts.len(),
        errors = parser.errors.len(),
        "parse finished"
    );
    parser.finish(program)
}

/// Start of a node: the span and position of its first token.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Mark {
    span: Span,
    line: u32,
    column: u32,
}

impl Mark {
    #[inline]
    pub(crate) fn of(expr: &Expr) -> Self {
        Mark {
            span: expr.span,
            line: expr.line,
            column: expr.column,
        }
    }
}

/// Parser state.
///
/// Holds exactly one token of lookahead (`current`); inline assembly
/// blocks rely on this to hand the lexer back its position right after
/// the opening `{`.
pub struct Parser<'src, 't> {
    lexer: Lexer<'src, 't>,
    registry: &'t OperatorRegistry,
    previous: Token,
    current: Token,
    had_error: bool,
    panic_mode: bool,
    /// Set once the error limit is hit; every loop stops.
    aborted: bool,
    contexts: ContextStack,
    errors: Vec<ParseError>,
    options: ParserOptions,
    depth: usize,
}

impl<'src, 't> Parser<'src, 't> {
    pub fn new(
        source: &'src str,
        registry: &'t OperatorRegistry,
        trie: &'t OperatorTrie,
        options: ParserOptions,
    ) -> Self {
        let mut parser = Parser {
            lexer: Lexer::new(source, trie),
            registry,
            previous: Token::dummy(TokenKind::Eof),
            current: Token::dummy(TokenKind::Eof),
            had_error: false,
            panic_mode: false,
            aborted: false,
            contexts: ContextStack::new(),
            errors: Vec::new(),
            options,
            depth: 0,
        };
        parser.advance();
        parser
    }

    /// Parse statements until EOF or the error limit.
    pub fn parse_program(&mut self) -> Program {
        let mut stmts = Vec::new();
        while !self.is_at_end() && !self.aborted {
            if self.eat_terminator() {
                continue;
            }
            if let Some(stmt) = self.statement_or_recover() {
                stmts.push(stmt);
            }
        }
        Program { stmts }
    }

    /// Parse one expression, commas included.
    pub fn parse_expression(&mut self) -> Option<Expr> {
        self.parse_precedence(Precedence::Sequence)
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consume the parser, pairing `program` with every recorded error.
    pub fn finish(mut self, program: Program) -> ParseResult {
        ParseResult {
            program,
            lex_errors: self.lexer.take_errors(),
            errors: self.errors,
        }
    }

    // Token navigation

    /// Move to the next token. Lexer error tokens are skipped here; the
    /// lexer has already recorded them.
    pub(crate) fn advance(&mut self) {
        let next = loop {
            let token = self.lexer.next_token();
            if !matches!(token.kind, TokenKind::Error(_)) {
                break token;
            }
        };
        self.previous = std::mem::replace(&mut self.current, next);
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.current.is_eof()
    }

    #[inline]
    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.current.kind == *kind
    }

    #[inline]
    pub(crate) fn check_op(&self, kind: OpKind) -> bool {
        self.current.kind == TokenKind::Op(kind)
    }

    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn eat_op(&mut self, kind: OpKind) -> bool {
        if self.check_op(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// True on `;` or `;;`, either of which ends a statement.
    #[inline]
    pub(crate) fn at_terminator(&self) -> bool {
        matches!(
            self.current.kind,
            TokenKind::Semicolon | TokenKind::Op(OpKind::DoubleSemicolon)
        )
    }

    pub(crate) fn eat_terminator(&mut self) -> bool {
        if self.at_terminator() {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume `kind` or record `message` at the current token.
    pub(crate) fn expect(&mut self, kind: &TokenKind, code: ErrorCode, message: &str) -> Option<()> {
        if self.eat(kind) {
            Some(())
        } else {
            self.error_at_current(code, message);
            None
        }
    }

    /// Consume an identifier and return its name.
    pub(crate) fn expect_ident(&mut self, code: ErrorCode, message: &str) -> Option<String> {
        if let TokenKind::Ident(name) = &self.current.kind {
            let name = name.to_string();
            self.advance();
            Some(name)
        } else {
            self.error_at_current(code, message);
            None
        }
    }

    /// The operator kind of the previous token, inside operator handlers.
    pub(crate) fn previous_op(&self) -> Option<OpKind> {
        match self.previous.kind {
            TokenKind::Op(kind) => Some(kind),
            _ => None,
        }
    }

    // Positions

    #[inline]
    pub(crate) fn mark_previous(&self) -> Mark {
        Mark {
            span: self.previous.span,
            line: self.previous.line,
            column: self.previous.column,
        }
    }

    #[inline]
    pub(crate) fn mark_current(&self) -> Mark {
        Mark {
            span: self.current.span,
            line: self.current.line,
            column: self.current.column,
        }
    }

    /// An expression node running from `start` through the previous token.
    pub(crate) fn expr_from(&self, start: Mark, kind: ExprKind) -> Expr {
        Expr::new(kind, start.span.merge(self.previous.span), start.line, start.column)
    }

    pub(crate) fn stmt_from(&self, start: Mark, kind: StmtKind) -> Stmt {
        Stmt::new(kind, start.span.merge(self.previous.span), start.line, start.column)
    }

    // Errors

    pub(crate) fn error_at_current(&mut self, code: ErrorCode, message: impl Into<String>) {
        let mark = self.mark_current();
        self.error_at(mark, code, message);
    }

    pub(crate) fn error_at_previous(&mut self, code: ErrorCode, message: impl Into<String>) {
        let mark = self.mark_previous();
        self.error_at(mark, code, message);
    }

    /// Record an error unless one is already being recovered from.
    pub(crate) fn error_at(&mut self, at: Mark, code: ErrorCode, message: impl Into<String>) {
        if self.panic_mode || self.aborted {
            return;
        }
        self.panic_mode = true;
        self.had_error = true;
        self.errors.push(ParseError::new(
            code,
            message,
            at.span,
            at.line,
            at.column,
            self.contexts.current(),
        ));

        let limit = self.options.error_limit;
        if limit > 0 && self.errors.len() >= limit {
            self.aborted = true;
            self.errors.push(ParseError::new(
                ErrorCode::E9002,
                format!("aborting due to {limit} previous errors"),
                at.span,
                at.line,
                at.column,
                Context::Expression,
            ));
        }
    }

    // Nesting

    /// Run a nested production under the depth limit and stack guard.
    pub(crate) fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        if self.depth >= self.options.max_depth {
            self.error_at_current(ErrorCode::E1010, "expression nested too deeply");
            return None;
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| f(self));
        self.depth -= 1;
        result
    }

    /// Run `f` with `context` pushed, popping it afterwards.
    pub(crate) fn in_context<T>(&mut self, context: Context, f: impl FnOnce(&mut Self) -> T) -> T {
        self.contexts.push(context);
        let result = f(self);
        self.contexts.pop();
        result
    }
}
