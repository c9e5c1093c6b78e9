//! Pull-based lexer.
//!
//! [`Lexer::next_token`] produces one token per call. Order matters:
//! punctuation that collides with operator prefixes (`;`, `:`, `.`) is
//! decided first, then the operator trie runs before identifiers so word
//! operators such as `mem>` and `print>` win over plain names.
//!
//! Errors never stop the lexer. Each one yields a `TokenKind::Error` token,
//! sets the sticky [`had_error`](Lexer::had_error) flag and is recorded in
//! [`errors`](Lexer::errors).

#[cfg(test)]
mod tests;

use fcx_diagnostic::ErrorCode;
use fcx_ir::{Span, Token, TokenKind};
use tracing::trace;

use crate::cursor::Cursor;
use crate::escape::{unescape_char, unescape_string};
use crate::keywords;
use crate::lex_error::LexError;
use crate::number;
use crate::trie::{OperatorTrie, MAX_WINDOW};

/// Suggestions listed for an unrecognized operator.
const MAX_SUGGESTIONS: usize = 3;

/// Raw text captured by [`Lexer::scan_raw_block`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawBlock<'src> {
    /// Text between the braces, exclusive.
    pub text: &'src str,
    pub span: Span,
}

/// Streaming tokenizer over one source text.
pub struct Lexer<'src, 't> {
    cursor: Cursor<'src>,
    trie: &'t OperatorTrie,
    had_error: bool,
    errors: Vec<LexError>,
}

impl<'src, 't> Lexer<'src, 't> {
    pub fn new(source: &'src str, trie: &'t OperatorTrie) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            trie,
            had_error: false,
            errors: Vec::new(),
        }
    }

    /// Restart on a new source, clearing recorded errors.
    pub fn reset(&mut self, source: &'src str) {
        self.cursor = Cursor::new(source);
        self.had_error = false;
        self.errors.clear();
    }

    /// True once any error token has been produced.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Move the recorded errors out, leaving the sticky flag set.
    pub fn take_errors(&mut self) -> Vec<LexError> {
        std::mem::take(&mut self.errors)
    }

    /// Produce the next token. Returns `Eof` forever once input is exhausted.
    pub fn next_token(&mut self) -> Token {
        self.skip_trivia();

        let start = self.cursor.pos();
        let line = self.cursor.line();
        let column = self.cursor.column();

        let kind = if self.cursor.is_eof() {
            TokenKind::Eof
        } else {
            self.scan_token(start, line, column)
        };

        let token = Token::new(kind, self.span_from(start), line, column);
        trace!(kind = ?token.kind, line, column, "token");
        token
    }

    fn scan_token(&mut self, start: usize, line: u32, column: u32) -> TokenKind {
        let byte = self.cursor.current();
        let next = self.cursor.peek();

        let punct = match byte {
            b';' if !matches!(next, b'>' | b';') => Some(TokenKind::Semicolon),
            b':' if next == b':' => {
                self.cursor.advance();
                Some(TokenKind::DoubleColon)
            }
            b':' if !matches!(next, b'=' | b'>') => Some(TokenKind::Colon),
            b'.' if next != b'.' => Some(TokenKind::Dot),
            b',' => Some(TokenKind::Comma),
            b'(' => Some(TokenKind::LParen),
            b')' => Some(TokenKind::RParen),
            b'{' => Some(TokenKind::LBrace),
            b'}' => Some(TokenKind::RBrace),
            b'[' => Some(TokenKind::LBracket),
            b']' => Some(TokenKind::RBracket),
            _ => None,
        };
        if let Some(kind) = punct {
            self.cursor.advance();
            return kind;
        }

        let (found, len) = self.trie.lookup_greedy(self.cursor.rest(), MAX_WINDOW);
        if let Some(desc) = found {
            self.cursor.advance_n(len);
            return TokenKind::Op(desc.kind);
        }

        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start, line, column),
            b'"' => self.string(start, line, column),
            b'\'' => self.char_literal(start, line, column),
            _ if is_operator_byte(byte) => self.unknown_operator(start, line, column),
            _ => self.unexpected_char(start, line, column),
        }
    }

    fn identifier(&mut self, start: usize) -> TokenKind {
        self.cursor
            .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        let text = self.cursor.slice_from(start);
        keywords::lookup(text).unwrap_or_else(|| TokenKind::Ident(text.into()))
    }

    fn number(&mut self, start: usize, line: u32, column: u32) -> TokenKind {
        let scanned = number::scan(self.cursor.rest());
        self.cursor.advance_n(scanned.len);
        match scanned.value {
            Ok(kind) => kind,
            Err(err) => self.error(err.code(), err.message(), start, line, column),
        }
    }

    fn string(&mut self, start: usize, line: u32, column: u32) -> TokenKind {
        self.cursor.advance();
        loop {
            if self.cursor.is_eof() {
                return self.error(ErrorCode::E0001, "Unterminated string", start, line, column);
            }
            match self.cursor.current() {
                b'"' => break,
                b'\\' => {
                    self.cursor.advance();
                    self.cursor.advance_char();
                }
                _ => self.cursor.advance_char(),
            }
        }
        let body = self.cursor.slice_from(start + 1);
        self.cursor.advance();
        TokenKind::Str(unescape_string(body).into_boxed_str())
    }

    fn char_literal(&mut self, start: usize, line: u32, column: u32) -> TokenKind {
        self.cursor.advance();
        match self.cursor.current() {
            b'\\' => {
                self.cursor.advance();
                self.cursor.advance_char();
            }
            b'\'' => {}
            _ => self.cursor.advance_char(),
        }
        if self.cursor.is_eof() || self.cursor.current() != b'\'' {
            return self.error(
                ErrorCode::E0002,
                "Unterminated character literal",
                start,
                line,
                column,
            );
        }
        let body = self.cursor.slice_from(start + 1);
        self.cursor.advance();
        match unescape_char(body) {
            Some(c) => TokenKind::Char(c),
            None => self.error(ErrorCode::E0002, "Empty character literal", start, line, column),
        }
    }

    fn unknown_operator(&mut self, start: usize, line: u32, column: u32) -> TokenKind {
        let first = self.cursor.current();
        let run = self
            .cursor
            .rest()
            .iter()
            .take(MAX_WINDOW)
            .take_while(|&&b| is_operator_byte(b) || b.is_ascii_alphabetic())
            .count();
        self.cursor.advance_n(run);
        let text = self.cursor.slice_from(start);

        let mut message = format!("Unrecognized operator symbol: '{text}'");
        let suggestions = self
            .trie
            .registry()
            .suggestions(first, MAX_SUGGESTIONS);
        if !suggestions.is_empty() {
            let quoted: Vec<String> = suggestions.iter().map(|s| format!("'{s}'")).collect();
            message.push_str(" Did you mean: ");
            message.push_str(&quoted.join(", "));
            message.push('?');
        }
        self.error(ErrorCode::E0003, message, start, line, column)
    }

    fn unexpected_char(&mut self, start: usize, line: u32, column: u32) -> TokenKind {
        let c = self.cursor.current_char().unwrap_or(char::REPLACEMENT_CHARACTER);
        self.cursor.advance_char();
        self.error(
            ErrorCode::E0004,
            format!("Unexpected character: '{c}'"),
            start,
            line,
            column,
        )
    }

    /// Record an error ending at the current position.
    fn error(
        &mut self,
        code: ErrorCode,
        message: impl Into<String>,
        start: usize,
        line: u32,
        column: u32,
    ) -> TokenKind {
        let message = message.into();
        self.had_error = true;
        self.errors.push(LexError::new(
            code,
            message.clone(),
            self.span_from(start),
            line,
            column,
        ));
        TokenKind::Error(message.into_boxed_str())
    }

    /// Skip whitespace and comments.
    ///
    /// Comments are recognized before operators, so `//` and `/*` never
    /// reach the trie.
    fn skip_trivia(&mut self) {
        loop {
            match (self.cursor.current(), self.cursor.peek()) {
                (b' ' | b'\t' | b'\r' | b'\n', _) => self.cursor.advance(),
                (b'/', b'/') => self.cursor.eat_while(|b| b != b'\n'),
                (b'/', b'*') => {
                    self.cursor.advance_n(2);
                    while !self.cursor.is_eof()
                        && !(self.cursor.current() == b'*' && self.cursor.peek() == b'/')
                    {
                        self.cursor.advance();
                    }
                    // Unterminated comments run to EOF.
                    self.cursor.advance_n(2);
                }
                _ => return,
            }
        }
    }

    /// Capture raw text up to the brace matching an already-lexed `{`.
    ///
    /// Nested braces are balanced. The closing brace is consumed and not
    /// part of the text. On a missing brace the input is consumed to EOF.
    pub fn scan_raw_block(&mut self) -> Result<RawBlock<'src>, LexError> {
        let start = self.cursor.pos();
        let line = self.cursor.line();
        let column = self.cursor.column();
        let mut depth = 1_usize;

        while !self.cursor.is_eof() {
            match self.cursor.current() {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        let text = self.cursor.slice_from(start);
                        let span = self.span_from(start);
                        self.cursor.advance();
                        return Ok(RawBlock { text, span });
                    }
                }
                _ => {}
            }
            self.cursor.advance();
        }

        Err(LexError::new(
            ErrorCode::E1008,
            "Unterminated assembly block, expected '}'",
            self.span_from(start),
            line,
            column,
        ))
    }

    fn span_from(&self, start: usize) -> Span {
        Span::from_range_saturating(start..self.cursor.pos())
    }
}

/// Bytes that may form an unregistered operator run.
fn is_operator_byte(byte: u8) -> bool {
    matches!(
        byte,
        b'<' | b'>'
            | b'/'
            | b'|'
            | b'\\'
            | b':'
            | b';'
            | b'!'
            | b'?'
            | b'^'
            | b'@'
            | b'%'
            | b'$'
            | b'&'
            | b'*'
            | b'~'
            | b'`'
            | b'.'
            | b','
            | b'_'
    )
}

/// Lex a whole source text, `Eof` token included.
pub fn tokenize(source: &str, trie: &OperatorTrie) -> Vec<Token> {
    let mut lexer = Lexer::new(source, trie);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
