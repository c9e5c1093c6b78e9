//! Token types produced by the FCx lexer.

use crate::{BigInt, OpKind, Span};
use std::fmt;

/// A token with its source location.
///
/// `line` and `column` are 1-based and point at the token's first byte.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub line: u32,
    pub column: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span, line: u32, column: u32) -> Self {
        Token {
            kind,
            span,
            line,
            column,
        }
    }

    /// Create a dummy token for synthesized positions and tests.
    pub fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::DUMMY,
            line: 1,
            column: 1,
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}:{}", self.kind, self.line, self.column)
    }
}

/// Token kinds.
///
/// Float literals store their bits as `u64` so the enum stays `Eq + Hash`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Integer literal that fits in 64 bits: `42`, `0xFF`, `1_000`.
    Int(u64),
    /// Integer literal wider than 64 bits, up to 1024.
    BigInt(Box<BigInt>),
    /// Float literal, stored as `f64::to_bits`.
    Float(u64),
    /// String literal with escapes already processed.
    Str(Box<str>),
    Char(char),
    Ident(Box<str>),

    // Keywords
    Let,
    Const,
    Fn,
    If,
    Else,
    Loop,
    While,
    Ret,
    Halt,
    Break,
    Continue,
    Mod,
    Use,
    Pub,
    SelfKw,
    Super,
    Crate,
    As,
    /// Built-in type name: `i32`, `u1024`, `f64`, `ptr`...
    Type(TypeKeyword),

    // Punctuation the lexer handles outside the operator trie.
    Semicolon,
    Colon,
    DoubleColon,
    Comma,
    Dot,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    /// Registered operator.
    Op(OpKind),

    /// Lexical error; the message is also recorded on the lexer.
    Error(Box<str>),
    Eof,
}

impl TokenKind {
    /// Tokens that begin a statement; error recovery stops in front of
    /// these.
    pub fn is_statement_start(&self) -> bool {
        matches!(
            self,
            TokenKind::Fn
                | TokenKind::Let
                | TokenKind::Const
                | TokenKind::If
                | TokenKind::Loop
                | TokenKind::While
                | TokenKind::Ret
                | TokenKind::Break
                | TokenKind::Continue
        )
    }

    /// Human-readable name for error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Int(_) | TokenKind::BigInt(_) => "integer",
            TokenKind::Float(_) => "float",
            TokenKind::Str(_) => "string",
            TokenKind::Char(_) => "char",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Let => "let",
            TokenKind::Const => "const",
            TokenKind::Fn => "fn",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Loop => "loop",
            TokenKind::While => "while",
            TokenKind::Ret => "ret",
            TokenKind::Halt => "halt",
            TokenKind::Break => "break",
            TokenKind::Continue => "continue",
            TokenKind::Mod => "mod",
            TokenKind::Use => "use",
            TokenKind::Pub => "pub",
            TokenKind::SelfKw => "self",
            TokenKind::Super => "super",
            TokenKind::Crate => "crate",
            TokenKind::As => "as",
            TokenKind::Type(ty) => ty.as_str(),
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::DoubleColon => "::",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Op(_) => "operator",
            TokenKind::Error(_) => "error",
            TokenKind::Eof => "end of file",
        }
    }
}

/// Built-in type keywords.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeKeyword {
    I8,
    I16,
    I32,
    I64,
    I128,
    I256,
    I512,
    I1024,
    U8,
    U16,
    U32,
    U64,
    U128,
    U256,
    U512,
    U1024,
    F32,
    F64,
    Ptr,
    RawPtr,
}

impl TypeKeyword {
    pub const ALL: [TypeKeyword; 20] = [
        TypeKeyword::I8,
        TypeKeyword::I16,
        TypeKeyword::I32,
        TypeKeyword::I64,
        TypeKeyword::I128,
        TypeKeyword::I256,
        TypeKeyword::I512,
        TypeKeyword::I1024,
        TypeKeyword::U8,
        TypeKeyword::U16,
        TypeKeyword::U32,
        TypeKeyword::U64,
        TypeKeyword::U128,
        TypeKeyword::U256,
        TypeKeyword::U512,
        TypeKeyword::U1024,
        TypeKeyword::F32,
        TypeKeyword::F64,
        TypeKeyword::Ptr,
        TypeKeyword::RawPtr,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            TypeKeyword::I8 => "i8",
            TypeKeyword::I16 => "i16",
            TypeKeyword::I32 => "i32",
            TypeKeyword::I64 => "i64",
            TypeKeyword::I128 => "i128",
            TypeKeyword::I256 => "i256",
            TypeKeyword::I512 => "i512",
            TypeKeyword::I1024 => "i1024",
            TypeKeyword::U8 => "u8",
            TypeKeyword::U16 => "u16",
            TypeKeyword::U32 => "u32",
            TypeKeyword::U64 => "u64",
            TypeKeyword::U128 => "u128",
            TypeKeyword::U256 => "u256",
            TypeKeyword::U512 => "u512",
            TypeKeyword::U1024 => "u1024",
            TypeKeyword::F32 => "f32",
            TypeKeyword::F64 => "f64",
            TypeKeyword::Ptr => "ptr",
            TypeKeyword::RawPtr => "rawptr",
        }
    }

    /// Pointer types double as identifiers in expression position.
    pub const fn is_pointer(self) -> bool {
        matches!(self, TypeKeyword::Ptr | TypeKeyword::RawPtr)
    }
}

impl fmt::Display for TypeKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
