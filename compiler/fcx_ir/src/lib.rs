//! FCx IR: the data shared by the lexer and the parser.
//!
//! - [`Span`] source locations
//! - [`Token`], [`TokenKind`] and the closed [`OpKind`] operator set
//! - [`BigInt`] storage for integer literals wider than 64 bits
//! - the owned [`ast`] tree
//!
//! Nothing here depends on the operator registry; the registry and the
//! parser agree through [`OpKind`] alone.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod literal;
mod op_kind;
mod span;
mod token;

pub use literal::{BigInt, BigIntError, MAX_LIMBS};
pub use op_kind::OpKind;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TypeKeyword};
