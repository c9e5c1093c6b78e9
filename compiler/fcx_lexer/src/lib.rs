//! FCx lexer.
//!
//! Three layers, built in this order and shared by reference afterwards:
//!
//! 1. [`OperatorRegistry`]: the `'static` operator catalog
//! 2. [`OperatorTrie`]: longest-match lookup over registry symbols
//! 3. [`Lexer`]: pull-based tokenizer producing [`fcx_ir::Token`]s
//!
//! ```text
//! let registry = OperatorRegistry::new();
//! registry.validate()?;
//! let trie = OperatorTrie::build(&registry)?;
//! let tokens = tokenize("let x := a <<< 3;", &trie);
//! ```

mod cursor;
mod escape;
mod keywords;
mod lex_error;
mod lexer;
mod number;
pub mod registry;
pub mod trie;

pub use lex_error::LexError;
pub use lexer::{tokenize, Lexer, RawBlock};
pub use registry::{
    Arity, Associativity, Direction, OperatorCategory, OperatorDescriptor, OperatorRegistry,
    RegistryError,
};
pub use trie::{OperatorTrie, TrieError, MAX_WINDOW};
