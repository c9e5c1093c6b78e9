//! Operator registry.
//!
//! The registry is the catalog of every operator symbol FCx knows about,
//! together with its parsing attributes (precedence, associativity, arity)
//! and its descriptive metadata (family, semantics, machine-code template).
//!
//! The table itself lives in `table.rs` as a `'static` slice; an
//! [`OperatorRegistry`] borrows it and adds two hash indices so that
//! symbol and kind lookups do not scan.

mod table;

#[cfg(test)]
mod tests;

#[cfg(test)]
pub(crate) use table::op as test_descriptor;

use std::fmt;

use fcx_ir::OpKind;
use rustc_hash::{FxHashMap, FxHashSet};

/// Highest precedence level a descriptor may carry.
pub const MAX_PRECEDENCE: u8 = 12;

/// Longest symbol the registry accepts.
pub const MAX_SYMBOL_LEN: usize = 16;

/// How an infix operator groups with itself.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Associativity {
    Left,
    Right,
    /// Not chainable (prefix or family operators).
    Neither,
}

/// Operand count.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Arity {
    Unary,
    Binary,
    Ternary,
    Nary,
}

/// Operator family.
///
/// The first ten variants are the families of the operator catalog;
/// `Special` holds punctuation-like operators that belong to none of them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum OperatorCategory {
    ShiftRotate,
    ArithAssign,
    DataMovement,
    Bitfield,
    MemoryAlloc,
    AtomicConcur,
    SyscallOs,
    IoFormat,
    Comparison,
    ArithDense,
    Special,
}

impl OperatorCategory {
    /// All categories, families first.
    pub const ALL: [OperatorCategory; 11] = [
        OperatorCategory::ShiftRotate,
        OperatorCategory::ArithAssign,
        OperatorCategory::DataMovement,
        OperatorCategory::Bitfield,
        OperatorCategory::MemoryAlloc,
        OperatorCategory::AtomicConcur,
        OperatorCategory::SyscallOs,
        OperatorCategory::IoFormat,
        OperatorCategory::Comparison,
        OperatorCategory::ArithDense,
        OperatorCategory::Special,
    ];

    /// Human-readable family name.
    pub const fn name(self) -> &'static str {
        match self {
            OperatorCategory::ShiftRotate => "shift/rotate",
            OperatorCategory::ArithAssign => "arithmetic/assignment",
            OperatorCategory::DataMovement => "data movement",
            OperatorCategory::Bitfield => "bitfield",
            OperatorCategory::MemoryAlloc => "memory allocation",
            OperatorCategory::AtomicConcur => "atomic/concurrency",
            OperatorCategory::SyscallOs => "syscall/os",
            OperatorCategory::IoFormat => "i/o formatting",
            OperatorCategory::Comparison => "comparison",
            OperatorCategory::ArithDense => "dense arithmetic",
            OperatorCategory::Special => "special",
        }
    }
}

impl fmt::Display for OperatorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which way an operator's glyph points.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    LeftFacing,
    RightFacing,
    Bidirectional,
}

/// A single registered operator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperatorDescriptor {
    pub symbol: &'static str,
    pub kind: OpKind,
    pub precedence: u8,
    pub assoc: Associativity,
    pub arity: Arity,
    pub category: OperatorCategory,
    pub semantics: &'static str,
    pub template: &'static str,
    pub direction: Direction,
}

impl OperatorDescriptor {
    /// Symbol length in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.symbol.len()
    }

    /// Always false for a valid descriptor; present for `len()` symmetry.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.symbol.is_empty()
    }
}

/// Registry consistency failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("operator `{symbol}` has precedence {precedence}, expected 1..=12")]
    PrecedenceOutOfRange { symbol: &'static str, precedence: u8 },

    #[error("operator `{symbol}` is {len} bytes long, expected 1..=16")]
    SymbolLength { symbol: &'static str, len: usize },

    #[error("operator `{symbol}` is registered twice (entries {first} and {second})")]
    DuplicateSymbol {
        symbol: &'static str,
        first: usize,
        second: usize,
    },

    #[error("operator family `{0}` has no entries")]
    EmptyCategory(OperatorCategory),

    #[error("operator `{symbol}` has an empty template")]
    MissingTemplate { symbol: &'static str },

    #[error(
        "operator `{symbol}` disagrees with `{primary}` on the precedence or associativity of {kind:?}"
    )]
    InconsistentKind {
        kind: OpKind,
        symbol: &'static str,
        primary: &'static str,
    },
}

/// The operator catalog with symbol and kind indices.
#[derive(Clone, Debug)]
pub struct OperatorRegistry {
    ops: &'static [OperatorDescriptor],
    by_symbol: FxHashMap<&'static str, usize>,
    primary: FxHashMap<OpKind, usize>,
}

impl OperatorRegistry {
    /// Registry over the built-in operator table.
    pub fn new() -> Self {
        Self::with_table(table::OPERATORS)
    }

    /// Registry over an arbitrary table.
    ///
    /// Duplicate symbols keep their first entry in the symbol index;
    /// [`validate`](Self::validate) reports them.
    pub fn with_table(ops: &'static [OperatorDescriptor]) -> Self {
        let mut by_symbol = FxHashMap::default();
        let mut primary = FxHashMap::default();
        for (index, desc) in ops.iter().enumerate() {
            by_symbol.entry(desc.symbol).or_insert(index);
            primary.entry(desc.kind).or_insert(index);
        }
        tracing::debug!(operators = ops.len(), kinds = primary.len(), "operator registry ready");
        OperatorRegistry {
            ops,
            by_symbol,
            primary,
        }
    }

    /// Number of descriptors.
    #[inline]
    pub fn count(&self) -> usize {
        self.ops.len()
    }

    #[inline]
    pub fn by_index(&self, index: usize) -> Option<&'static OperatorDescriptor> {
        self.ops.get(index)
    }

    pub fn by_symbol(&self, symbol: &str) -> Option<&'static OperatorDescriptor> {
        self.by_symbol.get(symbol).map(|&i| &self.ops[i])
    }

    /// First descriptor registered for `kind`.
    ///
    /// Kinds produced only by disambiguation (`FunctionDef`, `DirectInput`,
    /// `DirectOutput`) have none.
    pub fn primary(&self, kind: OpKind) -> Option<&'static OperatorDescriptor> {
        self.primary.get(&kind).map(|&i| &self.ops[i])
    }

    /// All descriptors in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'static OperatorDescriptor> {
        self.ops.iter()
    }

    pub fn category_count(&self, category: OperatorCategory) -> usize {
        self.ops.iter().filter(|d| d.category == category).count()
    }

    /// Up to `max` symbols starting with `first_byte`, in table order.
    pub fn suggestions(&self, first_byte: u8, max: usize) -> Vec<&'static str> {
        self.ops
            .iter()
            .filter(|d| d.symbol.as_bytes().first() == Some(&first_byte))
            .map(|d| d.symbol)
            .take(max)
            .collect()
    }

    /// Check table consistency.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// precedence range, symbol length, symbol uniqueness, family
    /// coverage, templates, then per-kind agreement on precedence and
    /// associativity.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for desc in self.ops {
            if desc.precedence == 0 || desc.precedence > MAX_PRECEDENCE {
                return Err(RegistryError::PrecedenceOutOfRange {
                    symbol: desc.symbol,
                    precedence: desc.precedence,
                });
            }
        }

        for desc in self.ops {
            if desc.is_empty() || desc.len() > MAX_SYMBOL_LEN {
                return Err(RegistryError::SymbolLength {
                    symbol: desc.symbol,
                    len: desc.len(),
                });
            }
        }

        let mut seen: FxHashMap<&str, usize> = FxHashMap::default();
        for (index, desc) in self.ops.iter().enumerate() {
            if let Some(&first) = seen.get(desc.symbol) {
                return Err(RegistryError::DuplicateSymbol {
                    symbol: desc.symbol,
                    first,
                    second: index,
                });
            }
            seen.insert(desc.symbol, index);
        }

        let present: FxHashSet<OperatorCategory> = self.ops.iter().map(|d| d.category).collect();
        if let Some(&missing) = OperatorCategory::ALL
            .iter()
            .find(|&&c| c != OperatorCategory::Special && !present.contains(&c))
        {
            return Err(RegistryError::EmptyCategory(missing));
        }

        if let Some(desc) = self.ops.iter().find(|d| d.template.is_empty()) {
            return Err(RegistryError::MissingTemplate {
                symbol: desc.symbol,
            });
        }

        for desc in self.ops {
            let Some(primary) = self.primary(desc.kind) else {
                continue;
            };
            if primary.precedence != desc.precedence || primary.assoc != desc.assoc {
                return Err(RegistryError::InconsistentKind {
                    kind: desc.kind,
                    symbol: desc.symbol,
                    primary: primary.symbol,
                });
            }
        }

        Ok(())
    }
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
