//! Parser configuration.

/// Knobs for one parse.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ParserOptions {
    /// Maximum nesting of expressions and blocks before E1010.
    pub max_depth: usize,
    /// Stop after this many errors. Zero means no limit.
    pub error_limit: usize,
    /// Reject operators whose meaning changes with context (`<=>`, `<<<`,
    /// `<<`, `>>`) when they resolve to their non-default meaning.
    pub disallow_ambiguous_ops: bool,
}

impl ParserOptions {
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_error_limit(mut self, error_limit: usize) -> Self {
        self.error_limit = error_limit;
        self
    }

    #[must_use]
    pub fn strict(mut self) -> Self {
        self.disallow_ambiguous_ops = true;
        self
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            max_depth: 256,
            error_limit: 0,
            disallow_ambiguous_ops: false,
        }
    }
}
