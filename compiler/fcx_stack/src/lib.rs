//! Stack safety for the recursive-descent parts of the FCx front end.
//!
//! The Pratt parser recurses once per precedence level and once per nested
//! group, so pathological inputs like `((((((...))))))` can blow the native
//! stack long before the parser's own depth limit is reached on small
//! threads. [`ensure_sufficient_stack`] grows the stack on demand.
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: plain call.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn parse_precedence(&mut self, min: Precedence) -> Option<Expr> {
///     ensure_sufficient_stack(|| self.parse_precedence_inner(min))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shallow_recursion() {
        fn sum_to(n: u64) -> u64 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { n + sum_to(n - 1) })
        }

        assert_eq!(sum_to(100), 5050);
    }

    #[test]
    fn test_deep_recursion() {
        // Deeper than a default 8MB thread stack allows without growth.
        fn nest(n: u64) -> u64 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { nest(n - 1) + 1 })
        }

        assert_eq!(nest(100_000), 100_000);
    }

    #[test]
    fn test_propagates_result() {
        let result: Result<u8, &str> = ensure_sufficient_stack(|| Err("depth"));
        assert_eq!(result, Err("depth"));
    }
}
