//! Stack growth guard for non-tail recursion.
//!
//! Tail positions in the evaluator never recurse, but three places still do:
//! the reader descending into nested lists, the printer walking nested lists,
//! and the evaluator computing operands and conditions. Each of those wraps
//! its recursive step in [`ensure_sufficient_stack`] so that deeply nested
//! data like `((((...))))` grows the stack instead of overflowing it.
//!
//! On `wasm32` the guard is a plain call.

/// Grow the stack when less than this much remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// close to exhausted.
///
/// ```text
/// fn read_list(&mut self) -> Result<Value, ParseError> {
///     ensure_sufficient_stack(|| self.read_form())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// `wasm32` has no `stacker` support; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
