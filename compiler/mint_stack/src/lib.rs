//! Stack growth for deep recursion.
//!
//! Both the parser and the evaluator recurse once per nesting level of
//! the program (`if` inside `while` inside `if`, long chains of `+`).
//! A pathological source file can nest deep enough to exhaust the main
//! thread's stack, so every recursive entry point goes through
//! [`ensure_sufficient_stack`].
//!
//! On native targets this is `stacker::maybe_grow`; on WASM it is a plain
//! call.

/// Grow the stack when fewer than this many bytes remain (64KB).
const RED_ZONE: usize = 64 * 1024;

/// Size of each freshly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the
/// red zone.
///
/// ```text
/// fn parse_unary(&mut self) -> Result<Node, ParseError> {
///     ensure_sufficient_stack(|| {
///         // may recurse into parse_unary again
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
