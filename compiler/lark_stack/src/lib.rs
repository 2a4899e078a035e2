//! Stack growth for deeply nested Lark programs.
//!
//! The parser and the interpreter are both plain recursive descent over the
//! syntax tree, so a source file like `((((((...))))))` or a long chain of
//! `!!!!!x` recurses once per nesting level. Wrapping the recursive entry
//! points in [`ensure_sufficient_stack`] moves the recursion onto a freshly
//! allocated segment when the current one runs low.
//!
//! - **Red zone**: 64KB. Below this, a new segment is allocated.
//! - **Segment size**: 1MB per growth.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the native stack first if less than the red zone is left.
///
/// ```text
/// fn parse_unary(&mut self) -> Result<Expr, ParseError> {
///     ensure_sufficient_stack(|| {
///         if self.eat(TokenKind::Bang) {
///             let operand = self.parse_unary()?;
///             ...
///         }
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
