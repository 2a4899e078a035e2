//! Source location spans.

use std::fmt;

/// Byte range in the source text, end exclusive.
///
/// Lark diagnostics are reported by line, but tokens keep their exact byte
/// range so embedders can point at the lexeme.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Span for tokens that do not come from the source.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Create a span from byte offsets into a source string.
    ///
    /// Offsets past `u32::MAX` saturate; sources that large are not
    /// meaningful input for a line-oriented scripting language.
    #[inline]
    pub fn from_offsets(start: usize, end: usize) -> Self {
        Span {
            start: u32::try_from(start).unwrap_or(u32::MAX),
            end: u32::try_from(end).unwrap_or(u32::MAX),
        }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
