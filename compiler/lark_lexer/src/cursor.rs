//! Byte-position cursor over the source text.
//!
//! The cursor walks the source `char` by `char` but tracks a byte offset, so
//! lexemes are sliced straight out of the source without copying until a
//! token is built. Past the end, `current` and `peek` return `'\0'`.

#[derive(Clone, Debug)]
pub(crate) struct Cursor<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Cursor { source, pos: 0 }
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    #[inline]
    fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    /// Character at the cursor, or `'\0'` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> char {
        self.rest().chars().next().unwrap_or('\0')
    }

    /// Character after the current one, or `'\0'`.
    #[inline]
    pub(crate) fn peek(&self) -> char {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next().unwrap_or('\0')
    }

    /// Consume and return the current character.
    #[inline]
    pub(crate) fn advance(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume the current character if it equals `expected`.
    #[inline]
    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if !self.is_eof() && self.current() == expected {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume characters while `pred` holds.
    pub(crate) fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += self.current().len_utf8();
        }
    }

    /// Advance to the next `\n` without consuming it, or to end of input.
    pub(crate) fn eat_until_newline_or_eof(&mut self) {
        match memchr::memchr(b'\n', self.rest().as_bytes()) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.source.len(),
        }
    }

    /// Advance to the next `"` without consuming it, or to end of input.
    ///
    /// Returns the number of newlines skipped over. `false` in the second
    /// slot means the input ended first.
    pub(crate) fn eat_until_quote(&mut self) -> (u32, bool) {
        let rest = self.rest().as_bytes();
        let (skipped, found) = match memchr::memchr(b'"', rest) {
            Some(offset) => (&rest[..offset], true),
            None => (rest, false),
        };
        let newlines = memchr::memchr_iter(b'\n', skipped).count();
        self.pos += skipped.len();
        (u32::try_from(newlines).unwrap_or(u32::MAX), found)
    }

    /// Source text between `start` and the cursor.
    #[inline]
    pub(crate) fn slice_from(&self, start: usize) -> &'src str {
        &self.source[start..self.pos]
    }
}

#[cfg(test)]
mod tests;
