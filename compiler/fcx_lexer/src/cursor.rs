//! Byte cursor with line/column tracking.
//!
//! Reads past the end return `0x00`, so callers can peek freely without
//! bounds checks. The cursor is [`Copy`]; snapshot it to backtrack.
//!
//! Columns are 1-based byte columns. A `\n` bumps the line and resets the
//! column to 1.

#[cfg(test)]
mod tests;

/// Cursor over source text.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    src: &'a str,
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Cursor {
            src,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Byte at the current position, `0x00` at EOF.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.peek_at(0)
    }

    /// Byte one ahead of current.
    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.peek_at(1)
    }

    #[inline]
    pub(crate) fn peek_at(&self, offset: usize) -> u8 {
        self.src
            .as_bytes()
            .get(self.pos + offset)
            .copied()
            .unwrap_or(0)
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub(crate) fn column(&self) -> u32 {
        self.column
    }

    /// Remaining bytes from the current position.
    #[inline]
    pub(crate) fn rest(&self) -> &'a [u8] {
        self.src.as_bytes().get(self.pos..).unwrap_or(&[])
    }

    /// Advance one byte. No-op at EOF.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if self.is_eof() {
            return;
        }
        if self.current() == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.pos += 1;
    }

    pub(crate) fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Width of the UTF-8 sequence starting with `byte`.
    ///
    /// Continuation and invalid lead bytes count as one, so the cursor
    /// always makes progress.
    #[inline]
    pub(crate) fn utf8_char_width(byte: u8) -> usize {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character.
    #[inline]
    pub(crate) fn advance_char(&mut self) {
        self.advance_n(Self::utf8_char_width(self.current()));
    }

    /// The character at the current position, if any.
    pub(crate) fn current_char(&self) -> Option<char> {
        self.src.get(self.pos..).and_then(|s| s.chars().next())
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// `pred(0)` must be false, or the loop stops only at EOF.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Source text between two byte offsets. Empty if the range is not on
    /// character boundaries.
    #[inline]
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        self.src.get(start..end).unwrap_or("")
    }

    #[inline]
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }
}
