//! Byte cursor over source text.
//!
//! Reads return `0x00` once the cursor is past the end, so scanning loops can
//! test bytes without a separate bounds check. Every position the tokenizer
//! stops at sits next to an ASCII byte or at the end of input, which keeps
//! [`Cursor::slice_from`] on character boundaries.

/// Cursor over the bytes of a `&str`.
///
/// [`Copy`], so a snapshot is just a copy.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at offset 0.
    pub fn new(src: &'a str) -> Self {
        Cursor { src, pos: 0 }
    }

    /// Byte at the current position, or `0x00` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte after the current one, or `0x00`.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    fn byte_at(&self, pos: usize) -> u8 {
        self.src.as_bytes().get(pos).copied().unwrap_or(0)
    }

    /// Advance by one byte (saturating at end of input).
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance by `n` bytes (saturating at end of input).
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.src.len());
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Source text from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        debug_assert!(start <= self.pos, "slice start {start} past cursor {}", self.pos);
        &self.src[start..self.pos]
    }

    /// Advance while `pred` holds and input remains.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` (left unconsumed) or to end of input.
    pub fn eat_until_newline_or_eof(&mut self) {
        let rest = &self.src.as_bytes()[self.pos..];
        match memchr::memchr(b'\n', rest) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.src.len(),
        }
    }

    /// Skip the body of a string literal whose opening `"` was already
    /// consumed.
    ///
    /// Stops just past the closing quote and returns `true`, or stops at end
    /// of input and returns `false`. A backslash always swallows the byte
    /// after it, so `\"` never closes the literal.
    pub fn eat_string_body(&mut self) -> bool {
        loop {
            let rest = &self.src.as_bytes()[self.pos..];
            match memchr::memchr2(b'"', b'\\', rest) {
                Some(offset) => {
                    self.pos += offset;
                    if self.current() == b'"' {
                        self.advance();
                        return true;
                    }
                    // Backslash: skip it and whatever it escapes.
                    self.advance_n(2);
                }
                None => {
                    self.pos = self.src.len();
                    return false;
                }
            }
        }
    }
}
