//! Forward-only cursor over an immutable byte buffer.
//!
//! The cursor is the scanner's only mutable state: a single byte offset that
//! never moves backwards. Reads at or past the end of the buffer return
//! `0x00`, so lookahead never needs its own bounds check.
//!
//! # Interior Null Bytes
//!
//! Input is arbitrary bytes, so `0x00` can appear inside the buffer. The
//! cursor distinguishes them from end of input by comparing `pos` against
//! the buffer length; [`Cursor::is_eof`] is the only reliable EOF test.

/// Forward-only cursor over an immutable byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor) or
/// [`Cursor::new`]. The cursor is [`Copy`], so a scanner can hand out cheap
/// snapshots without sharing the live position.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    /// Current read position (byte index into `buf`). Never exceeds `buf.len()`.
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.buf.get(index).copied().unwrap_or(0)
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Advance the cursor by one byte. A no-op at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.buf.len() {
            self.pos += 1;
        }
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the underlying buffer.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.buf.len()
    }

    /// Bytes in `start..end`.
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start..end]
    }

    /// Bytes from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Stops at EOF regardless of what `pred(0)` returns.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` byte, or to EOF if there is none.
    pub fn eat_until_newline_or_eof(&mut self) {
        self.eat_until(b'\n');
    }

    /// Advance to the next occurrence of `byte`, or to EOF.
    ///
    /// Returns the number of bytes skipped.
    pub fn eat_until(&mut self, byte: u8) -> usize {
        let start = self.pos;
        let remaining = &self.buf[self.pos..];
        self.pos = match memchr::memchr(byte, remaining) {
            Some(offset) => self.pos + offset,
            None => self.buf.len(),
        };
        self.pos - start
    }

    /// Advance past ordinary string content to the next closing `quote` or
    /// backslash. Returns the byte found, or `None` at EOF.
    pub fn skip_to_string_delim(&mut self, quote: u8) -> Option<u8> {
        let remaining = &self.buf[self.pos..];
        if let Some(offset) = memchr::memchr2(quote, b'\\', remaining) {
            self.pos += offset;
            Some(self.buf[self.pos])
        } else {
            self.pos = self.buf.len();
            None
        }
    }
}
