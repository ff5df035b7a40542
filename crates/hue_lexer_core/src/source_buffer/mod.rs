//! Owned, fully materialized input with a capacity cap.
//!
//! A [`SourceBuffer`] is the only way input enters the pipeline from the
//! outside. Construction checks the byte count against a limit and refuses
//! oversized input up front, so nothing is scanned or rendered for a source
//! that would be rejected.

use std::fmt;

use crate::grammar::Grammar;
use crate::scanner::Scanner;
use crate::Cursor;

/// Default capacity cap: 1 TiB.
pub const DEFAULT_CAPACITY: u64 = 1 << 40;

/// Input exceeds the capacity cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapacityError {
    /// Size of the rejected input in bytes.
    pub len: u64,
    /// The cap it was checked against.
    pub limit: u64,
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "input too large: {} bytes exceeds the limit of {} bytes",
            self.len, self.limit
        )
    }
}

impl std::error::Error for CapacityError {}

/// Owned input bytes, checked against a capacity cap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceBuffer {
    bytes: Vec<u8>,
}

impl SourceBuffer {
    /// Wrap `bytes`, rejecting anything over [`DEFAULT_CAPACITY`].
    pub fn new(bytes: Vec<u8>) -> Result<Self, CapacityError> {
        Self::with_limit(bytes, DEFAULT_CAPACITY)
    }

    /// Wrap `bytes`, rejecting anything over `limit` bytes.
    pub fn with_limit(bytes: Vec<u8>, limit: u64) -> Result<Self, CapacityError> {
        check_len(bytes.len() as u64, limit)?;
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of lines, counting a final line without a trailing `\n`.
    ///
    /// `""` has 0 lines, `"a"` and `"a\n"` have 1, `"a\nb"` has 2.
    pub fn line_count(&self) -> usize {
        line_count(&self.bytes)
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.bytes)
    }

    /// Scan this buffer with `grammar`.
    pub fn scan(&self, grammar: &Grammar) -> Scanner<'_> {
        Scanner::new(self.cursor(), *grammar)
    }
}

/// Check a byte count against `limit` without having the bytes yet.
///
/// Lets callers reject a file from its metadata before reading it.
pub fn check_len(len: u64, limit: u64) -> Result<(), CapacityError> {
    if len > limit {
        Err(CapacityError { len, limit })
    } else {
        Ok(())
    }
}

/// Number of lines in `bytes`; see [`SourceBuffer::line_count`].
pub fn line_count(bytes: &[u8]) -> usize {
    let newlines = memchr::memchr_iter(b'\n', bytes).count();
    match bytes.last() {
        Some(b'\n') | None => newlines,
        Some(_) => newlines + 1,
    }
}

#[cfg(test)]
mod tests;
