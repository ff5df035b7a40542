//! Byte-level token classifier for huecat.
//!
//! Turns an immutable byte buffer into a lazy stream of [`Token`]s, each a
//! classified, contiguous span of the input. The stream partitions the input
//! exactly: concatenating every token's bytes reproduces the buffer.
//!
//! # Architecture
//!
//! ```text
//! SourceBuffer (capacity-checked bytes)
//!     │
//!     ▼
//! Cursor ──► Scanner (state machine, one token per call)
//!     │
//!     ▼
//! Token { class, start, end }
//! ```
//!
//! The scanner never fails: every byte value is classifiable, and
//! unterminated strings or comments simply run to end of input.

mod cursor;
mod grammar;
mod scanner;
mod source_buffer;
mod token;

pub use cursor::Cursor;
pub use grammar::Grammar;
pub use scanner::{scan, Scanner};
pub use source_buffer::{check_len, line_count, CapacityError, SourceBuffer, DEFAULT_CAPACITY};
pub use token::{Token, TokenClass};
