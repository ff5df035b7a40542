//! Token and token class definitions.

use std::fmt;
use std::ops::Range;

/// Semantic category of a token.
///
/// Closed set: every byte of the input lands in exactly one of these. The
/// renderer maps each class to one display color through its theme.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenClass {
    String = 0,
    Keyword = 1,
    Number = 2,
    Operator = 3,
    Bracket = 4,
    Separator = 5,
    Comment = 6,
    Whitespace = 7,
    Newline = 8,
    Plain = 9,
}

impl TokenClass {
    /// Number of variants.
    pub const COUNT: usize = 10;

    /// Every class, in discriminant order.
    pub const ALL: [TokenClass; Self::COUNT] = [
        TokenClass::String,
        TokenClass::Keyword,
        TokenClass::Number,
        TokenClass::Operator,
        TokenClass::Bracket,
        TokenClass::Separator,
        TokenClass::Comment,
        TokenClass::Whitespace,
        TokenClass::Newline,
        TokenClass::Plain,
    ];

    /// Dense index in `0..COUNT`, for table lookups.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase display name.
    pub const fn name(self) -> &'static str {
        match self {
            TokenClass::String => "string",
            TokenClass::Keyword => "keyword",
            TokenClass::Number => "number",
            TokenClass::Operator => "operator",
            TokenClass::Bracket => "bracket",
            TokenClass::Separator => "separator",
            TokenClass::Comment => "comment",
            TokenClass::Whitespace => "whitespace",
            TokenClass::Newline => "newline",
            TokenClass::Plain => "plain",
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified, contiguous span of the input.
///
/// `start..end` is a half-open byte range. Tokens from one scan are
/// contiguous: each token's `end` is the next token's `start`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub class: TokenClass,
    pub start: usize,
    pub end: usize,
}

impl Token {
    #[inline]
    pub const fn new(class: TokenClass, start: usize, end: usize) -> Self {
        Token { class, start, end }
    }

    /// Length in bytes. Always at least 1 for scanner-produced tokens.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The token's bytes within `input`, the buffer it was scanned from.
    #[inline]
    pub fn bytes<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        &input[self.range()]
    }
}
