//! Lexical rule set selection.
//!
//! There is one grammar shape; presets differ only in which optional rules
//! are switched on. The per-byte rules that every preset shares live in the
//! scanner.

/// Configurable lexical rule set.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grammar {
    /// Words classified as [`Keyword`](crate::TokenClass::Keyword).
    ///
    /// When empty, letters are not grouped into words at all and fall back
    /// to one-byte plain tokens.
    pub keywords: &'static [&'static str],
    /// `0x` continues a lone leading `0` as a hexadecimal number.
    pub hex_numbers: bool,
    /// `/* ... */` block comments.
    pub block_comments: bool,
    /// `// ...` comments running to end of line.
    pub line_comments: bool,
    /// Extra bytes emitted as one-byte operator tokens. `-` is always an
    /// operator and `/` is handled separately.
    pub operators: &'static [u8],
}

impl Grammar {
    /// JSON with `true`/`false`/`null` keywords and tolerated block comments.
    pub const JSON: Grammar = Grammar {
        keywords: &["true", "false", "null"],
        hex_numbers: false,
        block_comments: true,
        line_comments: false,
        operators: b"-",
    };

    /// The bare per-byte rules with no optional extensions.
    pub const BASIC: Grammar = Grammar {
        keywords: &[],
        hex_numbers: false,
        block_comments: true,
        line_comments: false,
        operators: b"-",
    };

    /// Returns `true` if letters should be grouped into words.
    #[inline]
    pub fn has_keywords(&self) -> bool {
        !self.keywords.is_empty()
    }

    /// Returns `true` if `word` is one of this grammar's keywords.
    pub fn is_keyword(&self, word: &[u8]) -> bool {
        self.keywords.iter().any(|kw| kw.as_bytes() == word)
    }

    /// Returns `true` if `byte` is a one-byte operator.
    #[inline]
    pub fn is_operator(&self, byte: u8) -> bool {
        self.operators.contains(&byte)
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Grammar::JSON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_json() {
        assert_eq!(Grammar::default(), Grammar::JSON);
    }

    #[test]
    fn json_keywords() {
        let g = Grammar::JSON;
        assert!(g.has_keywords());
        assert!(g.is_keyword(b"true"));
        assert!(g.is_keyword(b"null"));
        assert!(!g.is_keyword(b"True"));
        assert!(!g.is_keyword(b"nul"));
    }

    #[test]
    fn basic_has_no_keywords() {
        assert!(!Grammar::BASIC.has_keywords());
        assert!(!Grammar::BASIC.is_keyword(b"true"));
    }

    #[test]
    fn minus_is_an_operator_everywhere() {
        assert!(Grammar::JSON.is_operator(b'-'));
        assert!(Grammar::BASIC.is_operator(b'-'));
        assert!(!Grammar::BASIC.is_operator(b'+'));
    }
}
