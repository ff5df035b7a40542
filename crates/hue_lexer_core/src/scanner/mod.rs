//! Hand-written state-machine scanner producing [`Token`]s.
//!
//! # Design
//!
//! Each token is scanned by one run of a small state machine. The machine
//! starts in [`State::Start`], looks at exactly one byte per transition, and
//! either consumes it and continues, consumes it and ends the token, or ends
//! the token without consuming it (one byte of lookahead, never rolled back).
//! [`State::Start`] always consumes, so every token is at least one byte.
//!
//! Reaching end of input in any state ends the token with that state's
//! class. Unterminated strings and comments are therefore "rest of input"
//! tokens rather than errors.

use std::iter::FusedIterator;

use crate::cursor::Cursor;
use crate::grammar::Grammar;
use crate::token::{Token, TokenClass};

/// Scan `input` with `grammar`, producing tokens on demand.
///
/// Each call starts a fresh cursor at offset 0; the same buffer can be
/// scanned any number of times with identical results.
pub fn scan<'a>(input: &'a [u8], grammar: &Grammar) -> Scanner<'a> {
    Scanner::new(Cursor::new(input), *grammar)
}

/// Which quote opened the current string.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Quote {
    Single,
    Double,
}

impl Quote {
    const fn byte(self) -> u8 {
        match self {
            Quote::Single => b'\'',
            Quote::Double => b'"',
        }
    }

    const fn body(self) -> State {
        match self {
            Quote::Single => State::StringSingle,
            Quote::Double => State::StringDouble,
        }
    }
}

/// Per-token lexer state. Lives only for the duration of one token.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Start,
    StringSingle,
    StringDouble,
    /// After a backslash inside a string: the next byte is taken verbatim.
    StringEscape(Quote),
    Number,
    Hex,
    /// Saw `/`; deciding between operator and comment.
    Slash,
    CommentBody,
    /// Inside a block comment, just after one or more `*`.
    CommentEnd,
    LineComment,
    Whitespace,
    Word,
}

impl State {
    /// Class of a token that ends while in this state.
    ///
    /// `Word` reports `Plain` here; keywords are resolved by the scanner,
    /// which can see the word's bytes.
    const fn class(self) -> TokenClass {
        match self {
            State::StringSingle | State::StringDouble | State::StringEscape(_) => TokenClass::String,
            State::Number | State::Hex => TokenClass::Number,
            State::Slash => TokenClass::Operator,
            State::CommentBody | State::CommentEnd | State::LineComment => TokenClass::Comment,
            State::Whitespace => TokenClass::Whitespace,
            // `Start` never survives its first transition.
            State::Start | State::Word => TokenClass::Plain,
        }
    }
}

/// Outcome of feeding one byte to the state machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Step {
    /// Consume the byte and stay in the token.
    Next(State),
    /// Consume the byte and end the token.
    Accept(TokenClass),
    /// End the token before the byte. Never returned from `Start`.
    Stop(State),
}

#[inline]
fn is_inline_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r')
}

#[inline]
fn is_word_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Pull-based token scanner.
///
/// Holds nothing but the cursor and a copy of the grammar. Once the cursor
/// reaches the end of input, [`Scanner::next_token`] keeps returning `None`.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    grammar: Grammar,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>, grammar: Grammar) -> Self {
        Self { cursor, grammar }
    }

    /// Current byte offset (the start of the next token).
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    /// Produce the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        if self.cursor.is_eof() {
            return None;
        }
        let start = self.cursor.pos();
        let mut state = State::Start;
        loop {
            self.fast_forward(state);
            if self.cursor.is_eof() {
                return Some(self.finish(state, start));
            }
            match self.transition(state, self.cursor.current(), start) {
                Step::Next(next) => {
                    self.cursor.advance();
                    state = next;
                }
                Step::Accept(class) => {
                    self.cursor.advance();
                    return Some(Token::new(class, start, self.cursor.pos()));
                }
                Step::Stop(last) => {
                    debug_assert!(self.cursor.pos() > start, "empty token at {start}");
                    return Some(self.finish(last, start));
                }
            }
        }
    }

    /// End the token at the current position with `state`'s class.
    fn finish(&self, state: State, start: usize) -> Token {
        let class = match state {
            State::Word if self.grammar.is_keyword(self.cursor.slice_from(start)) => {
                TokenClass::Keyword
            }
            _ => state.class(),
        };
        Token::new(class, start, self.cursor.pos())
    }

    /// Skip bytes that cannot change the state.
    ///
    /// Equivalent to feeding them one at a time; string bodies and comment
    /// bodies are just long runs of `Next(same state)`.
    #[inline]
    fn fast_forward(&mut self, state: State) {
        match state {
            State::StringDouble | State::StringSingle => {
                let quote = if state == State::StringDouble {
                    Quote::Double
                } else {
                    Quote::Single
                };
                self.cursor.skip_to_string_delim(quote.byte());
            }
            State::CommentBody => {
                self.cursor.eat_until(b'*');
            }
            State::LineComment => self.cursor.eat_until_newline_or_eof(),
            State::Whitespace => self.cursor.eat_while(is_inline_space),
            State::Number => self.cursor.eat_while(|b| b.is_ascii_digit()),
            _ => {}
        }
    }

    /// Single `(state, byte)` dispatch.
    fn transition(&self, state: State, b: u8, start: usize) -> Step {
        match state {
            State::Start => self.start(b),

            State::StringDouble | State::StringSingle => {
                let quote = if state == State::StringDouble {
                    Quote::Double
                } else {
                    Quote::Single
                };
                if b == quote.byte() {
                    Step::Accept(TokenClass::String)
                } else if b == b'\\' {
                    Step::Next(State::StringEscape(quote))
                } else {
                    Step::Next(state)
                }
            }
            // Any byte at all, including newline and the quote itself.
            State::StringEscape(quote) => Step::Next(quote.body()),

            State::Number => match b {
                b'0'..=b'9' => Step::Next(State::Number),
                b'x' | b'X'
                    if self.grammar.hex_numbers && self.cursor.slice_from(start) == b"0" =>
                {
                    Step::Next(State::Hex)
                }
                _ => Step::Stop(State::Number),
            },
            State::Hex => {
                if b.is_ascii_hexdigit() {
                    Step::Next(State::Hex)
                } else {
                    Step::Stop(State::Hex)
                }
            }

            State::Slash => match b {
                b'*' if self.grammar.block_comments => Step::Next(State::CommentBody),
                b'/' if self.grammar.line_comments => Step::Next(State::LineComment),
                _ => Step::Stop(State::Slash),
            },
            State::CommentBody => {
                if b == b'*' {
                    Step::Next(State::CommentEnd)
                } else {
                    Step::Next(State::CommentBody)
                }
            }
            State::CommentEnd => match b {
                b'/' => Step::Accept(TokenClass::Comment),
                b'*' => Step::Next(State::CommentEnd),
                _ => Step::Next(State::CommentBody),
            },
            State::LineComment => {
                if b == b'\n' {
                    Step::Stop(State::LineComment)
                } else {
                    Step::Next(State::LineComment)
                }
            }

            State::Whitespace => {
                if is_inline_space(b) {
                    Step::Next(State::Whitespace)
                } else {
                    Step::Stop(State::Whitespace)
                }
            }
            State::Word => {
                if is_word_continue(b) {
                    Step::Next(State::Word)
                } else {
                    Step::Stop(State::Word)
                }
            }
        }
    }

    /// First byte of a token. Always consumes.
    fn start(&self, b: u8) -> Step {
        match b {
            b'"' => Step::Next(State::StringDouble),
            b'\'' => Step::Next(State::StringSingle),
            b'{' | b'}' | b'[' | b']' => Step::Accept(TokenClass::Bracket),
            b'/' => Step::Next(State::Slash),
            b',' | b':' => Step::Accept(TokenClass::Separator),
            b'0'..=b'9' => Step::Next(State::Number),
            b' ' | b'\t' | b'\r' => Step::Next(State::Whitespace),
            b'\n' => Step::Accept(TokenClass::Newline),
            b'a'..=b'z' | b'A'..=b'Z' if self.grammar.has_keywords() => Step::Next(State::Word),
            b'-' => Step::Accept(TokenClass::Operator),
            _ if self.grammar.is_operator(b) => Step::Accept(TokenClass::Operator),
            _ => Step::Accept(TokenClass::Plain),
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    #[inline]
    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

impl FusedIterator for Scanner<'_> {}
