//! Colors and the token-class color table.

use hue_lexer_core::TokenClass;

/// Terminal reset: clears every attribute.
pub const RESET: &str = "\x1b[0m";

/// Display color for one token class or decoration.
///
/// Every escape starts with a `0` parameter, so switching from one color
/// to another never leaks attributes like bold from the previous one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Terminal default foreground, no attributes.
    Default,
    Bold,
    Dim,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// ANSI SGR escape selecting this color.
    pub const fn escape(self) -> &'static str {
        match self {
            Color::Default => "\x1b[0m",
            Color::Bold => "\x1b[0;1m",
            Color::Dim => "\x1b[0;2m",
            Color::Black => "\x1b[0;30m",
            Color::Red => "\x1b[0;31m",
            Color::Green => "\x1b[0;32m",
            Color::Yellow => "\x1b[0;33m",
            Color::Blue => "\x1b[0;34m",
            Color::Magenta => "\x1b[0;35m",
            Color::Cyan => "\x1b[0;36m",
            Color::White => "\x1b[0;37m",
            Color::BrightBlack => "\x1b[0;90m",
            Color::BrightRed => "\x1b[0;91m",
            Color::BrightGreen => "\x1b[0;92m",
            Color::BrightYellow => "\x1b[0;93m",
            Color::BrightBlue => "\x1b[0;94m",
            Color::BrightMagenta => "\x1b[0;95m",
            Color::BrightCyan => "\x1b[0;96m",
            Color::BrightWhite => "\x1b[0;97m",
        }
    }
}

/// Total mapping from [`TokenClass`] to [`Color`], plus the decoration color
/// used for gutters, header borders and the end marker.
///
/// Fixed at construction; lookups are a plain array index.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    colors: [Color; TokenClass::COUNT],
    decoration: Color,
}

impl Theme {
    /// Every class in `color`, decoration in [`Color::BrightBlack`].
    pub const fn uniform(color: Color) -> Self {
        Theme {
            colors: [color; TokenClass::COUNT],
            decoration: Color::BrightBlack,
        }
    }

    /// Every class and the decoration in the terminal default.
    pub const fn monochrome() -> Self {
        Theme {
            colors: [Color::Default; TokenClass::COUNT],
            decoration: Color::Default,
        }
    }

    /// Replace the color of one class.
    #[must_use]
    pub fn with(mut self, class: TokenClass, color: Color) -> Self {
        self.colors[class.index()] = color;
        self
    }

    #[inline]
    pub const fn color(&self, class: TokenClass) -> Color {
        self.colors[class.index()]
    }

    #[inline]
    pub const fn decoration(&self) -> Color {
        self.decoration
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::uniform(Color::Default)
            .with(TokenClass::String, Color::Green)
            .with(TokenClass::Keyword, Color::Magenta)
            .with(TokenClass::Number, Color::Cyan)
            .with(TokenClass::Operator, Color::Yellow)
            .with(TokenClass::Bracket, Color::BrightBlue)
            .with(TokenClass::Separator, Color::BrightWhite)
            .with(TokenClass::Comment, Color::Dim)
    }
}
