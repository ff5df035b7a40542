//! Box-drawing and marker glyph sets.

/// Glyphs used for every piece of structural decoration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub horizontal: &'static str,
    pub vertical: &'static str,
    pub top_left: &'static str,
    pub top_right: &'static str,
    /// Bottom-left corner when a line-number gutter continues below.
    pub bottom_left_joined: &'static str,
    /// Bottom-left corner when nothing continues below.
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub end_marker: &'static str,
}

impl Glyphs {
    pub const UNICODE: Glyphs = Glyphs {
        horizontal: "─",
        vertical: "│",
        top_left: "┌",
        top_right: "┐",
        bottom_left_joined: "├",
        bottom_left: "└",
        bottom_right: "┘",
        end_marker: "⏎",
    };

    /// Only `-` and `|` for borders.
    pub const ASCII: Glyphs = Glyphs {
        horizontal: "-",
        vertical: "|",
        top_left: "-",
        top_right: "-",
        bottom_left_joined: "|",
        bottom_left: "-",
        bottom_right: "-",
        end_marker: "<END>",
    };

    pub const fn select(ascii_only: bool) -> &'static Glyphs {
        if ascii_only {
            &Glyphs::ASCII
        } else {
            &Glyphs::UNICODE
        }
    }
}
