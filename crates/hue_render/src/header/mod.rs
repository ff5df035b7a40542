//! Info header: a box holding the source name and its size.
//!
//! ```text
//!     ┌──────────────────┐
//!     │ data.json  12 B  │
//!     ├──────────────────┘
//!    1│ {"a":1}
//! ```
//!
//! When a line-number gutter follows, the box is indented by the gutter's
//! number width so that the joined corner sits on the gutter separator.

use crate::glyphs::Glyphs;

const UNITS: [&str; 3] = ["B", "KB", "MB"];

/// Human-readable size in binary units, integer-truncated.
///
/// Steps `B → KB → MB` by dividing by 1024. There is no unit above MB:
/// larger sizes stay in MB (`5 GiB` is `"5120 MB"`).
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes;
    let mut unit = 0;
    while value >= 1024 && unit + 1 < UNITS.len() {
        value /= 1024;
        unit += 1;
    }
    format!("{value} {}", UNITS[unit])
}

/// The three lines of a header box, without colors or line endings.
///
/// The middle line is split so the renderer can color the name separately
/// from the border.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderBox {
    /// Leading spaces on every line.
    pub indent: String,
    pub top: String,
    /// Vertical border plus padding before the name.
    pub left: String,
    pub name: String,
    /// Padding, size and the closing vertical border.
    pub right: String,
    pub bottom: String,
}

impl HeaderBox {
    /// Lay out a header for `name` and a source of `len` bytes.
    ///
    /// `gutter` is the line-number width when a gutter follows the header.
    pub fn new(name: &str, len: u64, glyphs: &Glyphs, gutter: Option<usize>) -> Self {
        let size = format_size(len);
        // " name  size " between the two vertical borders.
        let inner = name.chars().count() + size.chars().count() + 4;
        let rule = glyphs.horizontal.repeat(inner);
        let bottom_left = if gutter.is_some() {
            glyphs.bottom_left_joined
        } else {
            glyphs.bottom_left
        };
        HeaderBox {
            indent: " ".repeat(gutter.unwrap_or(0)),
            top: format!("{}{rule}{}", glyphs.top_left, glyphs.top_right),
            left: format!("{} ", glyphs.vertical),
            name: name.to_string(),
            right: format!("  {size} {}", glyphs.vertical),
            bottom: format!("{bottom_left}{rule}{}", glyphs.bottom_right),
        }
    }

    /// The three lines joined with `\n`, no trailing newline.
    pub fn to_plain(&self) -> String {
        format!(
            "{i}{}\n{i}{}{}{}\n{i}{}",
            self.top,
            self.left,
            self.name,
            self.right,
            self.bottom,
            i = self.indent
        )
    }
}
