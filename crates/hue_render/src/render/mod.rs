//! Token stream to decorated bytes.
//!
//! Per source, in order: optional header box, then every token's bytes with
//! color switches and line-number gutters interleaved, then the optional end
//! marker and a final color reset.
//!
//! # Reconstruction
//!
//! Decoration is strictly additive. Token bytes are written verbatim and in
//! order; removing escapes, gutters, the header and the end marker from the
//! output gives back the input exactly.
//!
//! # Gutters
//!
//! A gutter is written before the first token and right after every `\n`
//! byte, wherever it occurs, including inside string and comment tokens, so
//! tokens are written line by line. A final `\n` therefore opens one more
//! numbered line. Empty input gets no gutter at all.

use std::io::{self, Write};

use hue_lexer_core::Token;

use crate::config::RenderConfig;
use crate::glyphs::Glyphs;
use crate::header::HeaderBox;
use crate::theme::{Color, Theme, RESET};

/// Smallest gutter number width.
const MIN_GUTTER_WIDTH: usize = 4;

/// Gutter number width for a source with `lines` lines.
pub fn gutter_width(lines: usize) -> usize {
    let mut digits = 1;
    let mut rest = lines / 10;
    while rest > 0 {
        digits += 1;
        rest /= 10;
    }
    digits.max(MIN_GUTTER_WIDTH)
}

/// Lines that receive a gutter: one more than the number of `\n` bytes,
/// none for empty input.
fn numbered_lines(input: &[u8]) -> usize {
    if input.is_empty() {
        0
    } else {
        memchr::memchr_iter(b'\n', input).count() + 1
    }
}

/// Render `tokens` scanned from `input` into `writer`.
///
/// Convenience wrapper over [`Renderer`] for a single source.
pub fn render<W, I>(
    tokens: I,
    input: &[u8],
    name: &str,
    config: RenderConfig,
    theme: &Theme,
    writer: W,
) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = Token>,
{
    Renderer::new(writer, config, *theme).render(name, input, tokens)
}

/// Line-number bookkeeping for one source.
#[derive(Debug)]
struct Gutter {
    enabled: bool,
    width: usize,
    /// Number of the line being written.
    line: usize,
}

/// Writes decorated sources to a writer it owns.
///
/// The writer is injected, so rendering into a `Vec<u8>` is the normal way
/// to test. Any write error is returned immediately.
pub struct Renderer<W: Write> {
    writer: W,
    config: RenderConfig,
    theme: Theme,
    glyphs: &'static Glyphs,
    /// Color most recently written, `None` when no escape is in effect.
    active: Option<Color>,
}

impl<W: Write> Renderer<W> {
    pub fn new(writer: W, config: RenderConfig, theme: Theme) -> Self {
        Renderer {
            writer,
            config,
            theme,
            glyphs: Glyphs::select(config.ascii_only),
            active: None,
        }
    }

    /// Direct access to the writer, bypassing decoration.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Render one source.
    ///
    /// `tokens` must be the scan of `input`; `name` is shown in the header.
    pub fn render<I>(&mut self, name: &str, input: &[u8], tokens: I) -> io::Result<()>
    where
        I: IntoIterator<Item = Token>,
    {
        let lines = numbered_lines(input);
        let mut gutter = Gutter {
            enabled: self.config.show_line_numbers && lines > 0,
            width: gutter_width(lines),
            line: 1,
        };

        if self.config.show_header {
            // The corner joins only a gutter that is actually written.
            let joined = gutter.enabled.then_some(gutter.width);
            self.write_header(&HeaderBox::new(name, input.len() as u64, self.glyphs, joined))?;
        }
        if gutter.enabled {
            self.write_gutter(&gutter)?;
        }

        let mut count = 0usize;
        for token in tokens {
            self.write_token(token, input, &mut gutter)?;
            count += 1;
        }

        if self.config.show_end_marker {
            self.set_color(self.theme.decoration())?;
            self.writer.write_all(self.glyphs.end_marker.as_bytes())?;
        }
        if self.config.color_enabled {
            self.writer.write_all(RESET.as_bytes())?;
            self.active = None;
        }

        tracing::debug!(
            name,
            bytes = input.len(),
            tokens = count,
            lines,
            "rendered source"
        );
        Ok(())
    }

    /// Write raw bytes with no decoration, e.g. separators between sources.
    pub fn write_raw(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.writer.write_all(bytes)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Switch to `color` unless it is already active.
    fn set_color(&mut self, color: Color) -> io::Result<()> {
        if self.config.color_enabled && self.active != Some(color) {
            self.writer.write_all(color.escape().as_bytes())?;
            self.active = Some(color);
        }
        Ok(())
    }

    fn write_header(&mut self, header: &HeaderBox) -> io::Result<()> {
        let border = self.theme.decoration();

        self.set_color(border)?;
        writeln!(self.writer, "{}{}", header.indent, header.top)?;

        write!(self.writer, "{}{}", header.indent, header.left)?;
        self.set_color(Color::Bold)?;
        self.writer.write_all(header.name.as_bytes())?;
        self.set_color(border)?;
        writeln!(self.writer, "{}", header.right)?;

        writeln!(self.writer, "{}{}", header.indent, header.bottom)
    }

    fn write_gutter(&mut self, gutter: &Gutter) -> io::Result<()> {
        self.set_color(self.theme.decoration())?;
        write!(
            self.writer,
            "{:>width$}{} ",
            gutter.line,
            self.glyphs.vertical,
            width = gutter.width
        )
    }

    fn write_token(&mut self, token: Token, input: &[u8], gutter: &mut Gutter) -> io::Result<()> {
        let color = self.theme.color(token.class);
        let mut rest = token.bytes(input);
        while !rest.is_empty() {
            self.set_color(color)?;
            let (line, tail) = match memchr::memchr(b'\n', rest) {
                Some(i) => rest.split_at(i + 1),
                None => (rest, &[][..]),
            };
            self.writer.write_all(line)?;
            if line.last() == Some(&b'\n') {
                gutter.line += 1;
                if gutter.enabled {
                    self.write_gutter(gutter)?;
                }
            }
            rest = tail;
        }
        Ok(())
    }
}
