//! Driving the scanner and renderer over a sequence of sources.
//!
//! Sources are processed strictly one after another. A source that failed
//! to load is reported and skipped; a failed write ends the run.

use std::io::{self, Write};

use hue_lexer_core::{scan, Grammar, DEFAULT_CAPACITY};
use hue_render::{RenderConfig, Renderer, Theme};

use crate::error::Error;
use crate::input::Source;

/// Placed between consecutive sources: two blank lines.
const SEPARATOR: &[u8] = b"\n\n";

/// Everything a run needs besides the sources themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    pub config: RenderConfig,
    pub theme: Theme,
    pub grammar: Grammar,
    /// Capacity cap applied when loading.
    pub limit: u64,
    /// Print tokens instead of rendering.
    pub dump_tokens: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            config: RenderConfig::plain(),
            theme: Theme::default(),
            grammar: Grammar::default(),
            limit: DEFAULT_CAPACITY,
            dump_tokens: false,
        }
    }
}

/// Outcome of a run that was not aborted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub rendered: usize,
    pub failed: usize,
}

impl Summary {
    /// `1` when any source failed to load.
    pub fn exit_code(self) -> u8 {
        u8::from(self.failed > 0)
    }
}

/// Render every loaded source into `out`, reporting load failures to
/// `diagnostics` as `huecat: <error>`.
///
/// Returns early with [`Error::Write`] when `out` fails.
pub fn run_sources<I, W, D>(
    sources: I,
    options: &Options,
    out: W,
    diagnostics: &mut D,
) -> Result<Summary, Error>
where
    I: IntoIterator<Item = Result<Source, Error>>,
    W: Write,
    D: Write,
{
    let mut renderer = Renderer::new(out, options.config, options.theme);
    let mut summary = Summary::default();
    // Whether the previous render left the output at the start of a line.
    let mut previous: Option<bool> = None;

    for loaded in sources {
        let source = match loaded {
            Ok(source) => source,
            Err(err) if err.is_per_source() => {
                tracing::debug!(error = %err, "skipping source");
                writeln!(diagnostics, "huecat: {err}")?;
                summary.failed += 1;
                continue;
            }
            Err(err) => return Err(err),
        };

        if let Some(at_line_start) = previous {
            if !at_line_start {
                renderer.write_raw(b"\n")?;
            }
            renderer.write_raw(SEPARATOR)?;
        }

        let bytes = source.buffer.as_bytes();
        if options.dump_tokens {
            dump_tokens(bytes, &options.grammar, renderer.writer_mut())?;
            previous = Some(true);
        } else {
            renderer.render(&source.name, bytes, scan(bytes, &options.grammar))?;
            previous = Some(ends_at_line_start(bytes, options.config));
        }
        summary.rendered += 1;
    }

    renderer.flush()?;
    tracing::debug!(rendered = summary.rendered, failed = summary.failed, "run finished");
    Ok(summary)
}

/// Whether rendering `bytes` leaves the cursor at the start of a line.
fn ends_at_line_start(bytes: &[u8], config: RenderConfig) -> bool {
    if config.show_end_marker {
        return false;
    }
    match bytes.last() {
        // An empty source writes at most the header, which ends in a newline.
        None => true,
        // The line opened by a final newline already carries its gutter.
        Some(b'\n') => !config.show_line_numbers,
        Some(_) => false,
    }
}

/// Write one line per token: `start..end class "bytes"`, with the bytes
/// escaped as ASCII. Returns the number of tokens.
pub fn dump_tokens<W: Write>(bytes: &[u8], grammar: &Grammar, out: &mut W) -> io::Result<usize> {
    let mut count = 0;
    for token in scan(bytes, grammar) {
        writeln!(
            out,
            "{}..{} {} \"{}\"",
            token.start,
            token.end,
            token.class,
            token.bytes(bytes).escape_ascii()
        )?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests;
