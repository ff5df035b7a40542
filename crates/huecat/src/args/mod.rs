//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use hue_lexer_core::{Grammar, DEFAULT_CAPACITY};
use hue_render::{ColorMode, RenderConfig, TerminalCaps, Theme};

use crate::input::SourceSpec;
use crate::run::Options;

/// Print files with syntax colors, line numbers and an info header.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "huecat", author, version, about, long_about = None)]
#[allow(
    clippy::struct_excessive_bools,
    reason = "CLI flags are independent on/off switches"
)]
pub struct Args {
    /// Files to print; none or `-` reads stdin
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Number output lines
    #[arg(short = 'n', long)]
    pub number: bool,

    /// Show an info header with the name and size
    #[arg(short = 'i', long)]
    pub info: bool,

    /// Show a marker at the end of each source
    #[arg(short = 'e', long)]
    pub show_end: bool,

    /// Decorate with ASCII characters only
    #[arg(short = 'a', long)]
    pub ascii: bool,

    /// When to use colors
    #[arg(long, value_enum, value_name = "WHEN", default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Same as `--color never`
    #[arg(long)]
    pub no_color: bool,

    /// Lexical rules used to classify the input
    #[arg(long, value_enum, value_name = "NAME", default_value_t = GrammarName::Json)]
    pub grammar: GrammarName,

    /// Print the token stream instead of the decorated source
    #[arg(long)]
    pub tokens: bool,
}

/// `--color` values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => ColorMode::Auto,
            ColorChoice::Always => ColorMode::Always,
            ColorChoice::Never => ColorMode::Never,
        }
    }
}

/// `--grammar` values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum GrammarName {
    #[default]
    Json,
    Basic,
}

impl GrammarName {
    pub fn grammar(self) -> Grammar {
        match self {
            GrammarName::Json => Grammar::JSON,
            GrammarName::Basic => Grammar::BASIC,
        }
    }
}

impl Args {
    /// Effective color mode. `--no-color` wins, then `NO_COLOR` turns
    /// `auto` into `never`.
    pub fn color_mode(&self, no_color_env: bool) -> ColorMode {
        if self.no_color {
            return ColorMode::Never;
        }
        match self.color {
            ColorChoice::Auto if no_color_env => ColorMode::Never,
            choice => choice.into(),
        }
    }

    /// Resolve the display options against the probed sink.
    pub fn render_config(&self, caps: TerminalCaps, no_color_env: bool) -> RenderConfig {
        RenderConfig::plain()
            .with_line_numbers(self.number)
            .with_header(self.info)
            .with_end_marker(self.show_end)
            .with_ascii_only(self.ascii)
            .for_terminal(self.color_mode(no_color_env), caps)
    }

    /// Everything [`crate::run_sources`] needs besides the sources.
    pub fn options(&self, caps: TerminalCaps, no_color_env: bool) -> Options {
        Options {
            config: self.render_config(caps, no_color_env),
            theme: Theme::default(),
            grammar: self.grammar.grammar(),
            limit: DEFAULT_CAPACITY,
            dump_tokens: self.tokens,
        }
    }

    /// Sources in command-line order; stdin when no file is named.
    pub fn sources(&self) -> Vec<SourceSpec> {
        if self.files.is_empty() {
            return vec![SourceSpec::Stdin];
        }
        self.files
            .iter()
            .map(|path| {
                if path.as_os_str() == "-" {
                    SourceSpec::Stdin
                } else {
                    SourceSpec::File(path.clone())
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests;
