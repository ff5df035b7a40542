//! Probing what stdout can display.

use std::ffi::OsStr;
use std::io::IsTerminal;

use hue_render::TerminalCaps;

/// Probe stdout and the environment.
pub fn probe_stdout() -> TerminalCaps {
    let term = std::env::var("TERM").ok();
    TerminalCaps {
        is_tty: std::io::stdout().is_terminal(),
        ansi: term_supports_ansi(term.as_deref()),
    }
}

/// A missing `TERM` is treated as capable; only `dumb` is not.
pub fn term_supports_ansi(term: Option<&str>) -> bool {
    term != Some("dumb")
}

/// `NO_COLOR` counts only when set to a non-empty value.
pub fn no_color_requested(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
