//! Display options for one invocation.

/// Color output mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// For `Auto` mode, `interactive` determines whether colors should be
    /// used. It is ignored for `Always` and `Never`.
    pub fn should_use_colors(self, interactive: bool) -> bool {
        match self {
            ColorMode::Auto => interactive,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// What the output sink can display, as reported by the caller's probe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TerminalCaps {
    /// The sink is an interactive terminal.
    pub is_tty: bool,
    /// The terminal understands ANSI escapes.
    pub ansi: bool,
}

impl TerminalCaps {
    /// An ANSI-capable interactive terminal.
    pub const INTERACTIVE: TerminalCaps = TerminalCaps {
        is_tty: true,
        ansi: true,
    };

    /// A file or pipe.
    pub const REDIRECTED: TerminalCaps = TerminalCaps {
        is_tty: false,
        ansi: false,
    };

    pub fn is_interactive(self) -> bool {
        self.is_tty && self.ansi
    }
}

/// Immutable snapshot of display options.
///
/// Built once per invocation and never mutated while rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(
    clippy::struct_excessive_bools,
    reason = "independent on/off display switches"
)]
pub struct RenderConfig {
    pub show_line_numbers: bool,
    pub ascii_only: bool,
    pub color_enabled: bool,
    pub show_end_marker: bool,
    pub show_header: bool,
}

impl RenderConfig {
    /// No decoration at all: output is byte-identical to input.
    pub const fn plain() -> Self {
        RenderConfig {
            show_line_numbers: false,
            ascii_only: false,
            color_enabled: false,
            show_end_marker: false,
            show_header: false,
        }
    }

    #[must_use]
    pub const fn with_line_numbers(mut self, on: bool) -> Self {
        self.show_line_numbers = on;
        self
    }

    #[must_use]
    pub const fn with_ascii_only(mut self, on: bool) -> Self {
        self.ascii_only = on;
        self
    }

    #[must_use]
    pub const fn with_color(mut self, on: bool) -> Self {
        self.color_enabled = on;
        self
    }

    #[must_use]
    pub const fn with_end_marker(mut self, on: bool) -> Self {
        self.show_end_marker = on;
        self
    }

    #[must_use]
    pub const fn with_header(mut self, on: bool) -> Self {
        self.show_header = on;
        self
    }

    /// Apply the color mode against what the sink can display.
    ///
    /// Under [`ColorMode::Auto`], a sink that is not an ANSI-capable
    /// terminal forces `color_enabled = false` and `ascii_only = true`.
    /// Explicit modes only decide color and leave `ascii_only` alone.
    #[must_use]
    pub fn for_terminal(mut self, mode: ColorMode, caps: TerminalCaps) -> Self {
        let interactive = caps.is_interactive();
        self.color_enabled = mode.should_use_colors(interactive);
        if mode == ColorMode::Auto && !interactive {
            self.ascii_only = true;
        }
        tracing::trace!(?mode, ?caps, config = ?self, "resolved render config");
        self
    }
}
