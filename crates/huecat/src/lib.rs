//! huecat: print files with syntax colors, line numbers and an info header.
//!
//! The binary is a thin shell over this library. [`Args`] resolves the
//! command line into [`Options`], [`load`] turns each [`SourceSpec`] into a
//! [`Source`], and [`run_sources`] scans and renders them one after another
//! into an injected writer.

mod args;
mod error;
mod input;
mod run;
mod terminal;

use std::sync::Once;

pub use args::{Args, ColorChoice, GrammarName};
pub use error::Error;
pub use input::{load, read_source, Source, SourceSpec, STDIN_NAME};
pub use run::{dump_tokens, run_sources, Options, Summary};
pub use terminal::{no_color_requested, probe_stdout, term_supports_ansi};

static TRACING_INIT: Once = Once::new();

/// Environment variable holding the log filter; `RUST_LOG` is the fallback.
pub const LOG_ENV: &str = "HUECAT_LOG";

/// Initialize tracing for diagnostic output on stderr.
///
/// Safe to call multiple times. Nothing is installed unless `HUECAT_LOG`
/// or `RUST_LOG` is set, e.g. `HUECAT_LOG=hue_render=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Some(directives) = std::env::var(LOG_ENV)
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
        else {
            return;
        };

        let filter = EnvFilter::new(directives);
        // Another subscriber may already be installed by an embedding program.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .try_init();
    });
}
