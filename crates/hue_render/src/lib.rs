//! Render pipeline for huecat.
//!
//! Consumes the token stream produced by `hue_lexer_core` and writes the
//! decorated form of a source: optional info header, syntax colors,
//! line-number gutters, optional end marker and a final color reset.
//!
//! The pipeline writes to an injected [`std::io::Write`] and owns no other
//! resources, so it renders into a `Vec<u8>` as easily as into stdout.

mod config;
mod glyphs;
mod header;
mod render;
mod theme;

pub use config::{ColorMode, RenderConfig, TerminalCaps};
pub use glyphs::Glyphs;
pub use header::{format_size, HeaderBox};
pub use render::{gutter_width, render, Renderer};
pub use theme::{Color, Theme, RESET};
