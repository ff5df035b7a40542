//! Turning command-line operands into loaded sources.
//!
//! Every source is read completely into a [`SourceBuffer`] before anything
//! is scanned. Regular files are checked against the capacity cap from
//! their metadata first, so an oversized file is rejected without being
//! read. Streams are read up to one byte past the cap.

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use hue_lexer_core::{check_len, SourceBuffer};

use crate::error::Error;

/// Display name used for standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// One operand from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceSpec {
    Stdin,
    File(PathBuf),
}

impl SourceSpec {
    /// Name shown in the header and in diagnostics.
    pub fn name(&self) -> String {
        match self {
            SourceSpec::Stdin => STDIN_NAME.to_string(),
            SourceSpec::File(path) => path.display().to_string(),
        }
    }
}

/// A loaded source and the name it is displayed under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub buffer: SourceBuffer,
}

impl Source {
    pub fn new(name: impl Into<String>, buffer: SourceBuffer) -> Self {
        Source {
            name: name.into(),
            buffer,
        }
    }
}

/// Load `operand`, refusing anything over `limit` bytes.
pub fn load(operand: &SourceSpec, limit: u64) -> Result<Source, Error> {
    let name = operand.name();
    match operand {
        SourceSpec::Stdin => read_source(name, io::stdin().lock(), limit),
        SourceSpec::File(path) => {
            let file = match File::open(path) {
                Ok(file) => file,
                Err(source) => return Err(Error::Open { name, source }),
            };
            // Pipes and devices report no useful length.
            if let Ok(meta) = file.metadata() {
                if meta.is_file() {
                    if let Err(source) = check_len(meta.len(), limit) {
                        return Err(Error::TooLarge { name, source });
                    }
                }
            }
            read_source(name, file, limit)
        }
    }
}

/// Read `reader` to the end into a source called `name`.
///
/// At most `limit + 1` bytes are read. When the cap is exceeded the reported
/// length is what was read before giving up, not the full stream length.
pub fn read_source<R: Read>(name: String, reader: R, limit: u64) -> Result<Source, Error> {
    let mut bytes = Vec::new();
    if let Err(source) = reader
        .take(limit.saturating_add(1))
        .read_to_end(&mut bytes)
    {
        return Err(Error::Read { name, source });
    }
    match SourceBuffer::with_limit(bytes, limit) {
        Ok(buffer) => {
            tracing::debug!(name = %name, bytes = buffer.len(), "loaded source");
            Ok(Source::new(name, buffer))
        }
        Err(source) => Err(Error::TooLarge { name, source }),
    }
}
