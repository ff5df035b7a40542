//! Errors surfaced by the command-line front end.

use std::io;

use hue_lexer_core::CapacityError;
use thiserror::Error;

/// Everything that can go wrong while loading or printing a source.
///
/// Load failures (`Open`, `Read`, `TooLarge`) are per source: the run
/// reports them and moves on. `Write` aborts the whole run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{name}: {source}")]
    Open { name: String, source: io::Error },

    #[error("{name}: read failed: {source}")]
    Read { name: String, source: io::Error },

    #[error("{name}: {source}")]
    TooLarge {
        name: String,
        source: CapacityError,
    },

    #[error("write failed: {0}")]
    Write(#[from] io::Error),
}

impl Error {
    /// The output side hung up, e.g. `huecat big.json | head`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Error::Write(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }

    /// Whether the run can continue with the next source.
    pub fn is_per_source(&self) -> bool {
        !matches!(self, Error::Write(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn broken_pipe_only_on_write() {
        let pipe = || io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        assert!(Error::Write(pipe()).is_broken_pipe());
        assert!(!Error::Read {
            name: "a".into(),
            source: pipe()
        }
        .is_broken_pipe());
        assert!(!Error::Write(io::Error::other("disk full")).is_broken_pipe());
    }

    #[test]
    fn messages_lead_with_the_source_name() {
        let err = Error::TooLarge {
            name: "huge.bin".into(),
            source: CapacityError { len: 10, limit: 4 },
        };
        assert_eq!(
            err.to_string(),
            "huge.bin: input too large: 10 bytes exceeds the limit of 4 bytes"
        );
        assert!(err.is_per_source());

        let err = Error::Open {
            name: "missing.json".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(err.to_string(), "missing.json: No such file or directory");
    }
}
