//! Error types for rendering and configuration.
//!
//! Rendering failures are split by where they happen so callers can tell a
//! missing pipe apart from a pager that would not start:
//!
//! - `Pipe`: the byte pipe to the pager could not be created
//! - `Spawn`: the pager process could not be launched
//! - `Io`: writing rendered output failed for a reason other than the reader
//!   going away
//! - `MissingVerse` / `MissingBook`: the corpus yielded an index it cannot
//!   resolve
//!
//! An empty result is not an error; see [`crate::render::RenderStatus`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by a render call.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The pipe feeding the pager could not be established
    #[error("unable to create pager pipe: {0}")]
    Pipe(#[source] io::Error),

    /// The pager process could not be launched
    #[error("unable to launch pager `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Writing to the output stream failed
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The corpus yielded a verse index it has no verse for
    #[error("corpus has no verse at index {0}")]
    MissingVerse(usize),

    /// A verse refers to a book the corpus does not know
    #[error("corpus has no book numbered {0}")]
    MissingBook(u32),
}

impl RenderError {
    /// Create a spawn error for the given pager program
    pub fn spawn(program: impl Into<String>, source: io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            source,
        }
    }
}

/// Errors raised while loading or validating configuration and corpus files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A TOML configuration file is malformed
    #[error("failed to parse {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A JSON corpus file is malformed
    #[error("failed to parse corpus {path}: {source}")]
    Corpus {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// Result alias for render operations
pub type Result<T> = std::result::Result<T, RenderError>;
