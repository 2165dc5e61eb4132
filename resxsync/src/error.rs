//! All error types for the resxsync crate.
//!
//! These are returned from all fallible operations (extraction, synthesis,
//! file synchronization).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// An input path does not exist. Reported before any extraction runs.
    #[error("file not found: {}", .0.display())]
    MissingArtifact(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The generated file does not end in the expected two nested closing
    /// braces, so no safe insertion point exists. The file is left untouched.
    #[error("invalid generated file: {0}")]
    Structure(String),
}

impl Error {
    /// Creates a new structure error
    pub fn structure_error(message: impl Into<String>) -> Self {
        Error::Structure(message.into())
    }
}
