//! Artifact output port.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while writing generated artifacts.
#[derive(Debug, Error)]
pub enum ArtifactSinkError {
    /// The destination or one of its parents could not be created or written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Port for persisting generated text.
pub trait ArtifactSink {
    /// Writes `contents` to `path`, creating parent directories on demand.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or the file cannot be written.
    fn write(&self, path: &Path, contents: &str) -> Result<(), ArtifactSinkError>;
}
