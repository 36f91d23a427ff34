use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[cfg(feature = "form")]
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Terminal I/O failed: {0}")]
    Prompt(std::io::Error),

    #[error("Invalid timestamp \"{input}\" (expected ISO 8601, e.g. 2024-01-15T10:30:00Z)")]
    InvalidTimestamp { input: String },
}
