//! Error handling module for the pasct CLI.
//!
//! Lexical problems are not errors here: they end up in the report. These
//! are the failures that stop a command.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the pasct CLI application.
#[derive(Error, Debug)]
pub enum PasctError {
    /// The configuration file is missing, unreadable or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading or writing a named file failed.
    #[error("File operation failed: {path}: {source}")]
    FileOperation {
        /// The file involved
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The input holds no source text.
    #[error("No source to analyze: {0} is empty")]
    EmptySource(String),

    /// A file would be overwritten without `--force`.
    #[error("{} already exists (use --force to overwrite)", .0.display())]
    OutputExists(PathBuf),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PasctError {
    /// Wraps an IO error with the path it happened on.
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PasctError::FileOperation {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using PasctError.
pub type Result<T> = std::result::Result<T, PasctError>;
