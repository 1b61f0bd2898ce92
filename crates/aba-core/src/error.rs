//! Centralized error types for ABA.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ABA operations.
#[derive(Error, Debug)]
pub enum AbaError {
    #[error("No such file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Server returned {status}: {body}")]
    Server { status: u16, body: String },

    #[error("An analysis is already in flight")]
    Busy,

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for ABA operations.
pub type AbaResult<T> = Result<T, AbaError>;

impl AbaError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
