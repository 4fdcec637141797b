//! Error types for directory loading and the C ABI.
//!
//! Mention expansion and formatting never fail; only the edges that read
//! external input do.

use thiserror::Error;

/// Errors that can occur outside the text transforms.
#[derive(Debug, Error)]
pub enum MentionsError {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input that is not valid for the requested operation
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, MentionsError>;
