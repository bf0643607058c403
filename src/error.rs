//! Error types for the Reword library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`RewordError`] enum. Per-token lookups inside the pipeline never fail;
//! errors surface only while collaborators are being initialized or while
//! input and configuration are read.
//!
//! # Examples
//!
//! ```
//! use reword::error::{RewordError, Result};
//!
//! fn open_lexicon() -> Result<()> {
//!     Err(RewordError::lexicon("index.noun is missing"))
//! }
//!
//! assert_eq!(
//!     open_lexicon().unwrap_err().to_string(),
//!     "Lexicon error: index.noun is missing"
//! );
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Reword operations.
#[derive(Error, Debug)]
pub enum RewordError {
    /// I/O errors (reading input text, lexicon files, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Lexical database errors (missing or malformed dictionary files)
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Analysis errors (tokenization, tagging)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with RewordError.
pub type Result<T> = std::result::Result<T, RewordError>;

impl RewordError {
    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        RewordError::Lexicon(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        RewordError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        RewordError::Analysis(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        RewordError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = RewordError::lexicon("missing data.noun");
        assert_eq!(error.to_string(), "Lexicon error: missing data.noun");

        let error = RewordError::config("empty sentinel");
        assert_eq!(error.to_string(), "Config error: empty sentinel");

        let error = RewordError::analysis("bad token");
        assert_eq!(error.to_string(), "Analysis error: bad token");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let reword_error = RewordError::from(io_error);

        match reword_error {
            RewordError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
