//! Error types for tokenization and segmentation

use thiserror::Error;

/// Error type for core operations
#[derive(Debug, Error)]
pub enum Error {
    /// Language code is not mapped to any language class
    #[error("language '{code}' not supported")]
    UnsupportedLanguage {
        /// The rejected language code
        code: String,
    },

    /// Configuration error (including pattern compilation)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid input, e.g. bytes that are not UTF-8
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Infrastructure error (I/O while reading input)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::Configuration(format!("invalid token pattern: {err}"))
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
