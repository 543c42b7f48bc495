//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Missing or invalid configuration
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
    },

    /// Malformed caller-supplied content
    #[error("{message}")]
    ValidationError {
        message: String,
    },

    /// Remote answered 2xx but returned no translations
    #[error("No translations returned from DeepL.")]
    EmptyResultError,

    /// API request failed with a non-success status
    #[error("API error: {status} - {message}")]
    ApiError {
        status: u16,
        message: String,
    },

    /// Network error
    #[error("Network error: {message}")]
    NetworkError {
        message: String,
    },

    /// Invalid response from API
    #[error("Invalid response: {message}")]
    InvalidResponseError {
        message: String,
    },
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
