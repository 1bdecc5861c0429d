//! Error types for waypost-core.

use thiserror::Error;

/// Result type alias for waypost-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the Waypost foundation crate.
///
/// Marked `#[non_exhaustive]` so new variants can be added without
/// breaking downstream crates.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Configuration error (missing file, bad key, unusable platform dir).
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// A value could not be parsed into the expected shape.
    #[error("Parse error: {message}")]
    Parse {
        /// What went wrong
        message: String,
    },

    /// Input failed a local validity check before any request was made.
    #[error("Validation error: {message}")]
    Validation {
        /// Field or aspect that failed validation
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// I/O error (config files, token file, report output).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error for a named field.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }
}
