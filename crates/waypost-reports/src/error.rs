//! Error types for waypost-reports.

use thiserror::Error;

/// Result type alias for report rendering.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering a report document.
///
/// Backend errors are carried as messages so the rendering libraries stay
/// out of the public API.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The PDF backend failed.
    #[error("PDF rendering error: {message}")]
    Pdf {
        /// What went wrong
        message: String,
    },

    /// The XLSX backend failed.
    #[error("XLSX rendering error: {message}")]
    Xlsx {
        /// What went wrong
        message: String,
    },

    /// I/O error while writing a rendered document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a new PDF rendering error.
    pub fn pdf<S: Into<String>>(message: S) -> Self {
        Error::Pdf {
            message: message.into(),
        }
    }

    /// Creates a new XLSX rendering error.
    pub fn xlsx<S: Into<String>>(message: S) -> Self {
        Error::Xlsx {
            message: message.into(),
        }
    }
}
