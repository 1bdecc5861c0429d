//! Error types for waypost-client.

use thiserror::Error;

/// Result type alias for waypost-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the backend.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from the Waypost foundation crate.
    #[error(transparent)]
    Core(#[from] waypost_core::Error),

    /// Transport-level HTTP error (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No bearer token is held; the request was refused before any
    /// network I/O.
    #[error("not signed in: no bearer token is available")]
    Unauthenticated,

    /// The backend rejected the token (401). The session has already been
    /// revoked by the time this error is returned.
    #[error("session revoked: sign in again")]
    SessionRevoked,

    /// The backend answered with a non-2xx status.
    #[error("request failed ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The server's `message` field when present, else a generic text.
        message: String,
    },
}

impl Error {
    /// Creates an API failure error.
    pub fn api<S: Into<String>>(status: u16, message: S) -> Self {
        Error::Api {
            status,
            message: message.into(),
        }
    }

    /// Whether the caller should route the user to sign-in.
    pub fn requires_sign_in(&self) -> bool {
        matches!(self, Error::Unauthenticated | Error::SessionRevoked)
    }
}
