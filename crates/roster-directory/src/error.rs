//! Error types for directory admin API operations.

use thiserror::Error;

/// Result alias for directory client operations.
pub type DirectoryClientResult<T> = Result<T, DirectoryClientError>;

/// Errors surfaced by [`crate::client::DirectoryClient`].
///
/// Every failure mode of a directory call collapses into one of these
/// variants so callers can map directory outcomes to HTTP responses without
/// inspecting `reqwest` internals.
#[derive(Debug, Error)]
pub enum DirectoryClientError {
    /// The directory reported 404 for the requested resource.
    #[error("not found: {0}")]
    NotFound(String),

    /// The directory reported 409, e.g. a duplicate username on create.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Authentication against the directory failed (bad service-account
    /// credentials, or the directory rejected our token with 401).
    #[error("authentication failed: {0}")]
    AuthError(String),

    /// Any other non-success status from the directory, carrying the status
    /// code and the response body as detail.
    #[error("directory error (status {status}): {detail}")]
    DirectoryError { status: u16, detail: String },

    /// A success response whose body could not be deserialized.
    #[error("parse error: {0}")]
    ParseError(String),

    /// Transport-level failure (connection refused, timeout, TLS).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The client could not be constructed from the given configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DirectoryClientError {
    /// Status code carried by this error, when the directory assigned one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound(_) => Some(404),
            Self::Conflict(_) => Some(409),
            Self::DirectoryError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
