//! Error types for the users API.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_directory::DirectoryClientError;

use crate::validation::ValidationError;

/// Error type for the users API.
#[derive(Debug, thiserror::Error)]
pub enum ApiUsersError {
    /// One or more request fields failed validation.
    #[error("Validation failed")]
    ValidationFailed {
        /// Individual field validation errors.
        errors: Vec<ValidationError>,
    },

    /// The path segment could not be parsed as a UUID.
    #[error("Invalid user id: {0}")]
    InvalidUserId(String),

    /// Authentication required.
    #[error("Authentication required")]
    Unauthorized,

    /// Moderator role required.
    #[error("Moderator role required")]
    Forbidden,

    /// The requested user does not exist in the directory.
    #[error("User not found")]
    UserNotFound,

    /// A user with the requested username already exists.
    #[error("Username already exists")]
    UsernameConflict,

    /// Directory operation failed with a carried status and message.
    #[error("Directory operation failed (status {status}): {message}")]
    Directory {
        /// HTTP status to surface to the caller.
        status: u16,
        /// User-facing failure message.
        message: String,
    },
}

impl From<DirectoryClientError> for ApiUsersError {
    fn from(err: DirectoryClientError) -> Self {
        match err {
            DirectoryClientError::NotFound(_) => ApiUsersError::UserNotFound,
            DirectoryClientError::Conflict(_) => ApiUsersError::UsernameConflict,
            DirectoryClientError::DirectoryError { status, detail } => ApiUsersError::Directory {
                status,
                message: detail,
            },
            other => ApiUsersError::Directory {
                status: 500,
                message: other.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiUsersError {
    fn into_response(self) -> Response {
        match self {
            ApiUsersError::ValidationFailed { errors } => {
                let violations: BTreeMap<String, String> = errors
                    .into_iter()
                    .map(|e| (e.field, e.message))
                    .collect();
                (StatusCode::BAD_REQUEST, Json(violations)).into_response()
            }
            ApiUsersError::InvalidUserId(id) => {
                (StatusCode::BAD_REQUEST, format!("Invalid user id: {id}")).into_response()
            }
            ApiUsersError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "Authentication required").into_response()
            }
            ApiUsersError::Forbidden => {
                (StatusCode::FORBIDDEN, "Moderator role required").into_response()
            }
            ApiUsersError::UserNotFound => {
                (StatusCode::NOT_FOUND, "User not found").into_response()
            }
            ApiUsersError::UsernameConflict => {
                (StatusCode::CONFLICT, "Username already exists").into_response()
            }
            ApiUsersError::Directory { status, message } => {
                tracing::error!("Directory operation failed (status {}): {}", status, message);
                let status =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, message).into_response()
            }
        }
    }
}
