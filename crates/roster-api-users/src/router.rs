//! Users API router configuration.
//!
//! Configures routes for user-management endpoints:
//! - POST /users - Create a new user in the directory
//! - GET /users/:id - Get a user's profile
//! - GET /users/hello - Return the caller's subject identifier

use crate::handlers::{create_user_handler, get_user_handler, hello_handler};
use crate::middleware::moderator_guard;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use roster_directory::DirectoryClient;
use std::sync::Arc;

/// Application state for user-management routes.
#[derive(Clone)]
pub struct UsersState {
    /// Shared client for the external directory.
    pub directory: Arc<DirectoryClient>,
}

impl UsersState {
    /// Create a new users state.
    pub fn new(directory: DirectoryClient) -> Self {
        Self {
            directory: Arc::new(directory),
        }
    }
}

/// Create the users router with all endpoints.
///
/// # Endpoints
///
/// All endpoints require authentication with the `ROLE_MODERATOR` role.
///
/// - `POST /users` - Create a new user
/// - `GET /users/:id` - Get a user's profile
/// - `GET /users/hello` - Return the caller's subject identifier
///
/// # Arguments
///
/// * `state` - The users state containing the directory client
///
/// # Returns
///
/// A configured Axum router for the `/users` prefix. The caller must layer
/// an authentication middleware that inserts `AuthorizedPrincipal` into
/// request extensions before this router's guard runs.
pub fn users_router(state: UsersState) -> Router {
    Router::new()
        // IMPORTANT: Register /hello BEFORE /:id to prevent path capture
        .route("/hello", get(hello_handler))
        .route("/", post(create_user_handler))
        .route("/:id", get(get_user_handler))
        // Moderator guard requires ROLE_MODERATOR on the authenticated principal
        .layer(middleware::from_fn(moderator_guard))
        .layer(axum::Extension(state.directory))
}
