//! Create user endpoint handler.
//!
//! POST /users - Create a new user account in the external directory.

use crate::error::ApiUsersError;
use crate::models::CreateUserRequest;
use crate::validation::validate_create_user;
use axum::{http::StatusCode, Extension, Json};
use roster_auth::AuthorizedPrincipal;
use roster_directory::models::NewDirectoryUser;
use roster_directory::DirectoryClient;
use std::sync::Arc;

/// Creates a new user account in the directory realm.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created"),
        (status = 400, description = "Validation error (field to message map)"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not authorized"),
        (status = 409, description = "Username already exists"),
        (status = 500, description = "Directory operation failed"),
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn create_user_handler(
    Extension(principal): Extension<AuthorizedPrincipal>,
    Extension(directory): Extension<Arc<DirectoryClient>>,
    Json(request): Json<CreateUserRequest>,
) -> Result<StatusCode, ApiUsersError> {
    if let Err(errors) = validate_create_user(&request) {
        return Err(ApiUsersError::ValidationFailed { errors });
    }

    tracing::info!(
        moderator = %principal.subject,
        username = %request.username,
        "Creating user"
    );

    let new_user = NewDirectoryUser::new(
        request.username,
        request.email,
        request.password,
        request.first_name,
        request.last_name,
    );

    directory.create_user(&new_user).await?;

    Ok(StatusCode::OK)
}
