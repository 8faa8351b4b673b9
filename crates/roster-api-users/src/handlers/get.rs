//! Get user endpoint handler.
//!
//! GET /users/{id} - Fetch a user's profile from the external directory.

use crate::error::ApiUsersError;
use crate::models::UserProfileResponse;
use axum::{extract::Path, Extension, Json};
use roster_directory::DirectoryClient;
use std::sync::Arc;
use uuid::Uuid;

/// Fetches a user's profile, combining directory attributes and realm roles.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = String, Path, description = "User id (UUID)"),
    ),
    responses(
        (status = 200, description = "User profile", body = UserProfileResponse),
        (status = 400, description = "Malformed user id"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not authorized"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Directory operation failed"),
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn get_user_handler(
    Extension(directory): Extension<Arc<DirectoryClient>>,
    Path(id): Path<String>,
) -> Result<Json<UserProfileResponse>, ApiUsersError> {
    let user_id = Uuid::parse_str(&id).map_err(|_| ApiUsersError::InvalidUserId(id))?;

    tracing::debug!(user_id = %user_id, "Fetching user profile");

    let profile = directory.get_user(user_id).await?;

    Ok(Json(UserProfileResponse::from(profile)))
}
