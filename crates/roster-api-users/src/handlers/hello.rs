//! Hello endpoint handler.
//!
//! GET /users/hello - Returns the authenticated caller's subject identifier.

use axum::Extension;
use roster_auth::AuthorizedPrincipal;

/// Returns the caller's subject identifier as plain text.
#[utoipa::path(
    get,
    path = "/users/hello",
    responses(
        (status = 200, description = "Caller's subject identifier", body = String),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not authorized"),
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn hello_handler(Extension(principal): Extension<AuthorizedPrincipal>) -> String {
    principal.subject
}
