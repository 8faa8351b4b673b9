//! Moderator role guard middleware.
//!
//! This middleware checks that the authenticated caller carries the
//! `ROLE_MODERATOR` role before allowing access to user-management endpoints.

use crate::error::ApiUsersError;
use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use roster_auth::AuthorizedPrincipal;

/// Required role for user-management operations.
pub const MODERATOR_ROLE: &str = "ROLE_MODERATOR";

/// Middleware that requires the authenticated caller to have `ROLE_MODERATOR`.
///
/// This middleware extracts `AuthorizedPrincipal` from request extensions and
/// verifies the caller has the moderator role. If the principal is missing
/// (not authenticated) or lacks the role, an appropriate error is returned.
///
/// # Usage
///
/// ```rust,ignore
/// use axum::{Router, routing::post, middleware};
/// use roster_api_users::middleware::moderator_guard;
///
/// let router = Router::new()
///     .route("/users", post(create_user))
///     .layer(middleware::from_fn(moderator_guard));
/// ```
///
/// # Requirements
///
/// A prior authentication middleware must have inserted `AuthorizedPrincipal`
/// into the request extensions. If no principal is found, it returns 401.
///
/// # Errors
///
/// - `ApiUsersError::Unauthorized` (401): No principal in request extensions
/// - `ApiUsersError::Forbidden` (403): Caller lacks `ROLE_MODERATOR`
pub async fn moderator_guard(
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiUsersError> {
    // Extract the authenticated principal from extensions
    let principal = request
        .extensions()
        .get::<AuthorizedPrincipal>()
        .ok_or(ApiUsersError::Unauthorized)?;

    if !principal.has_role(MODERATOR_ROLE) {
        tracing::warn!(
            subject = %principal.subject,
            roles = ?principal.roles,
            "Access denied: moderator role required"
        );
        return Err(ApiUsersError::Forbidden);
    }

    tracing::debug!(
        subject = %principal.subject,
        "Moderator access granted"
    );

    Ok(next.run(request).await)
}
