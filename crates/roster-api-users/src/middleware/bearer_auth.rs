//! Bearer token authentication middleware.
//!
//! Extracts and validates JWT tokens from the Authorization header, then
//! inserts `TokenClaims` and `AuthorizedPrincipal` into request extensions.

use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use roster_auth::{decode_token_with_config, AuthorizedPrincipal, ValidationConfig};

/// Bearer token authentication middleware.
///
/// This middleware:
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Decodes and validates the JWT against the configured public key
/// 3. Inserts `TokenClaims` and `AuthorizedPrincipal` into request extensions
///
/// # Usage
///
/// ```rust,ignore
/// use axum::{middleware, Extension, Router};
/// use roster_api_users::middleware::{bearer_auth_middleware, JwtPublicKey};
///
/// let router: Router = users_router(state)
///     .layer(middleware::from_fn(bearer_auth_middleware))
///     .layer(Extension(JwtPublicKey(public_key_pem)));
/// ```
pub async fn bearer_auth_middleware(
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    // Get the JWT public key from extensions
    let public_key = request
        .extensions()
        .get::<JwtPublicKey>()
        .ok_or_else(|| {
            tracing::error!("JWT public key not configured");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server configuration error",
            )
                .into_response()
        })?
        .0
        .clone();

    // Expected issuer, if the application pinned one
    let expected_issuer: Option<String> = request
        .extensions()
        .get::<JwtIssuer>()
        .and_then(|i| i.0.clone());

    // Extract Bearer token from Authorization header
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            (StatusCode::UNAUTHORIZED, "Missing Authorization header").into_response()
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        (
            StatusCode::UNAUTHORIZED,
            "Invalid Authorization header format",
        )
            .into_response()
    })?;

    // SECURITY: Reject empty bearer tokens before attempting JWT decode.
    if token.is_empty() {
        tracing::warn!("Rejected empty bearer token");
        return Err((StatusCode::UNAUTHORIZED, "Empty bearer token").into_response());
    }

    let mut config = ValidationConfig::default();
    if let Some(issuer) = expected_issuer {
        config = config.issuer(issuer);
    }

    // Decode and validate JWT
    let claims = decode_token_with_config(token, public_key.as_bytes(), &config).map_err(|e| {
        tracing::warn!("JWT validation failed: {}", e);
        (StatusCode::UNAUTHORIZED, "Invalid or expired token").into_response()
    })?;

    // Derive the authorization principal once per request
    let principal = AuthorizedPrincipal::from_claims(&claims);

    request.extensions_mut().insert(claims);
    request.extensions_mut().insert(principal);

    Ok(next.run(request).await)
}

/// Wrapper for the JWT public key to allow putting it in extensions.
#[derive(Clone)]
pub struct JwtPublicKey(pub String);

/// Wrapper for the expected token issuer. `None` skips issuer validation.
#[derive(Clone)]
pub struct JwtIssuer(pub Option<String>);

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{middleware, routing::get, Extension, Router};
    use tower::ServiceExt;

    const TEST_PUBLIC_KEY: &str = "-----BEGIN PUBLIC KEY-----\nnot a real key\n-----END PUBLIC KEY-----";

    async fn probe() -> &'static str {
        "ok"
    }

    fn router_with_key() -> Router {
        Router::new()
            .route("/probe", get(probe))
            .layer(middleware::from_fn(bearer_auth_middleware))
            .layer(Extension(JwtPublicKey(TEST_PUBLIC_KEY.to_string())))
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_public_key_returns_500() {
        let app = Router::new()
            .route("/probe", get(probe))
            .layer(middleware::from_fn(bearer_auth_middleware));

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/probe")
                    .header("Authorization", "Bearer some-token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response).await, "Server configuration error");
    }

    #[tokio::test]
    async fn test_missing_authorization_header_returns_401() {
        let response = router_with_key()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/probe")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_string(response).await, "Missing Authorization header");
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_returns_401() {
        let response = router_with_key()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/probe")
                    .header("Authorization", "Basic dXNlcjpwYXNz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_string(response).await,
            "Invalid Authorization header format"
        );
    }

    #[tokio::test]
    async fn test_empty_bearer_token_returns_401() {
        let response = router_with_key()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/probe")
                    .header("Authorization", "Bearer ")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_string(response).await, "Empty bearer token");
    }

    #[tokio::test]
    async fn test_garbage_token_returns_401() {
        let response = router_with_key()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/probe")
                    .header("Authorization", "Bearer not.a.jwt")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_string(response).await, "Invalid or expired token");
    }
}
