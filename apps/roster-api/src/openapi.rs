//! `OpenAPI` documentation for the roster API.
//!
//! This module sets up utoipa for `OpenAPI` spec generation. The generated
//! document is served as plain JSON at `/api-doc/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::health::HealthResponse;

/// Security scheme modifier for Bearer authentication.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// `OpenAPI` documentation for the roster API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "roster API",
        version = "0.1.0",
        description = "User management API over the identity directory"
    ),
    servers(
        (url = "http://localhost:8080", description = "Development server")
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service health and status"),
        (name = "Users", description = "User management")
    ),
    paths(
        crate::health::health_handler,
        roster_api_users::handlers::create::create_user_handler,
        roster_api_users::handlers::get::get_user_handler,
        roster_api_users::handlers::hello::hello_handler,
    ),
    components(schemas(
        HealthResponse,
        roster_api_users::models::CreateUserRequest,
        roster_api_users::models::UserProfileResponse,
    ))
)]
pub struct ApiDoc;

/// Create the `OpenAPI` document route.
pub fn openapi_routes() -> Router {
    Router::new().route(
        "/api-doc/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}
