//! Roster User Management API
//!
//! A Rust-based user management service built with Axum. Proxies user
//! creation and profile reads to the identity directory, with bearer
//! token authentication and moderator role authorization.

mod config;
mod health;
mod logging;
mod openapi;

use axum::{routing::get, Router};
use config::Config;
use health::health_handler;
use openapi::openapi_routes;
use roster_api_users::middleware::{bearer_auth_middleware, JwtIssuer, JwtPublicKey};
use roster_api_users::{users_router, UsersState};
use roster_directory::auth::{DirectoryAuth, DirectoryCredentials};
use roster_directory::DirectoryClient;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

#[tokio::main]
async fn main() {
    // Load configuration (fail-fast on missing required values)
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Initialize logging
    logging::init_logging(&config.rust_log);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.host,
        port = config.port,
        directory_url = %config.directory_url,
        directory_realm = %config.directory_realm,
        "Starting roster API"
    );

    // Directory client with a service account that authenticates through
    // the client credentials grant
    let directory_auth = DirectoryAuth::new(
        DirectoryCredentials::ClientCredentials {
            client_id: config.directory_client_id.clone(),
            client_secret: config.directory_client_secret.clone(),
            token_endpoint: config.token_endpoint(),
        },
        reqwest::Client::new(),
    );

    let directory = match DirectoryClient::new(
        config.directory_url.clone(),
        config.directory_realm.clone(),
        directory_auth,
        Duration::from_secs(config.directory_timeout_secs),
    ) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to build directory client: {e}");
            std::process::exit(1);
        }
    };

    let cors = build_cors_layer(&config.cors_origins);

    // Build users routes
    // The users_router requires bearer authentication with the moderator role
    let users_state = UsersState::new(directory);
    let users_routes = users_router(users_state)
        .layer(axum::middleware::from_fn(bearer_auth_middleware))
        .layer(axum::Extension(JwtPublicKey(config.jwt_public_key.clone())))
        .layer(axum::Extension(JwtIssuer(config.jwt_issuer.clone())));

    let app = Router::new()
        .route("/health", get(health_handler))
        .merge(openapi_routes())
        .nest("/users", users_routes)
        .layer(cors);

    // Bind and serve
    let addr: SocketAddr = match config.bind_addr().parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!("Invalid bind address '{}': {e}", config.bind_addr());
            std::process::exit(1);
        }
    };

    info!(%addr, "Server listening");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to address {addr}: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    info!("Server shutdown complete");
}

/// Build CORS layer from configured origins.
///
/// When explicit origins are configured (non-wildcard), enables
/// `allow_credentials(true)` for cookie/auth header support.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    use tower_http::cors::AllowOrigin;

    let is_wildcard = origins.len() == 1 && origins[0] == "*";

    let allow_origin = if is_wildcard {
        AllowOrigin::any()
    } else {
        // Use a predicate so rejected origins are logged
        let allowed: Vec<axum::http::HeaderValue> =
            origins.iter().filter_map(|o| o.parse().ok()).collect();
        AllowOrigin::predicate(
            move |origin: &axum::http::HeaderValue, _req: &axum::http::request::Parts| {
                let is_allowed = allowed.contains(origin);
                if !is_allowed {
                    let origin_str = origin.to_str().unwrap_or("<non-utf8>");
                    tracing::warn!(
                        target: "security",
                        origin = %origin_str,
                        "CORS origin rejected"
                    );
                }
                is_allowed
            },
        )
    };

    let mut layer = CorsLayer::new()
        .allow_origin(allow_origin)
        .max_age(Duration::from_secs(3600));

    // Only enable credentials for non-wildcard origins (browser requirement).
    // When credentials are enabled, `Any` cannot be used for headers or methods
    // per the CORS spec, so explicitly list the ones clients need.
    if is_wildcard {
        layer = layer.allow_methods(Any).allow_headers(Any);
    } else {
        use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, ORIGIN};
        use axum::http::Method;
        layer = layer
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT, ORIGIN])
            .allow_credentials(true);
    }

    layer
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {e}");
                // Fall through - we still want to wait for terminate signal
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                // Wait forever if we can't install the handler
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
