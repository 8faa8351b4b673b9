//! Directory admin API client (reqwest-based).
//!
//! Provides a `DirectoryClient` that performs the realm-scoped admin
//! operations this service needs and maps directory status codes onto
//! [`DirectoryClientError`] variants.

use crate::auth::DirectoryAuth;
use crate::error::{DirectoryClientError, DirectoryClientResult};
use crate::models::{DirectoryUser, DirectoryUserProfile, NewDirectoryUser, RoleMappings};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

/// Admin API client for the identity directory.
///
/// Wraps `reqwest::Client` with directory-specific operations, service
/// account authentication, and error normalization. Cheap to clone; one
/// instance is shared across all request handlers.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    /// Base URL of the directory (e.g., "<https://id.example.com>").
    base_url: String,
    /// Realm whose users this client manages.
    realm: String,
    /// Authentication handler.
    auth: DirectoryAuth,
    /// Underlying HTTP client.
    http_client: Client,
}

impl DirectoryClient {
    /// Create a new directory client.
    pub fn new(
        base_url: String,
        realm: String,
        auth: DirectoryAuth,
        timeout: Duration,
    ) -> DirectoryClientResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent("roster-api/1.0")
            .build()
            .map_err(|e| {
                DirectoryClientError::InvalidConfig(format!("Failed to build HTTP client: {e}"))
            })?;

        // Normalize base URL: strip trailing slash.
        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Self {
            base_url,
            realm,
            auth,
            http_client,
        })
    }

    /// Create a client with a pre-built `reqwest::Client` (for testing).
    #[must_use]
    pub fn with_http_client(
        base_url: String,
        realm: String,
        auth: DirectoryAuth,
        http_client: Client,
    ) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            realm,
            auth,
            http_client,
        }
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── User Operations ───────────────────────────────────────────────

    /// Create a user in the realm (POST /admin/realms/:realm/users).
    ///
    /// The directory signals success with 201 Created and an empty body.
    /// A duplicate username surfaces as [`DirectoryClientError::Conflict`].
    pub async fn create_user(&self, user: &NewDirectoryUser) -> DirectoryClientResult<()> {
        let url = format!("{}/admin/realms/{}/users", self.base_url, self.realm);
        debug!("directory POST {}", url);
        let builder = self.http_client.post(&url);
        let builder = self.auth.apply(builder).await?;
        let response = builder.json(user).send().await?;

        if response.status() == StatusCode::CREATED {
            Ok(())
        } else {
            self.handle_error_response(response).await
        }
    }

    /// Fetch a user's profile (GET /admin/realms/:realm/users/:id) combined
    /// with their realm role mappings
    /// (GET /admin/realms/:realm/users/:id/role-mappings).
    ///
    /// An unknown id surfaces as [`DirectoryClientError::NotFound`].
    pub async fn get_user(&self, id: Uuid) -> DirectoryClientResult<DirectoryUserProfile> {
        let url = format!("{}/admin/realms/{}/users/{}", self.base_url, self.realm, id);
        let user: DirectoryUser = self.get(&url).await?;

        let url = format!(
            "{}/admin/realms/{}/users/{}/role-mappings",
            self.base_url, self.realm, id
        );
        let mappings: RoleMappings = self.get(&url).await?;

        Ok(DirectoryUserProfile::from_parts(user, mappings))
    }

    // ── Internal HTTP Methods ─────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> DirectoryClientResult<T> {
        debug!("directory GET {}", url);
        let builder = self.http_client.get(url);
        let builder = self.auth.apply(builder).await?;
        let response = builder.send().await?;
        self.handle_response(response).await
    }

    // ── Response Handling ─────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> DirectoryClientResult<T> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                DirectoryClientError::ParseError(format!("Failed to parse response: {e}"))
            })
        } else {
            self.handle_error_response(response).await
        }
    }

    async fn handle_error_response<T>(
        &self,
        response: reqwest::Response,
    ) -> DirectoryClientResult<T> {
        let status = response.status();

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<no body>".to_string());

        match status {
            StatusCode::NOT_FOUND => Err(DirectoryClientError::NotFound(body)),
            StatusCode::CONFLICT => Err(DirectoryClientError::Conflict(body)),
            StatusCode::UNAUTHORIZED => {
                // Invalidate cached service-account token on 401.
                self.auth.invalidate_cache().await;
                Err(DirectoryClientError::AuthError(format!(
                    "Authentication failed (401): {body}"
                )))
            }
            _ => {
                let detail = if body.is_empty() {
                    format!("HTTP {status}")
                } else {
                    body
                };
                Err(DirectoryClientError::DirectoryError {
                    status: status.as_u16(),
                    detail,
                })
            }
        }
    }
}
