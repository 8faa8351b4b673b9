//! Directory authentication: static token or `OAuth2` client credentials.

use crate::error::{DirectoryClientError, DirectoryClientResult};
use reqwest::RequestBuilder;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Service-account credentials for the directory admin API.
///
/// The [`Debug`] impl redacts sensitive fields (tokens and secrets) to prevent
/// accidental credential exposure in log output.
#[derive(Clone)]
pub enum DirectoryCredentials {
    /// Static bearer token, used mostly in tests.
    Token { token: String },

    /// `OAuth2` client credentials grant against the realm's token endpoint.
    ClientCredentials {
        client_id: String,
        client_secret: String,
        token_endpoint: String,
    },
}

impl std::fmt::Debug for DirectoryCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Token { .. } => f
                .debug_struct("Token")
                .field("token", &"[REDACTED]")
                .finish(),
            Self::ClientCredentials {
                client_id,
                token_endpoint,
                ..
            } => f
                .debug_struct("ClientCredentials")
                .field("client_id", client_id)
                .field("client_secret", &"[REDACTED]")
                .field("token_endpoint", token_endpoint)
                .finish(),
        }
    }
}

/// Token response from the directory's `OAuth2` token endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Cached access token with expiry.
#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: Option<std::time::Instant>,
}

impl CachedToken {
    fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(exp) => std::time::Instant::now() >= exp,
            None => false,
        }
    }
}

/// Authentication handler for the directory admin API.
///
/// Supports a static token and `OAuth2` client credentials (with caching).
#[derive(Debug, Clone)]
pub struct DirectoryAuth {
    credentials: DirectoryCredentials,
    /// Cached access token (shared across clones).
    cached_token: Arc<RwLock<Option<CachedToken>>>,
    /// HTTP client for token requests.
    http_client: reqwest::Client,
}

impl DirectoryAuth {
    /// Create a new auth handler from service-account credentials.
    #[must_use]
    pub fn new(credentials: DirectoryCredentials, http_client: reqwest::Client) -> Self {
        Self {
            credentials,
            cached_token: Arc::new(RwLock::new(None)),
            http_client,
        }
    }

    /// Get the bearer token to use for admin requests.
    ///
    /// For static-token auth, returns the token as-is. For client
    /// credentials, fetches (or returns a cached) access token.
    pub async fn get_bearer_token(&self) -> DirectoryClientResult<String> {
        match &self.credentials {
            DirectoryCredentials::Token { token } => Ok(token.clone()),
            DirectoryCredentials::ClientCredentials {
                client_id,
                client_secret,
                token_endpoint,
            } => {
                // Check cache first.
                {
                    let cache = self.cached_token.read().await;
                    if let Some(cached) = cache.as_ref() {
                        if !cached.is_expired() {
                            return Ok(cached.access_token.clone());
                        }
                    }
                }

                // Fetch new token.
                debug!("Fetching service-account token from {}", token_endpoint);
                let response = self
                    .http_client
                    .post(token_endpoint)
                    .basic_auth(client_id, Some(client_secret))
                    .form(&[("grant_type", "client_credentials")])
                    .send()
                    .await
                    .map_err(|e| {
                        DirectoryClientError::AuthError(format!("Token request failed: {e}"))
                    })?;

                if !response.status().is_success() {
                    let status = response.status();
                    let body = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "<no body>".to_string());
                    return Err(DirectoryClientError::AuthError(format!(
                        "Token endpoint returned {status}: {body}"
                    )));
                }

                let token_response: TokenResponse = response.json().await.map_err(|e| {
                    DirectoryClientError::AuthError(format!("Failed to parse token response: {e}"))
                })?;

                let expires_at = token_response.expires_in.map(|secs| {
                    // Expire 30 seconds early to avoid using expired tokens.
                    std::time::Instant::now()
                        + std::time::Duration::from_secs(secs.saturating_sub(30))
                });

                let access_token = token_response.access_token.clone();

                // Cache the token.
                {
                    let mut cache = self.cached_token.write().await;
                    *cache = Some(CachedToken {
                        access_token: token_response.access_token,
                        expires_at,
                    });
                }

                Ok(access_token)
            }
        }
    }

    /// Apply authentication to a request builder.
    pub async fn apply(&self, builder: RequestBuilder) -> DirectoryClientResult<RequestBuilder> {
        let token = self.get_bearer_token().await?;
        Ok(builder.bearer_auth(token))
    }

    /// Invalidate the cached token (e.g., on 401 response).
    pub async fn invalidate_cache(&self) {
        let mut cache = self.cached_token.write().await;
        *cache = None;
    }
}
