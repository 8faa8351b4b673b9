//! Application configuration from environment variables.
//!
//! All settings come from the environment (or a `.env` file in
//! development). Required variables fail startup with a clear error
//! instead of a panic deep inside a handler.

use std::env;

/// Errors that can occur during configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Failed to parse port: {0}")]
    InvalidPort(#[from] std::num::ParseIntError),
}

/// Application configuration.
#[derive(Clone)]
pub struct Config {
    /// RS256 public key for verifying bearer tokens (PEM format).
    pub jwt_public_key: String,

    /// Expected token issuer. When unset, issuer validation is skipped.
    pub jwt_issuer: Option<String>,

    /// Base URL of the identity directory (no trailing slash needed).
    pub directory_url: String,

    /// Directory realm that owns the user accounts.
    pub directory_realm: String,

    /// Service account client id for the directory admin API.
    pub directory_client_id: String,

    /// Service account client secret for the directory admin API.
    pub directory_client_secret: String,

    /// Timeout for directory requests, in seconds.
    pub directory_timeout_secs: u64,

    /// Log level filter.
    pub rust_log: String,

    /// CORS allowed origins.
    pub cors_origins: Vec<String>,

    /// Server host.
    pub host: String,

    /// Server port.
    pub port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("jwt_public_key", &"[redacted]")
            .field("jwt_issuer", &self.jwt_issuer)
            .field("directory_url", &self.directory_url)
            .field("directory_realm", &self.directory_realm)
            .field("directory_client_id", &self.directory_client_id)
            .field("directory_client_secret", &"[redacted]")
            .field("directory_timeout_secs", &self.directory_timeout_secs)
            .field("rust_log", &self.rust_log)
            .field("cors_origins", &self.cors_origins)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required variables are missing
    /// - Values are invalid (e.g., invalid port number)
    ///
    /// # Required Variables
    ///
    /// - `JWT_PUBLIC_KEY` - RS256 public key (PEM format)
    /// - `DIRECTORY_URL` - Base URL of the identity directory
    /// - `DIRECTORY_REALM` - Realm that owns the user accounts
    /// - `DIRECTORY_CLIENT_ID` - Service account client id
    /// - `DIRECTORY_CLIENT_SECRET` - Service account client secret
    ///
    /// # Optional Variables
    ///
    /// - `JWT_ISSUER` - Expected token issuer (default: not validated)
    /// - `DIRECTORY_TIMEOUT_SECS` - Directory request timeout (default: 10)
    /// - `RUST_LOG` - Log level filter (default: "info")
    /// - `CORS_ORIGINS` - Comma-separated allowed origins (default: "*")
    /// - `HOST` - Bind address (default: "0.0.0.0")
    /// - `PORT` - Listen port (default: 8080)
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (development only)
        let _ = dotenvy::dotenv();

        // Required variables
        let jwt_public_key = env::var("JWT_PUBLIC_KEY")
            .map_err(|_| ConfigError::MissingVar("JWT_PUBLIC_KEY".to_string()))?;

        // Validate PEM format (basic check)
        if !jwt_public_key.contains("-----BEGIN") {
            return Err(ConfigError::InvalidValue {
                var: "JWT_PUBLIC_KEY".to_string(),
                message: "Must be PEM format (should contain -----BEGIN)".to_string(),
            });
        }

        let directory_url = env::var("DIRECTORY_URL")
            .map_err(|_| ConfigError::MissingVar("DIRECTORY_URL".to_string()))?;

        let directory_realm = env::var("DIRECTORY_REALM")
            .map_err(|_| ConfigError::MissingVar("DIRECTORY_REALM".to_string()))?;

        let directory_client_id = env::var("DIRECTORY_CLIENT_ID")
            .map_err(|_| ConfigError::MissingVar("DIRECTORY_CLIENT_ID".to_string()))?;

        let directory_client_secret = env::var("DIRECTORY_CLIENT_SECRET")
            .map_err(|_| ConfigError::MissingVar("DIRECTORY_CLIENT_SECRET".to_string()))?;

        // Optional variables with defaults
        let jwt_issuer = env::var("JWT_ISSUER").ok();

        let directory_timeout_secs = env::var("DIRECTORY_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidValue {
                var: "DIRECTORY_TIMEOUT_SECS".to_string(),
                message: format!("Must be a number of seconds: {e}"),
            })?;

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|s| s.split(',').map(|o| o.trim().to_string()).collect())
            .unwrap_or_else(|_| vec!["*".to_string()]);

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()?;

        // Validate port range
        if port == 0 {
            return Err(ConfigError::InvalidValue {
                var: "PORT".to_string(),
                message: "Port must be between 1 and 65535".to_string(),
            });
        }

        Ok(Config {
            jwt_public_key,
            jwt_issuer,
            directory_url,
            directory_realm,
            directory_client_id,
            directory_client_secret,
            directory_timeout_secs,
            rust_log,
            cors_origins,
            host,
            port,
        })
    }

    /// Get the server bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Token endpoint the directory service account authenticates against.
    #[must_use]
    pub fn token_endpoint(&self) -> String {
        format!(
            "{}/realms/{}/protocol/openid-connect/token",
            self.directory_url.trim_end_matches('/'),
            self.directory_realm
        )
    }
}
