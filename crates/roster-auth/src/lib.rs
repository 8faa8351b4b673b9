//! Token verification and role extraction library for roster.
//!
//! This crate provides:
//! - Typed identity-token claims with the directory's `realm_access` role list
//! - JWT RS256 encoding and decoding
//! - Derivation of the request-scoped [`AuthorizedPrincipal`] used for
//!   authorization checks
//!
//! # Example
//!
//! ```rust,ignore
//! use roster_auth::{decode_token, AuthorizedPrincipal, TokenClaims};
//!
//! let claims = decode_token(&token, public_key_pem)?;
//! let principal = AuthorizedPrincipal::from_claims(&claims);
//!
//! if principal.has_role("ROLE_MODERATOR") {
//!     // authorized
//! }
//! ```

mod claims;
mod error;
mod jwt;
mod principal;

// Re-export public API
pub use claims::{RealmAccess, TokenClaims, TokenClaimsBuilder, ROLE_PREFIX};
pub use error::AuthError;
pub use jwt::{decode_token, decode_token_with_config, encode_token, ValidationConfig};
pub use principal::AuthorizedPrincipal;
