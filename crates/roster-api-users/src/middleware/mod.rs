//! Middleware components for the users API.

pub mod bearer_auth;
pub mod moderator_guard;

pub use bearer_auth::{bearer_auth_middleware, JwtIssuer, JwtPublicKey};
pub use moderator_guard::{moderator_guard, MODERATOR_ROLE};
