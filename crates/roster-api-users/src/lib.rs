//! User management HTTP API over the identity directory.
//!
//! Exposes three moderator-gated endpoints: create a user, fetch a user's
//! profile with their realm role mappings, and echo the authenticated
//! caller's subject. The directory owns all storage; this crate owns request
//! validation, role-based authorization, and the mapping from directory
//! failures to HTTP responses.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod validation;

pub use error::ApiUsersError;
pub use router::{users_router, UsersState};
