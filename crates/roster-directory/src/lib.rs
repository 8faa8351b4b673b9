//! Client facade for the identity directory's admin API.
//!
//! The directory owns all account storage and role assignment; this crate is
//! the one place the rest of the workspace talks to it. It wraps the admin
//! endpoints the user API needs (create a user, fetch a user with their realm
//! role mappings) behind [`client::DirectoryClient`], authenticates with a
//! cached service-account token, and normalizes every directory failure into
//! [`DirectoryClientError`] so callers handle one error type.

pub mod auth;
pub mod client;
pub mod error;
pub mod models;

pub use client::DirectoryClient;
pub use error::{DirectoryClientError, DirectoryClientResult};
