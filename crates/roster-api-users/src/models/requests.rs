//! Request models for the users API.

use serde::Deserialize;
use utoipa::ToSchema;

/// Request to create a new user account in the directory.
///
/// Every field defaults to an empty string so that an absent field surfaces
/// as a field violation in the 400 body rather than a deserialization
/// rejection.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Desired username, 2 to 30 characters.
    #[serde(default)]
    pub username: String,

    /// User's email address.
    #[serde(default)]
    pub email: String,

    /// Initial password, more than 2 characters.
    #[serde(default)]
    pub password: String,

    /// User's first name.
    #[serde(default)]
    pub first_name: String,

    /// User's last name.
    #[serde(default)]
    pub last_name: String,
}
