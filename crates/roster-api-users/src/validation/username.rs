//! Username validation.
//!
//! The directory accepts any characters in a username; the only constraint
//! this API enforces is length, 2 to 30 characters.

use super::error::ValidationError;
use serde_json::json;

/// Minimum username length.
const MIN_USERNAME_LENGTH: usize = 2;

/// Maximum username length.
const MAX_USERNAME_LENGTH: usize = 30;

/// Violation message for a username outside the allowed length.
const USERNAME_MESSAGE: &str = "Username should be between 2 and 30 characters long";

/// Validate a username.
///
/// # Examples
///
/// ```
/// use roster_api_users::validation::validate_username;
///
/// assert!(validate_username("jo").is_ok());
/// assert!(validate_username("someUserName").is_ok());
///
/// assert!(validate_username("m").is_err()); // too short
/// assert!(validate_username("").is_err());
/// ```
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let length = username.chars().count();

    if length < MIN_USERNAME_LENGTH {
        return Err(ValidationError::with_constraints(
            "username",
            "too_short",
            USERNAME_MESSAGE,
            json!({"min_length": MIN_USERNAME_LENGTH, "actual": length}),
        ));
    }

    if length > MAX_USERNAME_LENGTH {
        return Err(ValidationError::with_constraints(
            "username",
            "too_long",
            USERNAME_MESSAGE,
            json!({"max_length": MAX_USERNAME_LENGTH, "actual": length}),
        ));
    }

    Ok(())
}
