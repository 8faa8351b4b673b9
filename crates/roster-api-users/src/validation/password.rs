//! Password validation.
//!
//! The directory applies its own credential policy; this API only rejects
//! passwords of 2 characters or fewer before they reach it.

use super::error::ValidationError;
use serde_json::json;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 3;

/// Violation message for a too-short password.
const PASSWORD_MESSAGE: &str = "Password should be greater than 2 characters long";

/// Validate a password.
///
/// # Examples
///
/// ```
/// use roster_api_users::validation::validate_password;
///
/// assert!(validate_password("somePassword").is_ok());
/// assert!(validate_password("abc").is_ok());
///
/// assert!(validate_password("1").is_err()); // too short
/// assert!(validate_password("").is_err());
/// ```
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let length = password.chars().count();

    if length < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::with_constraints(
            "password",
            "too_short",
            PASSWORD_MESSAGE,
            json!({"min_length": MIN_PASSWORD_LENGTH, "actual": length}),
        ));
    }

    Ok(())
}
