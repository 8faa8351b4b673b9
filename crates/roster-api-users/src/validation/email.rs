//! Email validation.
//!
//! Validates email addresses against an RFC 5322 style pattern that handles:
//! - Standard addresses (user@example.com)
//! - Plus addressing (user+tag@example.com)
//! - Subdomains (user@mail.example.com)

use super::error::ValidationError;
use serde_json::json;
use std::sync::LazyLock;

/// RFC 5322 style email pattern.
///
/// - Local part: dot-separated atoms of the printable special characters
/// - Domain: dot-separated labels with hyphens allowed inside
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"(?i)^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$"
    ).expect("EMAIL_REGEX is a valid regex pattern")
});

/// Maximum allowed email length (per RFC 5321).
const MAX_EMAIL_LENGTH: usize = 254;

/// Violation message for an email that fails any constraint.
const EMAIL_MESSAGE: &str = "Email should be valid";

/// Validate an email address.
///
/// # Examples
///
/// ```
/// use roster_api_users::validation::validate_email;
///
/// assert!(validate_email("user@example.com").is_ok());
/// assert!(validate_email("user+tag@example.com").is_ok());
///
/// assert!(validate_email("").is_err());
/// assert!(validate_email("not-an-email").is_err());
/// assert!(validate_email("user@").is_err());
/// ```
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::new("email", "required", EMAIL_MESSAGE));
    }

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::with_constraints(
            "email",
            "too_long",
            EMAIL_MESSAGE,
            json!({"max_length": MAX_EMAIL_LENGTH, "actual": email.len()}),
        ));
    }

    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::new(
            "email",
            "invalid_format",
            EMAIL_MESSAGE,
        ));
    }

    Ok(())
}
