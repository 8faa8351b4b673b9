//! Declarative field constraints for inbound user requests.
//!
//! Each validator checks one field and returns at most one violation.
//! [`validate_create_user`] runs all of them and collects every violation,
//! so a 400 response reports the full set at once instead of stopping at
//! the first failing field.

pub mod email;
pub mod error;
pub mod password;
pub mod person_name;
pub mod username;

pub use email::validate_email;
pub use error::{ValidationError, ValidationResult};
pub use password::validate_password;
pub use person_name::{validate_first_name, validate_last_name};
pub use username::validate_username;

use crate::models::CreateUserRequest;

/// Validate a create-user request, collecting all violations.
///
/// # Errors
///
/// Returns one [`ValidationError`] per failing field, in field order:
/// username, email, password, firstName, lastName.
pub fn validate_create_user(request: &CreateUserRequest) -> ValidationResult<()> {
    let mut errors = Vec::new();

    if let Err(e) = validate_username(&request.username) {
        errors.push(e);
    }
    if let Err(e) = validate_email(&request.email) {
        errors.push(e);
    }
    if let Err(e) = validate_password(&request.password) {
        errors.push(e);
    }
    if let Err(e) = validate_first_name(&request.first_name) {
        errors.push(e);
    }
    if let Err(e) = validate_last_name(&request.last_name) {
        errors.push(e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
