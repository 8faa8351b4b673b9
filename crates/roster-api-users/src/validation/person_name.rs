//! First and last name validation.

use super::error::ValidationError;

/// Validate a first name: must not be blank.
pub fn validate_first_name(first_name: &str) -> Result<(), ValidationError> {
    non_blank(first_name, "firstName", "First name should not be blank")
}

/// Validate a last name: must not be blank.
pub fn validate_last_name(last_name: &str) -> Result<(), ValidationError> {
    non_blank(last_name, "lastName", "Last name should not be blank")
}

fn non_blank(value: &str, field: &str, message: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "required", message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_first_name() {
        assert!(validate_first_name("Ivan").is_ok());
    }

    #[test]
    fn test_valid_last_name() {
        assert!(validate_last_name("Ivanov").is_ok());
    }

    #[test]
    fn test_invalid_first_name_empty() {
        let result = validate_first_name("");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.field, "firstName");
        assert_eq!(err.code, "required");
        assert_eq!(err.message, "First name should not be blank");
    }

    #[test]
    fn test_invalid_first_name_whitespace_only() {
        assert!(validate_first_name("   ").is_err());
    }

    #[test]
    fn test_invalid_last_name_empty() {
        let result = validate_last_name("");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.field, "lastName");
        assert_eq!(err.message, "Last name should not be blank");
    }
}
