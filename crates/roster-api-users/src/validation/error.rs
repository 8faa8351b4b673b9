//! Validation error types.

use serde::Serialize;
use utoipa::ToSchema;

/// A single validation error with field information.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidationError {
    /// The field name that failed validation, as it appears on the wire.
    pub field: String,
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable violation message.
    pub message: String,
    /// Optional constraint details (e.g., `min_length`, actual value).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<serde_json::Value>,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
            constraints: None,
        }
    }

    /// Create a validation error with constraint details.
    pub fn with_constraints(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
        constraints: serde_json::Value,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
            constraints: Some(constraints),
        }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, Vec<ValidationError>>;
