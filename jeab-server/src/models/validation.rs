//! Validation error types

use std::fmt;

/// Validation error for create shapes and request parameters
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Required field is blank
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Request body could not be parsed into the create shape
    InvalidBody { reason: String },

    /// Path or query parameter could not be parsed
    InvalidParameter { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidBody { reason } => write!(f, "invalid request body: {}", reason),
            Self::InvalidParameter { reason } => write!(f, "invalid parameter: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Checks run after deserialization and before any storage write.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Reject blank or oversized required text.
pub(crate) fn require_text(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "title",
            max: 500,
        };
        assert_eq!(
            err.to_string(),
            "title exceeds maximum length of 500 characters"
        );
    }

    #[test]
    fn require_text_rules() {
        assert!(require_text("name", "Extinction", 200).is_ok());
        assert!(matches!(
            require_text("name", "   ", 200),
            Err(ValidationError::Empty { field: "name" })
        ));
        assert!(matches!(
            require_text("name", &"x".repeat(201), 200),
            Err(ValidationError::TooLong { max: 200, .. })
        ));
    }
}
