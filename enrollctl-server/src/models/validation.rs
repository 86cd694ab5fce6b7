//! Validation error types

use std::fmt;

/// Validation error for domain models and decoded input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Numeric field below its minimum
    OutOfRange { field: &'static str, min: i64, value: i64 },

    /// Input could not be decoded at all (bad JSON, bad query string, ...)
    Malformed { input: &'static str, reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::OutOfRange { field, min, value } => {
                write!(f, "{} must be at least {} (got {})", field, min, value)
            }
            Self::Malformed { input, reason } => write!(f, "malformed {}: {}", input, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "name",
            max: 255,
        };
        assert_eq!(
            err.to_string(),
            "name exceeds maximum length of 255 characters"
        );

        let err = ValidationError::OutOfRange {
            field: "age",
            min: 0,
            value: -3,
        };
        assert_eq!(err.to_string(), "age must be at least 0 (got -3)");
    }
}
