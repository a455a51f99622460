//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_creates_correct_error() {
        let err = DomainError::not_found("UsageRecord", "42");
        match err {
            DomainError::NotFound { entity_type, id } => {
                assert_eq!(entity_type, "UsageRecord");
                assert_eq!(id, "42");
            },
            DomainError::ValidationError(_) => unreachable!("Expected NotFound error"),
        }
    }

    #[test]
    fn not_found_error_message_is_correct() {
        let err = DomainError::not_found("RouteLog", "abc");
        assert_eq!(err.to_string(), "RouteLog not found: abc");
    }

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("origin must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Validation failed: origin must not be empty"
        );
    }
}
