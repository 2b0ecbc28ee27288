//! Error taxonomy for catalog operations.
//!
//! The source system collapsed every failure into one message string; here
//! each recoverable condition gets its own variant so callers can decide on
//! logging, retry, or display. None of these are fatal.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The submitted draft is missing a required field or breaks the
    /// seat invariant.
    #[error("invalid workshop: {reason}")]
    Validation { reason: ValidationReason },

    /// The referenced workshop id is absent from the catalog.
    #[error("no workshop found with id `{id}`")]
    NotFound { id: String },

    /// Enrollment into a canceled workshop is rejected.
    #[error("workshop `{id}` is canceled and no longer accepts enrollments")]
    CanceledWorkshop { id: String },

    /// Enrollment into a full workshop is rejected.
    #[error("workshop `{id}` has reached its maximum capacity of {capacity}")]
    CapacityExceeded { id: String, capacity: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    EmptyTitle,
    EmptyDate,
    EmptyTime,
    ZeroCapacity,
    EnrolledExceedsCapacity { enrolled: u32, capacity: u32 },
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationReason::EmptyTitle => write!(f, "title must not be blank"),
            ValidationReason::EmptyDate => write!(f, "date must be set"),
            ValidationReason::EmptyTime => write!(f, "time must be set"),
            ValidationReason::ZeroCapacity => write!(f, "capacity must be at least 1"),
            ValidationReason::EnrolledExceedsCapacity { enrolled, capacity } => write!(
                f,
                "enrolled count {} exceeds capacity {}",
                enrolled, capacity
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_user_renderable() {
        let err = CatalogError::NotFound {
            id: "ws-9".to_string(),
        };
        assert_eq!(err.to_string(), "no workshop found with id `ws-9`");

        let err = CatalogError::CanceledWorkshop {
            id: "ws-3".to_string(),
        };
        assert!(err.to_string().contains("canceled"));

        let err = CatalogError::CapacityExceeded {
            id: "ws-2".to_string(),
            capacity: 30,
        };
        assert!(err.to_string().contains("maximum capacity of 30"));

        let err = CatalogError::Validation {
            reason: ValidationReason::EmptyTitle,
        };
        assert_eq!(err.to_string(), "invalid workshop: title must not be blank");
    }
}
