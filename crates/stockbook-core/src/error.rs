//! # Error Types
//!
//! Domain-specific error types for stockbook-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockbook-core errors (this file)                                     │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  stockbook-session errors (separate crate)                             │
//! │  ├── StoreError       - Persistence collaborator failures              │
//! │  └── SessionError     - What the rendering layer sees (serialized)     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → SessionError → Frontend           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (variant id, size name, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message
//!
//! Malformed *numeric* form input is deliberately NOT an error: the
//! [`crate::input`] module clamps it to the nearest valid value so the UI
//! always stays in a displayable state. Only structural violations reach
//! these types.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No line item with the given variant id exists in the collection.
    ///
    /// ## When This Occurs
    /// - Updating quantity/discount/rate of a line the user already removed
    /// - A stale variant id from a previous catalog fetch
    #[error("Line item not found: {0}")]
    LineNotFound(String),

    /// A stock adjustment method was called in the wrong state.
    ///
    /// ## When This Occurs
    /// - `confirm()` on an adjustment that never entered PendingConfirmation
    /// - `submit()` on an adjustment that was already submitted
    #[error("Stock adjustment is {current}, cannot perform operation")]
    InvalidAdjustmentState { current: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet structural requirements.
/// They block the commit and must be surfaced as a discrete, named failure -
/// never thrown away or collapsed into a string.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two sizes with the same name in one variant).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::LineNotFound("v-123".to_string());
        assert_eq!(err.to_string(), "Line item not found: v-123");

        let err = CoreError::InvalidAdjustmentState {
            current: "Applied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Stock adjustment is Applied, cannot perform operation"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "size".to_string(),
        };
        assert_eq!(err.to_string(), "size is required");

        let err = ValidationError::Duplicate {
            field: "size".to_string(),
            value: "XL".to_string(),
        };
        assert_eq!(err.to_string(), "size 'XL' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "size".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
