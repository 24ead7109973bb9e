//! # Session Error Type
//!
//! Unified error type for session services.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockbook                              │
//! │                                                                         │
//! │  Frontend                    Rust Session Layer                         │
//! │  ────────                    ──────────────────                         │
//! │                                                                         │
//! │  searchCatalog(query)                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Service Function                                                │  │
//! │  │  Result<T, SessionError>                                         │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation Error? ── ValidationError::Duplicate ──┐             │  │
//! │  │         │                                          ▼             │  │
//! │  │  Persistence Error? ── StoreError (verbatim) ── SessionError ──► │  │
//! │  │         │                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────► │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Frontend receives { code: "VALIDATION_ERROR", message: "..." }         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Persistence failures are surfaced VERBATIM (message included), not
//! collapsed into a generic string: the user retries or gives up based on
//! what the collaborator actually said. No retries happen down here.

use serde::Serialize;
use stockbook_core::{CoreError, ValidationError};

use crate::store::StoreError;

/// Error returned from session services.
///
/// ## Serialization
/// This is what the frontend receives when a service call fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "size 'XL' already exists"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for session responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (stale variant id, unknown size)
    NotFound,

    /// Structural validation failed; commit blocked
    ValidationError,

    /// The external persistence collaborator failed; state rolled back
    PersistenceError,

    /// Business logic error (wrong adjustment state, etc.)
    BusinessLogic,

    /// Internal error
    Internal,
}

impl SessionError {
    /// Creates a new session error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        SessionError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        SessionError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        SessionError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        SessionError::new(ErrorCode::Internal, message)
    }
}

/// Converts validation errors to session errors.
impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::validation(err.to_string())
    }
}

/// Converts core errors to session errors.
impl From<CoreError> for SessionError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::LineNotFound(id) => SessionError::not_found("Line item", &id),
            CoreError::InvalidAdjustmentState { .. } => {
                SessionError::new(ErrorCode::BusinessLogic, err.to_string())
            }
            CoreError::Validation(inner) => inner.into(),
        }
    }
}

/// Converts persistence errors to session errors.
///
/// The collaborator's message is passed through verbatim; the in-memory
/// state was already left untouched by the calling service.
impl From<StoreError> for SessionError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "persistence collaborator failed");
        SessionError::new(ErrorCode::PersistenceError, err.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_maps_to_validation_code() {
        let err: SessionError = ValidationError::Duplicate {
            field: "size".to_string(),
            value: "XL".to_string(),
        }
        .into();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "size 'XL' already exists");
    }

    #[test]
    fn test_store_error_message_is_verbatim() {
        let err: SessionError =
            StoreError::SaveFailed("row locked by another session".to_string()).into();

        assert_eq!(err.code, ErrorCode::PersistenceError);
        assert!(err.message.contains("row locked by another session"));
    }

    #[test]
    fn test_serializes_with_camel_case_and_screaming_code() {
        let err = SessionError::not_found("Variant", "v-9");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Variant not found: v-9");
    }
}
