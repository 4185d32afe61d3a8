//! # Store and Service Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError / TransitionError (tables-core)                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ServiceError (this module) ← adds NotFound and storage faults         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  API layer maps http_status() to a 400/404/500 body                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant is recoverable by the caller; nothing here is fatal to the
//! process and nothing panics across the boundary.

use thiserror::Error;

use tables_core::{TransitionError, ValidationError};

// =============================================================================
// Store Error
// =============================================================================

/// Failures of the storage collaborator itself.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with the given id.
    #[error("reservation {id} does not exist")]
    NotFound { id: String },

    /// The backend failed for reasons unrelated to the request.
    ///
    /// ## When This Occurs
    /// Never for [`crate::MemoryStore`]. Real backends surface their
    /// connection and query failures through this variant.
    #[error("storage failure: {0}")]
    Backend(String),
}

impl StoreError {
    /// Creates a NotFound error for a reservation id.
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Service Error
// =============================================================================

/// What a reservation operation can report to the API layer.
///
/// Core rejections flow in unchanged via `#[from]`; the service adds the
/// lookup and storage outcomes of its own.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The payload failed the validation pipeline.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested status change is illegal.
    #[error(transparent)]
    Transition(#[from] TransitionError),

    /// The addressed reservation does not exist.
    #[error("reservation {id} does not exist")]
    NotFound { id: String },

    /// A phone search carried characters other than digits, spaces,
    /// and hyphens.
    #[error("search terms may contain only digits, spaces, and hyphens")]
    InvalidSearch,

    /// The storage collaborator failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// Creates a NotFound error for a reservation id.
    pub fn not_found(id: impl Into<String>) -> Self {
        ServiceError::NotFound { id: id.into() }
    }

    /// HTTP status the API layer should answer with.
    ///
    /// ## Mapping
    /// - validation family → 400
    /// - missing reservation → 404
    /// - storage faults → 500
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::Validation(_)
            | ServiceError::Transition(_)
            | ServiceError::InvalidSearch => 400,
            ServiceError::NotFound { .. } => 404,
            ServiceError::Store(StoreError::NotFound { .. }) => 404,
            ServiceError::Store(StoreError::Backend(_)) => 500,
        }
    }
}

/// Result type for reservation operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ServiceError::not_found("42");
        assert_eq!(err.to_string(), "reservation 42 does not exist");
        assert_eq!(err.http_status(), 404);
    }

    #[test]
    fn test_core_errors_flow_through_transparently() {
        let err: ServiceError = ValidationError::InvalidDate.into();
        assert_eq!(err.to_string(), ValidationError::InvalidDate.to_string());
        assert_eq!(err.http_status(), 400);

        let err: ServiceError = TransitionError::AlreadyFinished.into();
        assert_eq!(err.http_status(), 400);
    }

    #[test]
    fn test_backend_faults_are_server_errors() {
        let err: ServiceError = StoreError::Backend("disk on fire".to_string()).into();
        assert_eq!(err.http_status(), 500);
    }
}
