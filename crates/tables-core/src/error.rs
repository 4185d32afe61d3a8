//! # Error Types
//!
//! Domain-specific error types for tables-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tables-core errors (this file)                                        │
//! │  ├── ValidationError  - Payload shape and business-rule failures       │
//! │  └── TransitionError  - Illegal status transitions                     │
//! │                                                                         │
//! │  tables-store errors (separate crate)                                  │
//! │  ├── StoreError       - Storage collaborator failures                  │
//! │  └── ServiceError     - What the API layer sees (maps to 400/404)      │
//! │                                                                         │
//! │  Flow: ValidationError → ServiceError → HTTP body → Client             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (offending field names, status)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Rejection reasons produced by the field validation pipeline.
///
/// A reservation payload is either accepted whole or rejected with exactly
/// one of these. The pipeline is fail-fast: the first failing check wins.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    /// Payload contains keys outside the allowed set.
    ///
    /// ## When This Occurs
    /// - Client sends a misspelled field (`"moble_number"`)
    /// - Client sends fields this resource never accepts
    ///
    /// Unknown keys are a rejection, never a silent drop.
    #[error("invalid field(s): {}", .0.join(", "))]
    UnknownFields(Vec<String>),

    /// One or more required fields are absent, null, or blank.
    /// Carries exactly the missing field names.
    #[error("missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// reservation_date is not a YYYY-MM-DD calendar date.
    #[error("reservation_date is invalid, expected YYYY-MM-DD")]
    InvalidDate,

    /// reservation_time is not an HH:MM time of day.
    #[error("reservation_time is invalid, expected HH:MM")]
    InvalidTime,

    /// people is not a whole JSON number of at least 1.
    ///
    /// ## When This Occurs
    /// - Numeric-looking strings (`"4"`)
    /// - Fractional counts (`2.5`)
    /// - Zero or negative counts
    #[error("people must be a whole number of at least 1")]
    InvalidPeople,

    /// mobile_number contains characters other than digits, spaces,
    /// and hyphens.
    #[error("mobile_number may contain only digits, spaces, and hyphens")]
    InvalidPhone,

    /// The requested date falls on the weekday the restaurant is closed.
    #[error("we are closed on Tuesdays, please pick a day when we are open")]
    ClosedDay,

    /// The requested date and time are not strictly in the future.
    #[error("reservation must be for a future date and time")]
    PastDate,

    /// The requested time is before opening.
    #[error("reservation cannot be before we open")]
    BeforeHours,

    /// The requested time is at or past the last bookable slot.
    #[error("reservation must be at least one hour before we close")]
    AfterHours,

    /// A new reservation carried a status other than `booked`.
    ///
    /// The lifecycle of an existing reservation belongs to the transition
    /// guard; creation may only start it at `booked`.
    #[error("invalid or unknown status: {status}")]
    InvalidStatus { status: String },
}

// =============================================================================
// Transition Error
// =============================================================================

/// Rejection reasons produced by the status transition guard.
#[derive(Debug, Clone, Error)]
pub enum TransitionError {
    /// The stored reservation is `finished`, which is terminal.
    /// Every requested status is rejected, including `finished` itself.
    #[error("reservation is already finished")]
    AlreadyFinished,

    /// The requested status is not one of booked, seated, finished,
    /// cancelled.
    #[error("invalid or unknown status: {status}")]
    UnknownStatus { status: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Convenience type alias for transition results.
pub type TransitionResult<T> = Result<T, TransitionError>;

// =============================================================================
// Unit Tests
// =============================================================================
