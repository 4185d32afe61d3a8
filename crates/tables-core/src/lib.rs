//! # tables-core: Pure Business Logic for Tables
//!
//! This crate is the **heart** of the Tables reservation system. It contains
//! every actual decision the system makes, as pure functions with zero I/O
//! dependencies. Everything around it (HTTP routing, the storage backend,
//! the React client) is glue or display.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tables Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    React Client                                 │   │
//! │  │    Dashboard ──► New Reservation ──► Search ──► Seat/Finish    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON over HTTP                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    API Layer (out of repo)                      │   │
//! │  │    routes requests, shapes 2xx/400/404 bodies                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tables-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ validation│  │  status   │  │   clock   │  │   │
//! │  │   │Reservation│  │  pipeline │  │transition │  │ injected  │  │   │
//! │  │   │  Status   │  │  checks   │  │  guard    │  │   "now"   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    tables-store (Storage Seam)                  │   │
//! │  │       ReservationStore contract, reservation operations         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Reservation, ReservationStatus)
//! - [`request`] - Typed reservation request produced by validation
//! - [`validation`] - The field validation pipeline
//! - [`status`] - Status transition guard
//! - [`clock`] - Injected clock capability
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Injected Time**: "now" always comes in through [`clock::Clock`]
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use serde_json::json;
//! use tables_core::clock::FixedClock;
//! use tables_core::validation::{validate, ValidationMode};
//!
//! let clock = FixedClock::at(
//!     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap().and_hms_opt(12, 0, 0).unwrap(),
//! );
//!
//! let payload = json!({
//!     "first_name": "Rick",
//!     "last_name": "Sanchez",
//!     "mobile_number": "202-555-0164",
//!     "reservation_date": "2026-03-06",
//!     "reservation_time": "18:00",
//!     "people": 4,
//! });
//!
//! let request = validate(&payload, ValidationMode::Create, &clock).unwrap();
//! assert_eq!(request.people, 4);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod clock;
pub mod error;
pub mod request;
pub mod status;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tables_core::Reservation` instead of
// `use tables_core::types::Reservation`

pub use error::{TransitionError, ValidationError};
pub use request::ReservationRequest;
pub use types::{Reservation, ReservationStatus};

// =============================================================================
// Crate-Level Constants
// =============================================================================

use chrono::Weekday;

/// Earliest bookable time of day, as (hour, minute).
///
/// ## Business Reason
/// The kitchen opens at 10:30; nothing can be seated before that.
pub const OPENING_TIME: (u32, u32) = (10, 30);

/// Latest bookable time of day, as (hour, minute). Times at or past this
/// are rejected.
///
/// ## Business Reason
/// The restaurant closes at 22:30 and the last party must be seated with
/// at least an hour to spare.
pub const LAST_BOOKING_TIME: (u32, u32) = (21, 30);

/// Weekday the restaurant is closed. No reservation may land on it,
/// regardless of time of day.
pub const CLOSED_WEEKDAY: Weekday = Weekday::Tue;
