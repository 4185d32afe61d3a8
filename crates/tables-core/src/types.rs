//! # Domain Types
//!
//! Core domain types for the Tables reservation system.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐         ┌──────────────────────┐             │
//! │  │     Reservation      │         │  ReservationStatus   │             │
//! │  │  ──────────────────  │         │  ──────────────────  │             │
//! │  │  reservation_id      │         │  Booked  (default)   │             │
//! │  │  first_name          │         │  Seated              │             │
//! │  │  last_name           │         │  Finished (terminal) │             │
//! │  │  mobile_number       │         │  Cancelled           │             │
//! │  │  reservation_date    │         └──────────────────────┘             │
//! │  │  reservation_time    │                                              │
//! │  │  people              │                                              │
//! │  │  status              │                                              │
//! │  └──────────────────────┘                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The stored record is owned by the storage collaborator. This crate only
//! ever reads it and produces updated copies; it never mutates stored state.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Reservation Status
// =============================================================================

/// Lifecycle stage of a reservation.
///
/// Once a reservation exists, this field is owned exclusively by the
/// transition guard in [`crate::status`]; creation may only start it at
/// [`ReservationStatus::Booked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// Newly created, party not yet arrived.
    Booked,
    /// Party is at the table.
    Seated,
    /// Party has left. Terminal, no further transitions.
    Finished,
    /// Reservation was called off.
    Cancelled,
}

impl ReservationStatus {
    /// Parses a wire-format status name (`"booked"`, `"seated"`, ...).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "booked" => Some(ReservationStatus::Booked),
            "seated" => Some(ReservationStatus::Seated),
            "finished" => Some(ReservationStatus::Finished),
            "cancelled" => Some(ReservationStatus::Cancelled),
            _ => None,
        }
    }

    /// Wire-format name of this status.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Booked => "booked",
            ReservationStatus::Seated => "seated",
            ReservationStatus::Finished => "finished",
            ReservationStatus::Cancelled => "cancelled",
        }
    }

    /// Whether this status admits no further transitions.
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, ReservationStatus::Finished)
    }
}

impl Default for ReservationStatus {
    fn default() -> Self {
        ReservationStatus::Booked
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Reservation
// =============================================================================

/// A stored reservation record.
///
/// Identity and timestamps are assigned by the storage collaborator on
/// insert. Every other field comes from a validated request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Reservation {
    /// Unique identifier (UUID v4), assigned on insert.
    pub reservation_id: String,

    /// Guest first name.
    pub first_name: String,

    /// Guest last name.
    pub last_name: String,

    /// Contact number; digits, spaces, and hyphens only.
    pub mobile_number: String,

    /// Calendar date of the reservation.
    #[ts(as = "String")]
    pub reservation_date: NaiveDate,

    /// Time of day of the reservation (24h).
    #[ts(as = "String")]
    pub reservation_time: NaiveTime,

    /// Party size.
    pub people: i64,

    /// Lifecycle status. See [`ReservationStatus`].
    pub status: ReservationStatus,

    /// When the record was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the record was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================
