//! # Status Transition Guard
//!
//! Decides whether a requested status change on a stored reservation is
//! legal.
//!
//! ## Transition Graph
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Reservation Lifecycle                               │
//! │                                                                         │
//! │        ┌──────────┐◄──────────►┌──────────┐                            │
//! │        │  booked  │            │  seated  │                            │
//! │        └────┬─────┘◄─┐      ┌─►└────┬─────┘                            │
//! │             │        │      │       │                                  │
//! │             ▼        ▼      ▼       ▼                                  │
//! │        ┌───────────┐      ┌────────────┐                               │
//! │        │ cancelled │      │  finished  │ ── terminal, no way out       │
//! │        └───────────┘      └────────────┘                               │
//! │                                                                         │
//! │  Single rule: finished blocks everything. All other transitions        │
//! │  between known statuses are permitted.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The permissiveness is deliberate and must stay: the guard enforces the
//! one terminal rule and rejects unknown status names, nothing more. Do not
//! add adjacency restrictions here without product confirmation.
//!
//! The guard never touches stored state. It reads the current status,
//! decides, and hands back a fresh copy for the storage collaborator to
//! persist.

use crate::error::{TransitionError, TransitionResult};
use crate::types::{Reservation, ReservationStatus};

/// Decides the next status given the stored one and the requested
/// wire-format name.
///
/// ## Rules
/// - A finished reservation rejects every request, `finished` included.
/// - The requested name must parse to a known status.
/// - Everything else goes through unchanged.
pub fn transition(
    current: ReservationStatus,
    requested: &str,
) -> TransitionResult<ReservationStatus> {
    if current.is_terminal() {
        return Err(TransitionError::AlreadyFinished);
    }

    ReservationStatus::parse(requested).ok_or_else(|| TransitionError::UnknownStatus {
        status: requested.to_string(),
    })
}

/// Applies a legal transition to a stored record, copy-on-write.
///
/// Returns a new record with only `status` replaced. The input record is
/// untouched; persisting the copy is the caller's job.
pub fn apply(reservation: &Reservation, requested: &str) -> TransitionResult<Reservation> {
    let next = transition(reservation.status, requested)?;

    let mut updated = reservation.clone();
    updated.status = next;
    Ok(updated)
}

// =============================================================================
// Unit Tests
// =============================================================================
