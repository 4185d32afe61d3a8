//! # Reservation Request
//!
//! The strongly-typed result of a successful validation pass.
//!
//! Raw request bodies arrive as untyped JSON. Rather than probing properties
//! ad hoc at every use site, the validation pipeline maps the payload into a
//! [`ReservationRequest`] exactly once, at the boundary. Code past that
//! boundary never sees JSON again.
//!
//! A request is ephemeral: it is built per call, handed to the storage
//! collaborator on success, and never retained.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::ReservationStatus;

/// Payload keys a reservation request may carry. Anything else is rejected.
pub const ALLOWED_FIELDS: [&str; 10] = [
    "first_name",
    "last_name",
    "mobile_number",
    "reservation_date",
    "reservation_time",
    "people",
    "created_at",
    "updated_at",
    "status",
    "reservation_id",
];

/// Payload keys that must be present and non-empty.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "first_name",
    "last_name",
    "mobile_number",
    "reservation_date",
    "reservation_time",
    "people",
];

/// A validated, normalized reservation request.
///
/// Only [`crate::validation::validate`] constructs one of these, so holding
/// a `ReservationRequest` is proof the payload passed every check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReservationRequest {
    /// Guest first name, as given.
    pub first_name: String,

    /// Guest last name, as given.
    pub last_name: String,

    /// Contact number; digits, spaces, and hyphens only.
    pub mobile_number: String,

    /// Requested calendar date.
    #[ts(as = "String")]
    pub reservation_date: NaiveDate,

    /// Requested time of day.
    #[ts(as = "String")]
    pub reservation_time: NaiveTime,

    /// Party size, at least 1.
    pub people: i64,

    /// Initial status. Defaults to [`ReservationStatus::Booked`]; creation
    /// rejects anything else. On updates the stored status is authoritative
    /// and this field is ignored by the operation layer.
    pub status: ReservationStatus,

    /// Identity echoed back by update payloads. Informational only; the
    /// authoritative identity is the one the caller addressed.
    pub reservation_id: Option<String>,
}
