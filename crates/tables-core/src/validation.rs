//! # Validation Module
//!
//! The field validation pipeline for reservation payloads.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Reservation Validation Pipeline                        │
//! │                                                                         │
//! │  raw JSON payload                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. allowed fields    ── unknown key?        → UnknownFields           │
//! │  2. required fields   ── absent/null/blank?  → MissingFields           │
//! │  3. date format       ── not YYYY-MM-DD?     → InvalidDate             │
//! │  4. time format       ── not HH:MM?          → InvalidTime             │
//! │  5. people            ── not whole ≥ 1?      → InvalidPeople           │
//! │  6. phone             ── bad characters?     → InvalidPhone            │
//! │  7. schedule          ── closed day          → ClosedDay               │
//! │                       ── not in the future   → PastDate                │
//! │                       ── before 10:30        → BeforeHours             │
//! │                       ── at/after 21:30      → AfterHours              │
//! │  8. initial status    ── create, not booked? → InvalidStatus           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ok(ReservationRequest)  ← typed, normalized, ready for storage        │
//! │                                                                         │
//! │  Fail-fast: the FIRST failing check wins, nothing past it runs.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both the create path and the update path run this same pipeline; the only
//! difference is [`ValidationMode`], which controls whether the initial
//! status check applies.
//!
//! Every check is a pure function of the payload (plus the injected clock
//! for the schedule rules), so each one is testable on its own and the whole
//! pipeline is deterministic under a fixed clock.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde_json::{Map, Value};

use crate::clock::Clock;
use crate::error::{ValidationError, ValidationResult};
use crate::request::{ReservationRequest, ALLOWED_FIELDS, REQUIRED_FIELDS};
use crate::types::ReservationStatus;
use crate::{CLOSED_WEEKDAY, LAST_BOOKING_TIME, OPENING_TIME};

// =============================================================================
// Mode
// =============================================================================

/// Which request path is being validated.
///
/// The pipeline is shared; creation additionally pins the initial status to
/// `booked`. Updates leave status alone entirely, because the stored status
/// belongs to the transition guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// A brand new reservation.
    Create,
    /// An edit of an existing reservation addressed by id.
    Update,
}

// =============================================================================
// Pipeline
// =============================================================================

/// Validates a raw reservation payload.
///
/// Runs the full ordered pipeline and returns either the typed, normalized
/// request or the first rejection reason. A non-object payload is treated as
/// an empty object and lands in the missing-fields path; this function never
/// panics on any JSON value.
pub fn validate(
    payload: &Value,
    mode: ValidationMode,
    clock: &impl Clock,
) -> ValidationResult<ReservationRequest> {
    let fallback = Map::new();
    let fields = payload.as_object().unwrap_or(&fallback);

    check_allowed_fields(fields)?;
    check_required_fields(fields)?;
    let reservation_date = parse_date(fields)?;
    let reservation_time = parse_time(fields)?;
    let people = check_people(fields)?;
    let mobile_number = check_phone(fields)?;
    check_schedule(reservation_date, reservation_time, clock.now())?;
    let status = match mode {
        ValidationMode::Create => check_initial_status(fields)?,
        ValidationMode::Update => ReservationStatus::default(),
    };

    Ok(ReservationRequest {
        first_name: text_field(fields, "first_name"),
        last_name: text_field(fields, "last_name"),
        mobile_number,
        reservation_date,
        reservation_time,
        people,
        status,
        reservation_id: identity_field(fields),
    })
}

// =============================================================================
// Individual Checks
// =============================================================================

/// Rejects payloads carrying keys outside [`ALLOWED_FIELDS`].
///
/// Unknown keys are named in the error rather than silently dropped, so a
/// client that misspells `mobile_number` finds out immediately.
pub fn check_allowed_fields(fields: &Map<String, Value>) -> ValidationResult<()> {
    let unknown: Vec<String> = fields
        .keys()
        .filter(|key| !ALLOWED_FIELDS.contains(&key.as_str()))
        .cloned()
        .collect();

    if !unknown.is_empty() {
        return Err(ValidationError::UnknownFields(unknown));
    }

    Ok(())
}

/// Rejects payloads where any of [`REQUIRED_FIELDS`] is absent, `null`, or a
/// blank string. Names exactly the missing fields.
pub fn check_required_fields(fields: &Map<String, Value>) -> ValidationResult<()> {
    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| is_blank(fields.get(**field)))
        .map(|field| field.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    Ok(())
}

/// Parses `reservation_date` as a strict `YYYY-MM-DD` calendar date.
///
/// The shape check keeps chrono from accepting lenient spellings like
/// `2026-3-6`, and the parse rejects shapes that are not real dates, so
/// `2025-13-99` fails here rather than leaking into the schedule rules.
pub fn parse_date(fields: &Map<String, Value>) -> ValidationResult<NaiveDate> {
    let raw = fields
        .get("reservation_date")
        .and_then(Value::as_str)
        .ok_or(ValidationError::InvalidDate)?;

    if !is_date_shape(raw) {
        return Err(ValidationError::InvalidDate);
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate)
}

/// Parses `reservation_time` as a strict `HH:MM` time of day.
pub fn parse_time(fields: &Map<String, Value>) -> ValidationResult<NaiveTime> {
    let raw = fields
        .get("reservation_time")
        .and_then(Value::as_str)
        .ok_or(ValidationError::InvalidTime)?;

    if !is_time_shape(raw) {
        return Err(ValidationError::InvalidTime);
    }

    NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| ValidationError::InvalidTime)
}

/// Checks that `people` is a genuine whole JSON number of at least 1.
///
/// Numeric-looking strings (`"4"`) and fractional counts (`2.5`) are both
/// rejected; only a real integer makes it through.
pub fn check_people(fields: &Map<String, Value>) -> ValidationResult<i64> {
    let people = fields
        .get("people")
        .and_then(Value::as_i64)
        .ok_or(ValidationError::InvalidPeople)?;

    if people < 1 {
        return Err(ValidationError::InvalidPeople);
    }

    Ok(people)
}

/// Checks that `mobile_number` is a string of digits, spaces, and hyphens.
pub fn check_phone(fields: &Map<String, Value>) -> ValidationResult<String> {
    let raw = fields
        .get("mobile_number")
        .and_then(Value::as_str)
        .ok_or(ValidationError::InvalidPhone)?;

    if !is_phone_like(raw) {
        return Err(ValidationError::InvalidPhone);
    }

    Ok(raw.to_string())
}

/// Applies the calendar and opening-hours rules to the combined
/// reservation instant.
///
/// Conditions are checked in a fixed order and only the first hit is
/// reported: closed day, past instant, before opening, at/after the last
/// bookable slot.
pub fn check_schedule(
    date: NaiveDate,
    time: NaiveTime,
    now: NaiveDateTime,
) -> ValidationResult<()> {
    if date.weekday() == CLOSED_WEEKDAY {
        return Err(ValidationError::ClosedDay);
    }

    // Strictly after: booking the current minute is already too late.
    if date.and_time(time) <= now {
        return Err(ValidationError::PastDate);
    }

    let slot = (time.hour(), time.minute());
    if slot < OPENING_TIME {
        return Err(ValidationError::BeforeHours);
    }
    if slot >= LAST_BOOKING_TIME {
        return Err(ValidationError::AfterHours);
    }

    Ok(())
}

/// Create path only: a payload may start a reservation at `booked` and
/// nothing else. An absent or `null` status defaults to `booked`.
pub fn check_initial_status(fields: &Map<String, Value>) -> ValidationResult<ReservationStatus> {
    match fields.get("status") {
        None | Some(Value::Null) => Ok(ReservationStatus::Booked),
        Some(Value::String(given)) if given == ReservationStatus::Booked.as_str() => {
            Ok(ReservationStatus::Booked)
        }
        Some(Value::String(given)) => Err(ValidationError::InvalidStatus {
            status: given.clone(),
        }),
        Some(other) => Err(ValidationError::InvalidStatus {
            status: other.to_string(),
        }),
    }
}

// =============================================================================
// Character-Level Helpers
// =============================================================================

/// Whether a value counts as missing for the required-fields check.
fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.trim().is_empty(),
        Some(_) => false,
    }
}

/// Whether text is acceptable as a phone number or phone search: at least
/// one character, all of them digits, spaces, or hyphens.
pub fn is_phone_like(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || c == ' ' || c == '-')
}

fn is_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'-'
        && bytes[5..7].iter().all(u8::is_ascii_digit)
        && bytes[7] == b'-'
        && bytes[8..].iter().all(u8::is_ascii_digit)
}

fn is_time_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 5
        && bytes[..2].iter().all(u8::is_ascii_digit)
        && bytes[2] == b':'
        && bytes[3..].iter().all(u8::is_ascii_digit)
}

// =============================================================================
// Field Extraction
// =============================================================================

fn text_field(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn identity_field(fields: &Map<String, Value>) -> Option<String> {
    match fields.get("reservation_id") {
        Some(Value::String(id)) => Some(id.clone()),
        Some(Value::Number(id)) => Some(id.to_string()),
        _ => None,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
