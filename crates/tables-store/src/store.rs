//! # Storage Contract
//!
//! The interface a reservation storage backend must satisfy.
//!
//! ## Seam Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Who Implements What                                  │
//! │                                                                         │
//! │  ReservationService                                                    │
//! │       │  consumes the trait, never a concrete store                    │
//! │       ▼                                                                 │
//! │  ReservationStore (this trait)                                         │
//! │       ▲                    ▲                                            │
//! │       │                    │                                            │
//! │  MemoryStore          real backend (outside this repo)                 │
//! │  (tests, demos)       (SQL, document store, whatever ops picks)        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store owns identity and timestamps: callers hand it validated
//! requests and updated copies, and it alone decides ids, `created_at`,
//! and `updated_at`.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::StoreResult;
use tables_core::{Reservation, ReservationRequest};

/// Persistence collaborator for reservations.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Looks up a reservation by id. Absence is `Ok(None)`, not an error;
    /// the operation layer decides what absence means.
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Reservation>>;

    /// All reservations on a calendar date, ordered by reservation time.
    async fn list_by_date(&self, date: NaiveDate) -> StoreResult<Vec<Reservation>>;

    /// Reservations whose phone number contains the given digits, ignoring
    /// spaces and hyphens on both sides. Ordered by date, then time.
    async fn search_by_phone(&self, digits: &str) -> StoreResult<Vec<Reservation>>;

    /// Persists a validated request as a new record, assigning identity and
    /// both timestamps.
    async fn insert(&self, request: ReservationRequest) -> StoreResult<Reservation>;

    /// Replaces an existing record and refreshes `updated_at`. Unknown ids
    /// are [`crate::StoreError::NotFound`].
    async fn save(&self, record: Reservation) -> StoreResult<Reservation>;
}
