//! # tables-store: Storage Seam and Reservation Operations
//!
//! This crate connects the pure decision core to persistence. It defines the
//! contract a storage backend must satisfy, ships an in-memory reference
//! implementation of that contract, and exposes the reservation operations
//! the API layer calls.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tables Data Flow                                 │
//! │                                                                         │
//! │  API handler (POST /reservations)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    tables-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────────┐      ┌───────────────────────────┐   │   │
//! │  │   │ ReservationService │      │  ReservationStore (trait) │   │   │
//! │  │   │  create / read     │─────►│  find_by_id, list_by_date │   │   │
//! │  │   │  list / search     │      │  search_by_phone          │   │   │
//! │  │   │  update / status   │      │  insert, save             │   │   │
//! │  │   └─────────┬──────────┘      └────────────┬──────────────┘   │   │
//! │  │             │ validate / guard              │                  │   │
//! │  └─────────────┼──────────────────────────────┼──────────────────┘   │
//! │                ▼                              ▼                        │
//! │          tables-core                 MemoryStore / real backend        │
//! │       (pure decision logic)          (owns the canonical records)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The `ReservationStore` contract
//! - [`memory`] - In-memory reference implementation
//! - [`service`] - Reservation operations (create, read, list, search,
//!   update, update_status)
//! - [`error`] - Store and service error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tables_core::clock::SystemClock;
//! use tables_store::{MemoryStore, ReservationService};
//!
//! let service = ReservationService::new(MemoryStore::new(), SystemClock);
//! let created = service.create(&payload).await?;
//! let seated = service.update_status(&created.reservation_id, "seated").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod memory;
pub mod service;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ServiceError, StoreError};
pub use memory::MemoryStore;
pub use service::ReservationService;
pub use store::ReservationStore;
