//! # In-Memory Store
//!
//! Reference implementation of [`ReservationStore`] over a `HashMap`.
//!
//! This is the store the operation-layer tests run against, and a usable
//! backend for demos and single-process experiments. It is not durable:
//! records live exactly as long as the process does.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::store::ReservationStore;
use tables_core::{Reservation, ReservationRequest};

/// In-memory reservation store, safe to share across tasks.
#[derive(Debug, Default)]
pub struct MemoryStore {
    reservations: RwLock<HashMap<String, Reservation>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

#[async_trait]
impl ReservationStore for MemoryStore {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Reservation>> {
        let reservations = self.reservations.read().await;
        Ok(reservations.get(id).cloned())
    }

    async fn list_by_date(&self, date: NaiveDate) -> StoreResult<Vec<Reservation>> {
        let reservations = self.reservations.read().await;

        let mut matches: Vec<Reservation> = reservations
            .values()
            .filter(|r| r.reservation_date == date)
            .cloned()
            .collect();
        matches.sort_by_key(|r| r.reservation_time);

        Ok(matches)
    }

    async fn search_by_phone(&self, digits: &str) -> StoreResult<Vec<Reservation>> {
        let needle = digits_of(digits);
        let reservations = self.reservations.read().await;

        let mut matches: Vec<Reservation> = reservations
            .values()
            .filter(|r| digits_of(&r.mobile_number).contains(&needle))
            .cloned()
            .collect();
        matches.sort_by_key(|r| (r.reservation_date, r.reservation_time));

        Ok(matches)
    }

    async fn insert(&self, request: ReservationRequest) -> StoreResult<Reservation> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        debug!(reservation_id = %id, date = %request.reservation_date, "inserting reservation");

        let record = Reservation {
            reservation_id: id.clone(),
            first_name: request.first_name,
            last_name: request.last_name,
            mobile_number: request.mobile_number,
            reservation_date: request.reservation_date,
            reservation_time: request.reservation_time,
            people: request.people,
            status: request.status,
            created_at: now,
            updated_at: now,
        };

        let mut reservations = self.reservations.write().await;
        reservations.insert(id, record.clone());

        Ok(record)
    }

    async fn save(&self, mut record: Reservation) -> StoreResult<Reservation> {
        let mut reservations = self.reservations.write().await;

        if !reservations.contains_key(&record.reservation_id) {
            return Err(StoreError::not_found(record.reservation_id));
        }

        debug!(reservation_id = %record.reservation_id, status = %record.status, "saving reservation");

        record.updated_at = Utc::now();
        reservations.insert(record.reservation_id.clone(), record.clone());

        Ok(record)
    }
}

/// Strips everything but digits, so `"(202) 555-0164"` and `"2025550164"`
/// compare equal.
fn digits_of(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use tables_core::ReservationStatus;

    fn request(first_name: &str, date: (i32, u32, u32), time: (u32, u32), phone: &str) -> ReservationRequest {
        ReservationRequest {
            first_name: first_name.to_string(),
            last_name: "Smith".to_string(),
            mobile_number: phone.to_string(),
            reservation_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            reservation_time: NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap(),
            people: 2,
            status: ReservationStatus::Booked,
            reservation_id: None,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_identity_and_timestamps() {
        let store = MemoryStore::new();
        let created = store
            .insert(request("Beth", (2026, 3, 6), (18, 0), "202-555-0164"))
            .await
            .unwrap();

        assert!(!created.reservation_id.is_empty());
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(created.status, ReservationStatus::Booked);

        let found = store.find_by_id(&created.reservation_id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_find_by_id_misses_are_none() {
        let store = MemoryStore::new();
        assert_eq!(store.find_by_id("no-such-id").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_by_date_orders_by_time() {
        let store = MemoryStore::new();
        store
            .insert(request("Late", (2026, 3, 6), (20, 0), "111"))
            .await
            .unwrap();
        store
            .insert(request("Early", (2026, 3, 6), (11, 0), "222"))
            .await
            .unwrap();
        store
            .insert(request("OtherDay", (2026, 3, 7), (12, 0), "333"))
            .await
            .unwrap();

        let listed = store
            .list_by_date(NaiveDate::from_ymd_opt(2026, 3, 6).unwrap())
            .await
            .unwrap();

        let names: Vec<&str> = listed.iter().map(|r| r.first_name.as_str()).collect();
        assert_eq!(names, vec!["Early", "Late"]);
    }

    #[tokio::test]
    async fn test_search_matches_on_stripped_digits() {
        let store = MemoryStore::new();
        store
            .insert(request("Hit", (2026, 3, 6), (18, 0), "202-555-0164"))
            .await
            .unwrap();
        store
            .insert(request("Miss", (2026, 3, 6), (19, 0), "808 555 9999"))
            .await
            .unwrap();

        let found = store.search_by_phone("5550164").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].first_name, "Hit");

        // Separators in the query are ignored too.
        let found = store.search_by_phone("555-0164").await.unwrap();
        assert_eq!(found.len(), 1);

        // An empty query matches everything, ordered by date and time.
        let found = store.search_by_phone("").await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].first_name, "Hit");
    }

    #[tokio::test]
    async fn test_save_replaces_and_refreshes_updated_at() {
        let store = MemoryStore::new();
        let created = store
            .insert(request("Beth", (2026, 3, 6), (18, 0), "202-555-0164"))
            .await
            .unwrap();

        let mut edited = created.clone();
        edited.people = 6;
        let saved = store.save(edited).await.unwrap();

        assert_eq!(saved.people, 6);
        assert_eq!(saved.created_at, created.created_at);
        assert!(saved.updated_at >= created.updated_at);

        let found = store.find_by_id(&created.reservation_id).await.unwrap().unwrap();
        assert_eq!(found.people, 6);
    }

    #[tokio::test]
    async fn test_save_of_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        let mut record = store
            .insert(request("Beth", (2026, 3, 6), (18, 0), "202-555-0164"))
            .await
            .unwrap();
        record.reservation_id = "no-such-id".to_string();

        assert!(matches!(
            store.save(record).await,
            Err(StoreError::NotFound { id }) if id == "no-such-id"
        ));
    }
}
