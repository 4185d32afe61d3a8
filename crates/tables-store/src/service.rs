//! # Reservation Operations
//!
//! The operations the API layer calls, one per route. Each one is the same
//! shape: run the pure decision logic, then talk to the store.
//!
//! ## Operation Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Route                            Operation        Decision logic      │
//! │  ───────────────────────────────  ───────────────  ─────────────────── │
//! │  POST   /reservations             create           validate (Create)   │
//! │  GET    /reservations/:id         read             lookup only         │
//! │  GET    /reservations?date=       list_on_date     lookup only         │
//! │  GET    /reservations?mobile=     search           phone-shape check   │
//! │  PUT    /reservations/:id         update           validate (Update)   │
//! │  PUT    /reservations/:id/status  update_status    transition guard    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The service is generic over the store and the clock, so production wires
//! in a real backend and `SystemClock` while tests wire in [`crate::MemoryStore`]
//! and a fixed clock, with identical behavior.

use chrono::NaiveDate;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{ServiceError, ServiceResult};
use crate::store::ReservationStore;
use tables_core::clock::Clock;
use tables_core::status;
use tables_core::validation::{is_phone_like, validate, ValidationMode};
use tables_core::Reservation;

/// Reservation operations over a storage collaborator and a clock.
#[derive(Debug, Clone)]
pub struct ReservationService<S, C> {
    store: S,
    clock: C,
}

impl<S: ReservationStore, C: Clock> ReservationService<S, C> {
    /// Creates a service over the given store and clock.
    pub fn new(store: S, clock: C) -> Self {
        ReservationService { store, clock }
    }

    /// Validates a creation payload and persists it.
    ///
    /// The stored record starts at `booked`; the validator has already
    /// rejected anything else.
    pub async fn create(&self, payload: &Value) -> ServiceResult<Reservation> {
        let request = validate(payload, ValidationMode::Create, &self.clock)?;
        let created = self.store.insert(request).await?;

        info!(reservation_id = %created.reservation_id, "reservation created");
        Ok(created)
    }

    /// Fetches a reservation, turning absence into `NotFound`.
    pub async fn read(&self, id: &str) -> ServiceResult<Reservation> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(id))
    }

    /// All reservations on a date, ordered by time.
    pub async fn list_on_date(&self, date: NaiveDate) -> ServiceResult<Vec<Reservation>> {
        Ok(self.store.list_by_date(date).await?)
    }

    /// Reservations whose phone number contains the queried digits.
    ///
    /// An empty result is a success with an empty list, never an error.
    pub async fn search(&self, query: &str) -> ServiceResult<Vec<Reservation>> {
        if !is_phone_like(query) {
            return Err(ServiceError::InvalidSearch);
        }

        debug!(query = %query, "searching reservations by phone");
        Ok(self.store.search_by_phone(query).await?)
    }

    /// Validates an edit payload and saves it over the stored record.
    ///
    /// Identity and `created_at` always come from the stored record, and so
    /// does `status`: the lifecycle belongs to [`update_status`], an edit
    /// cannot move it.
    ///
    /// [`update_status`]: ReservationService::update_status
    pub async fn update(&self, id: &str, payload: &Value) -> ServiceResult<Reservation> {
        let stored = self.read(id).await?;
        let request = validate(payload, ValidationMode::Update, &self.clock)?;

        let mut updated = stored;
        updated.first_name = request.first_name;
        updated.last_name = request.last_name;
        updated.mobile_number = request.mobile_number;
        updated.reservation_date = request.reservation_date;
        updated.reservation_time = request.reservation_time;
        updated.people = request.people;

        let saved = self.store.save(updated).await?;
        info!(reservation_id = %saved.reservation_id, "reservation updated");
        Ok(saved)
    }

    /// Moves a reservation through its lifecycle.
    ///
    /// The guard reads the stored status, decides, and produces an updated
    /// copy; this method only persists what the guard hands back.
    pub async fn update_status(&self, id: &str, requested: &str) -> ServiceResult<Reservation> {
        let stored = self.read(id).await?;
        let updated = status::apply(&stored, requested)?;

        let saved = self.store.save(updated).await?;
        info!(reservation_id = %saved.reservation_id, status = %saved.status, "reservation status changed");
        Ok(saved)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use chrono::{NaiveDate, NaiveTime};
    use serde_json::json;
    use tables_core::clock::FixedClock;
    use tables_core::{ReservationStatus, TransitionError, ValidationError};

    /// Monday noon; test payloads book the following Friday.
    fn clock() -> FixedClock {
        FixedClock::at(
            NaiveDate::from_ymd_opt(2026, 3, 2)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
    }

    fn service() -> ReservationService<MemoryStore, FixedClock> {
        ReservationService::new(MemoryStore::new(), clock())
    }

    fn valid_payload() -> Value {
        json!({
            "first_name": "Rick",
            "last_name": "Sanchez",
            "mobile_number": "202-555-0164",
            "reservation_date": "2026-03-06",
            "reservation_time": "18:00",
            "people": 4,
        })
    }

    #[tokio::test]
    async fn test_create_persists_a_booked_reservation() {
        let service = service();
        let created = service.create(&valid_payload()).await.unwrap();

        assert_eq!(created.status, ReservationStatus::Booked);
        assert_eq!(created.people, 4);

        let found = service.read(&created.reservation_id).await.unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_create_rejects_and_persists_nothing() {
        let service = service();
        let mut payload = valid_payload();
        payload["reservation_date"] = json!("2026-03-03"); // Tuesday

        let err = service.create(&payload).await.unwrap_err();
        assert_eq!(err.http_status(), 400);
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::ClosedDay)
        ));

        let listed = service
            .list_on_date(NaiveDate::from_ymd_opt(2026, 3, 3).unwrap())
            .await
            .unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_read_of_missing_reservation_is_not_found() {
        let err = service().read("no-such-id").await.unwrap_err();
        assert_eq!(err.http_status(), 404);
        assert_eq!(err.to_string(), "reservation no-such-id does not exist");
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_edits_fields_but_never_status() {
        let service = service();
        let created = service.create(&valid_payload()).await.unwrap();
        let seated = service
            .update_status(&created.reservation_id, "seated")
            .await
            .unwrap();

        let mut payload = valid_payload();
        payload["people"] = json!(6);
        payload["first_name"] = json!("Summer");
        payload["status"] = json!("cancelled");
        payload["reservation_id"] = json!(created.reservation_id.clone());

        let updated = service
            .update(&created.reservation_id, &payload)
            .await
            .unwrap();

        assert_eq!(updated.people, 6);
        assert_eq!(updated.first_name, "Summer");
        assert_eq!(updated.status, seated.status);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.reservation_id, created.reservation_id);
    }

    #[tokio::test]
    async fn test_update_of_missing_reservation_is_not_found() {
        let err = service()
            .update("no-such-id", &valid_payload())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_still_runs_the_full_pipeline() {
        let service = service();
        let created = service.create(&valid_payload()).await.unwrap();

        let mut payload = valid_payload();
        payload["people"] = json!("6");

        let err = service
            .update(&created.reservation_id, &payload)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::InvalidPeople)
        ));
    }

    #[tokio::test]
    async fn test_status_walk_through_the_lifecycle() {
        let service = service();
        let created = service.create(&valid_payload()).await.unwrap();

        let seated = service
            .update_status(&created.reservation_id, "seated")
            .await
            .unwrap();
        assert_eq!(seated.status, ReservationStatus::Seated);

        let finished = service
            .update_status(&created.reservation_id, "finished")
            .await
            .unwrap();
        assert_eq!(finished.status, ReservationStatus::Finished);
    }

    #[tokio::test]
    async fn test_finished_reservations_cannot_move_and_stay_unchanged() {
        let service = service();
        let created = service.create(&valid_payload()).await.unwrap();
        service
            .update_status(&created.reservation_id, "finished")
            .await
            .unwrap();

        let err = service
            .update_status(&created.reservation_id, "seated")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Transition(TransitionError::AlreadyFinished)
        ));

        let stored = service.read(&created.reservation_id).await.unwrap();
        assert_eq!(stored.status, ReservationStatus::Finished);
    }

    #[tokio::test]
    async fn test_unknown_status_request_is_rejected() {
        let service = service();
        let created = service.create(&valid_payload()).await.unwrap();

        let err = service
            .update_status(&created.reservation_id, "bogus")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Transition(TransitionError::UnknownStatus { status })
                if status == "bogus"
        ));
    }

    #[tokio::test]
    async fn test_search_validates_its_query() {
        let service = service();
        let err = service.search("call me maybe").await.unwrap_err();
        assert_eq!(err.http_status(), 400);
        assert!(matches!(err, ServiceError::InvalidSearch));
    }

    #[tokio::test]
    async fn test_search_finds_by_partial_digits() {
        let service = service();
        service.create(&valid_payload()).await.unwrap();

        let mut other = valid_payload();
        other["mobile_number"] = json!("808 555 9999");
        other["reservation_time"] = json!("19:00");
        service.create(&other).await.unwrap();

        let found = service.search("202-555").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].mobile_number, "202-555-0164");

        let none = service.search("999 111").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_seat_time_listing_orders_by_time() {
        let service = service();
        let mut late = valid_payload();
        late["reservation_time"] = json!("20:00");
        let mut early = valid_payload();
        early["reservation_time"] = json!("11:00");

        service.create(&late).await.unwrap();
        service.create(&early).await.unwrap();

        let listed = service
            .list_on_date(NaiveDate::from_ymd_opt(2026, 3, 6).unwrap())
            .await
            .unwrap();
        let times: Vec<NaiveTime> = listed.iter().map(|r| r.reservation_time).collect();
        assert_eq!(
            times,
            vec![
                NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            ]
        );
    }
}
