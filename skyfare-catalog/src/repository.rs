use async_trait::async_trait;
use uuid::Uuid;

use crate::flight::Flight;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Repository trait for flight inventory access.
#[async_trait]
pub trait FlightRepository: Send + Sync {
    async fn get_flight(&self, id: Uuid) -> Result<Option<Flight>, BoxError>;

    async fn list_flights(&self) -> Result<Vec<Flight>, BoxError>;

    async fn upsert_flight(&self, flight: &Flight) -> Result<(), BoxError>;

    async fn delete_flight(&self, id: Uuid) -> Result<bool, BoxError>;

    /// Atomically take `count` seats off a flight. Fails when the flight
    /// is unknown or fewer seats remain.
    async fn reserve_seats(&self, id: Uuid, count: i32) -> Result<(), BoxError>;

    /// Return seats to a flight, e.g. on cancellation.
    async fn release_seats(&self, id: Uuid, count: i32) -> Result<(), BoxError>;
}
