use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Booking, BookingStatus};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Repository trait for booking data access.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn save_booking(&self, booking: &Booking) -> Result<(), BoxError>;

    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>, BoxError>;

    async fn list_bookings(&self, customer_id: &str) -> Result<Vec<Booking>, BoxError>;

    async fn update_status(&self, id: Uuid, status: BookingStatus) -> Result<(), BoxError>;
}
