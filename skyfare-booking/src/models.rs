use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use skyfare_pricing::{BookingDraft, Quote};

/// Booking lifecycle states.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

/// A confirmed reservation: the draft frozen together with the quote it
/// was priced at and the PNR issued for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    /// Booking reference printed on the ticket.
    pub pnr: String,
    pub customer_id: String,
    pub flight_id: Uuid,
    pub flight_number: String,
    pub draft: BookingDraft,
    pub quote: Quote,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(
        pnr: String,
        customer_id: String,
        flight_id: Uuid,
        flight_number: String,
        draft: BookingDraft,
        quote: Quote,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            pnr,
            customer_id,
            flight_id,
            flight_number,
            draft,
            quote,
            status: BookingStatus::Confirmed,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn passenger_count(&self) -> u32 {
        self.draft.travelers.len() as u32
    }

    pub fn update_status(&mut self, status: BookingStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}
