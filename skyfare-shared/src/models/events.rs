use uuid::Uuid;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct BookingConfirmedEvent {
    pub booking_id: Uuid,
    pub pnr: String,
    pub flight_id: Uuid,
    pub customer_id: String,
    pub total_inr: i32,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct BookingCancelledEvent {
    pub booking_id: Uuid,
    pub pnr: String,
    pub customer_id: String,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct CouponRedeemedEvent {
    pub code: String,
    pub booking_id: Uuid,
    pub discount_inr: i32,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct QuoteComputedEvent {
    pub flight_id: Uuid,
    pub customer_id: Option<String>,
    pub passengers: u32,
    pub total_inr: i32,
    pub timestamp: i64,
}
