use std::sync::Arc;

use chrono::Utc;
use skyfare_booking::{BookingManager, BookingRepository};
use skyfare_catalog::FlightRepository;
use skyfare_pricing::{CouponRepository, QuoteCalculator};
use skyfare_store::app_config::BusinessRules;
use skyfare_store::{EventLog, InMemoryBookingRepo, InMemoryCouponRepo, InMemoryFlightRepo};

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub expiration: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub flights: Arc<dyn FlightRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub coupons: Arc<dyn CouponRepository>,
    pub events: Arc<EventLog>,
    pub calculator: Arc<QuoteCalculator>,
    pub booking_manager: Arc<BookingManager>,
    pub business_rules: BusinessRules,
    pub auth: AuthConfig,
}

impl AppState {
    /// State backed by the in-memory repositories, seeded with mock data
    /// scheduled from today.
    pub fn seeded(auth: AuthConfig, business_rules: BusinessRules) -> Self {
        let base = Utc::now().date_naive();
        Self {
            flights: Arc::new(InMemoryFlightRepo::new(skyfare_store::seed::seed_flights(base))),
            bookings: Arc::new(InMemoryBookingRepo::new()),
            coupons: Arc::new(InMemoryCouponRepo::new(skyfare_store::seed::seed_coupons())),
            events: Arc::new(EventLog::default()),
            calculator: Arc::new(QuoteCalculator::new(business_rules.pricing_config())),
            booking_manager: Arc::new(BookingManager::new(QuoteCalculator::new(
                business_rules.pricing_config(),
            ))),
            business_rules,
            auth,
        }
    }
}
