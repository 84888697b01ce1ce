pub mod app_config;
pub mod memory;
pub mod seed;
pub mod events;

pub use events::EventLog;
pub use memory::{InMemoryBookingRepo, InMemoryCouponRepo, InMemoryFlightRepo};
