pub mod models;
pub mod manager;
pub mod repository;

pub use models::{Booking, BookingStatus};
pub use manager::{BookingError, BookingManager};
pub use repository::BookingRepository;
