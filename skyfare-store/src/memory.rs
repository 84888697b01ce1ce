use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use skyfare_booking::models::{Booking, BookingStatus};
use skyfare_booking::repository::BookingRepository;
use skyfare_catalog::flight::{CatalogError, Flight};
use skyfare_catalog::repository::FlightRepository;
use skyfare_pricing::coupon::{Coupon, CouponBook};
use skyfare_pricing::repository::CouponRepository;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Flight inventory held in memory. The whole system is seeded from mock
/// data and owns no persistence; seat counts still mutate under one write
/// lock so reservations stay consistent.
#[derive(Default)]
pub struct InMemoryFlightRepo {
    flights: RwLock<HashMap<Uuid, Flight>>,
}

impl InMemoryFlightRepo {
    pub fn new(seed: Vec<Flight>) -> Self {
        Self {
            flights: RwLock::new(seed.into_iter().map(|f| (f.id, f)).collect()),
        }
    }
}

#[async_trait]
impl FlightRepository for InMemoryFlightRepo {
    async fn get_flight(&self, id: Uuid) -> Result<Option<Flight>, BoxError> {
        Ok(self.flights.read().await.get(&id).cloned())
    }

    async fn list_flights(&self) -> Result<Vec<Flight>, BoxError> {
        let mut flights: Vec<Flight> = self.flights.read().await.values().cloned().collect();
        flights.sort_by(|a, b| a.departure_time.cmp(&b.departure_time));
        Ok(flights)
    }

    async fn upsert_flight(&self, flight: &Flight) -> Result<(), BoxError> {
        self.flights.write().await.insert(flight.id, flight.clone());
        Ok(())
    }

    async fn delete_flight(&self, id: Uuid) -> Result<bool, BoxError> {
        Ok(self.flights.write().await.remove(&id).is_some())
    }

    async fn reserve_seats(&self, id: Uuid, count: i32) -> Result<(), BoxError> {
        let mut flights = self.flights.write().await;
        let flight = flights
            .get_mut(&id)
            .ok_or_else(|| CatalogError::FlightNotFound(id.to_string()))?;
        if flight.seats_available < count {
            return Err(CatalogError::InsufficientSeats {
                flight_number: flight.flight_number.clone(),
                available: flight.seats_available,
                requested: count,
            }
            .into());
        }
        flight.seats_available -= count;
        Ok(())
    }

    async fn release_seats(&self, id: Uuid, count: i32) -> Result<(), BoxError> {
        let mut flights = self.flights.write().await;
        let flight = flights
            .get_mut(&id)
            .ok_or_else(|| CatalogError::FlightNotFound(id.to_string()))?;
        flight.seats_available = (flight.seats_available + count).min(flight.aircraft.capacity);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryBookingRepo {
    bookings: RwLock<HashMap<Uuid, Booking>>,
}

impl InMemoryBookingRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepo {
    async fn save_booking(&self, booking: &Booking) -> Result<(), BoxError> {
        self.bookings
            .write()
            .await
            .insert(booking.id, booking.clone());
        Ok(())
    }

    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>, BoxError> {
        Ok(self.bookings.read().await.get(&id).cloned())
    }

    async fn list_bookings(&self, customer_id: &str) -> Result<Vec<Booking>, BoxError> {
        let mut bookings: Vec<Booking> = self
            .bookings
            .read()
            .await
            .values()
            .filter(|b| b.customer_id == customer_id)
            .cloned()
            .collect();
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(bookings)
    }

    async fn update_status(&self, id: Uuid, status: BookingStatus) -> Result<(), BoxError> {
        let mut bookings = self.bookings.write().await;
        let booking = bookings
            .get_mut(&id)
            .ok_or_else(|| skyfare_core::CoreError::NotFound(format!("booking {}", id)))?;
        booking.update_status(status);
        Ok(())
    }
}

pub struct InMemoryCouponRepo {
    book: RwLock<CouponBook>,
}

impl InMemoryCouponRepo {
    pub fn new(book: CouponBook) -> Self {
        Self {
            book: RwLock::new(book),
        }
    }
}

#[async_trait]
impl CouponRepository for InMemoryCouponRepo {
    async fn get_coupon(&self, code: &str) -> Result<Option<Coupon>, BoxError> {
        Ok(self.book.read().await.get(code).cloned())
    }

    async fn list_coupons(&self) -> Result<Vec<Coupon>, BoxError> {
        Ok(self.book.read().await.all().into_iter().cloned().collect())
    }

    async fn save_coupon(&self, coupon: &Coupon) -> Result<(), BoxError> {
        self.book.write().await.insert(coupon.clone());
        Ok(())
    }

    async fn delete_coupon(&self, code: &str) -> Result<bool, BoxError> {
        Ok(self.book.write().await.remove(code).is_some())
    }

    async fn coupon_book(&self) -> Result<CouponBook, BoxError> {
        Ok(self.book.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn seat_reservation_is_checked_and_decremented_atomically() {
        let base = NaiveDate::from_ymd_opt(2026, 9, 14).unwrap();
        let repo = InMemoryFlightRepo::new(seed::seed_flights(base));
        let flights = repo.list_flights().await.unwrap();
        let flight = &flights[0];
        let before = flight.seats_available;

        repo.reserve_seats(flight.id, 2).await.unwrap();
        let after = repo.get_flight(flight.id).await.unwrap().unwrap();
        assert_eq!(after.seats_available, before - 2);

        let err = repo.reserve_seats(flight.id, before).await.unwrap_err();
        assert!(err.to_string().contains("seats left"));
    }

    #[tokio::test]
    async fn released_seats_never_exceed_capacity() {
        let base = NaiveDate::from_ymd_opt(2026, 9, 14).unwrap();
        let repo = InMemoryFlightRepo::new(seed::seed_flights(base));
        let flight = repo.list_flights().await.unwrap().remove(0);

        repo.release_seats(flight.id, 10_000).await.unwrap();
        let after = repo.get_flight(flight.id).await.unwrap().unwrap();
        assert_eq!(after.seats_available, after.aircraft.capacity);
    }

    #[tokio::test]
    async fn bookings_list_by_customer() {
        let repo = InMemoryBookingRepo::new();
        let booking = seed::sample_booking("cust-7");
        repo.save_booking(&booking).await.unwrap();

        assert_eq!(repo.list_bookings("cust-7").await.unwrap().len(), 1);
        assert!(repo.list_bookings("someone-else").await.unwrap().is_empty());
    }
}
