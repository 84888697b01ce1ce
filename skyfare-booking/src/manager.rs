use std::collections::HashMap;

use chrono::NaiveDate;
use skyfare_catalog::seatmap;
use skyfare_catalog::Flight;
use skyfare_core::validation::validate_draft;
use skyfare_pricing::{BookingDraft, CouponBook, QuoteCalculator};

use crate::models::{Booking, BookingStatus};

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Booking draft failed validation")]
    Validation(HashMap<String, String>),

    #[error("Flight {flight_number} cannot be booked for {requested} passengers")]
    NotBookable {
        flight_number: String,
        requested: u32,
    },

    #[error("Seat {0} is not on this aircraft")]
    UnknownSeat(String),

    #[error("Invalid state transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}

/// Confirms drafts into bookings and guards lifecycle transitions.
pub struct BookingManager {
    calculator: QuoteCalculator,
}

impl BookingManager {
    pub fn new(calculator: QuoteCalculator) -> Self {
        Self { calculator }
    }

    /// Validate, price and freeze a draft. The party size is the traveler
    /// list; seat inventory is the caller's to reserve before saving.
    pub fn confirm(
        &self,
        customer_id: String,
        flight: &Flight,
        draft: BookingDraft,
        coupon_code: Option<&str>,
        book: &CouponBook,
        today: NaiveDate,
    ) -> Result<Booking, BookingError> {
        let errors = validate_draft(&draft.travelers, &draft.contact);
        if !errors.is_empty() {
            return Err(BookingError::Validation(errors));
        }

        let passengers = draft.travelers.len() as u32;
        if !flight.is_bookable(passengers) {
            return Err(BookingError::NotBookable {
                flight_number: flight.flight_number.clone(),
                requested: passengers,
            });
        }

        for seat in draft.selected_seats() {
            if seatmap::parse_seat_number(seat).is_none() {
                return Err(BookingError::UnknownSeat(seat.to_string()));
            }
        }

        let quote = self.calculator.compute(
            flight.fares.economy_inr,
            passengers,
            &draft,
            coupon_code,
            book,
            today,
        );

        let pnr = skyfare_core::pnr::generate();
        Ok(Booking::new(
            pnr,
            customer_id,
            flight.id,
            flight.flight_number.clone(),
            draft,
            quote,
        ))
    }

    /// Transition: Confirmed → Cancelled.
    pub fn cancel(&self, booking: &mut Booking) -> Result<(), BookingError> {
        if booking.status != BookingStatus::Confirmed {
            return Err(BookingError::InvalidTransition {
                from: format!("{:?}", booking.status),
                to: "CANCELLED".to_string(),
            });
        }
        booking.update_status(BookingStatus::Cancelled);
        Ok(())
    }
}

impl Default for BookingManager {
    fn default() -> Self {
        Self::new(QuoteCalculator::default())
    }
}
