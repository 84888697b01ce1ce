use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlightStatus {
    Scheduled,
    Delayed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Airline {
    pub name: String,
    /// Two-letter carrier designator, e.g. "6E"
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aircraft {
    pub model: String,
    pub capacity: i32,
}

/// Published per-cabin fares in whole INR.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CabinFares {
    pub economy_inr: i32,
    pub business_inr: i32,
}

/// A sellable scheduled flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    pub id: Uuid,
    pub flight_number: String,
    pub airline: Airline,
    pub aircraft: Aircraft,
    pub origin: String,
    pub destination: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub stops: u32,
    pub fares: CabinFares,
    pub seats_available: i32,
    pub status: FlightStatus,
}

impl Flight {
    pub fn duration(&self) -> Duration {
        self.arrival_time - self.departure_time
    }

    /// Whether this flight can still be sold to a party of `passengers`.
    pub fn is_bookable(&self, passengers: u32) -> bool {
        self.status != FlightStatus::Cancelled && self.seats_available >= passengers as i32
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Flight not found: {0}")]
    FlightNotFound(String),

    #[error("Flight {flight_number} has {available} seats left, {requested} requested")]
    InsufficientSeats {
        flight_number: String,
        available: i32,
        requested: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(seats: i32, status: FlightStatus) -> Flight {
        let departure = Utc::now();
        Flight {
            id: Uuid::new_v4(),
            flight_number: "6E-425".to_string(),
            airline: Airline {
                name: "IndiGo".to_string(),
                code: "6E".to_string(),
            },
            aircraft: Aircraft {
                model: "Airbus A320neo".to_string(),
                capacity: 186,
            },
            origin: "DEL".to_string(),
            destination: "BOM".to_string(),
            departure_time: departure,
            arrival_time: departure + Duration::minutes(135),
            stops: 0,
            fares: CabinFares {
                economy_inr: 5000,
                business_inr: 14200,
            },
            seats_available: seats,
            status,
        }
    }

    #[test]
    fn cancelled_flight_is_not_bookable() {
        assert!(!flight(100, FlightStatus::Cancelled).is_bookable(1));
    }

    #[test]
    fn bookable_respects_remaining_seats() {
        let f = flight(2, FlightStatus::Scheduled);
        assert!(f.is_bookable(2));
        assert!(!f.is_bookable(3));
    }
}
