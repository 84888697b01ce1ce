use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use uuid::Uuid;

use skyfare_booking::models::Booking;
use skyfare_catalog::flight::{Aircraft, Airline, CabinFares, Flight, FlightStatus};
use skyfare_pricing::coupon::{standard_coupons, Coupon, CouponBook};
use skyfare_pricing::{BookingDraft, QuoteCalculator};

fn departure(base: NaiveDate, day_offset: i64, hour: u32, minute: u32) -> chrono::DateTime<Utc> {
    let date = base + chrono::Duration::days(day_offset);
    Utc.from_utc_datetime(&date.and_time(NaiveTime::from_hms_opt(hour, minute, 0).unwrap()))
}

/// Mock flight inventory, scheduled relative to `base` so searches on
/// "today" and the following days return results.
pub fn seed_flights(base: NaiveDate) -> Vec<Flight> {
    let flight = |number: &str,
                  airline_name: &str,
                  airline_code: &str,
                  model: &str,
                  capacity: i32,
                  origin: &str,
                  destination: &str,
                  day_offset: i64,
                  hour: u32,
                  minute: u32,
                  duration_min: i64,
                  stops: u32,
                  economy_inr: i32,
                  business_inr: i32,
                  seats_available: i32| {
        let dep = departure(base, day_offset, hour, minute);
        Flight {
            id: Uuid::new_v4(),
            flight_number: number.to_string(),
            airline: Airline {
                name: airline_name.to_string(),
                code: airline_code.to_string(),
            },
            aircraft: Aircraft {
                model: model.to_string(),
                capacity,
            },
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure_time: dep,
            arrival_time: dep + chrono::Duration::minutes(duration_min),
            stops,
            fares: CabinFares {
                economy_inr,
                business_inr,
            },
            seats_available,
            status: FlightStatus::Scheduled,
        }
    };

    vec![
        flight("6E-425", "IndiGo", "6E", "Airbus A320neo", 186, "DEL", "BOM", 0, 6, 10, 135, 0, 4899, 13650, 74),
        flight("AI-203", "Air India", "AI", "Airbus A321", 180, "DEL", "BOM", 0, 9, 30, 140, 0, 5420, 15071, 41),
        flight("UK-955", "Vistara", "UK", "Boeing 737-800", 189, "DEL", "BOM", 0, 18, 45, 130, 0, 6150, 16500, 58),
        flight("SG-801", "SpiceJet", "SG", "Boeing 737 MAX 8", 189, "DEL", "BOM", 0, 21, 55, 150, 1, 4350, 12200, 102),
        flight("6E-2134", "IndiGo", "6E", "Airbus A320neo", 186, "BOM", "DEL", 0, 7, 40, 135, 0, 5099, 14100, 66),
        flight("AI-560", "Air India", "AI", "Airbus A321", 180, "DEL", "BLR", 0, 8, 15, 165, 0, 5780, 15900, 52),
        flight("UK-810", "Vistara", "UK", "Airbus A320neo", 186, "DEL", "BLR", 1, 11, 20, 170, 0, 5340, 14800, 88),
        flight("6E-6205", "IndiGo", "6E", "Airbus A321neo", 222, "BLR", "DEL", 1, 16, 5, 165, 0, 4990, 13900, 120),
    ]
}

/// Seed coupon book: the codes advertised in the booking flow plus the
/// campaign codes managed from the airline dashboard.
pub fn seed_coupons() -> CouponBook {
    let mut coupons = standard_coupons();

    let campaign = |code: &str,
                    description: &str,
                    discount_inr: i32,
                    min_amount_inr: i32,
                    from: (i32, u32, u32),
                    till: (i32, u32, u32),
                    is_active: bool| Coupon {
        code: code.to_string(),
        description: description.to_string(),
        discount_inr,
        min_amount_inr,
        valid_from: NaiveDate::from_ymd_opt(from.0, from.1, from.2),
        valid_till: NaiveDate::from_ymd_opt(till.0, till.1, till.2),
        is_active,
    };

    coupons.push(campaign(
        "WELCOME50",
        "₹50 off for new travelers",
        50,
        1000,
        (2026, 1, 1),
        (2026, 12, 31),
        true,
    ));
    coupons.push(campaign(
        "SAVE20",
        "Flat ₹20 discount on domestic flights",
        20,
        500,
        (2026, 2, 1),
        (2026, 12, 31),
        true,
    ));
    coupons.push(campaign(
        "FESTIVE30",
        "₹30 off during the festive window",
        30,
        800,
        (2026, 3, 1),
        (2026, 3, 15),
        false,
    ));
    coupons.push(campaign(
        "BUSINESS100",
        "₹100 off business-heavy routes",
        100,
        7500,
        (2026, 2, 10),
        (2026, 11, 10),
        true,
    ));

    CouponBook::with_coupons(coupons)
}

/// A minimal confirmed booking for tests and demos.
pub fn sample_booking(customer_id: &str) -> Booking {
    use skyfare_core::traveler::{ContactInfo, TravelerDetails};

    let base = Utc::now().date_naive();
    let flight = seed_flights(base).remove(0);
    let draft = BookingDraft {
        travelers: vec![TravelerDetails {
            first_name: "Ananya".to_string(),
            last_name: "Sharma".to_string(),
            gender: "female".to_string(),
            date_of_birth: "1992-04-17".to_string(),
        }],
        contact: ContactInfo::new("ananya@example.com", "9876543210"),
        ..Default::default()
    };
    let quote = QuoteCalculator::default().compute(
        flight.fares.economy_inr,
        1,
        &draft,
        None,
        &CouponBook::new(),
        base,
    );
    Booking::new(
        skyfare_core::pnr::generate(),
        customer_id.to_string(),
        flight.id,
        flight.flight_number,
        draft,
        quote,
    )
}
