use rand::Rng;
use serde::{Deserialize, Serialize};

/// A contiguous block of rows sold at one seat price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatSection {
    pub name: String,
    pub first_row: u32,
    pub last_row: u32,
    pub price_inr: i32,
}

impl SeatSection {
    pub fn contains_row(&self, row: u32) -> bool {
        row >= self.first_row && row <= self.last_row
    }
}

/// Narrow-body cabin: Business rows 1-3, Premium Economy 4-7, Economy 8-32.
pub fn standard_sections() -> Vec<SeatSection> {
    vec![
        SeatSection {
            name: "Business Class".to_string(),
            first_row: 1,
            last_row: 3,
            price_inr: 2500,
        },
        SeatSection {
            name: "Premium Economy".to_string(),
            first_row: 4,
            last_row: 7,
            price_inr: 1200,
        },
        SeatSection {
            name: "Economy".to_string(),
            first_row: 8,
            last_row: 32,
            price_inr: 600,
        },
    ]
}

pub const SEAT_LETTERS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

/// Split a seat number like "12C" into row and letter. Returns None for
/// seats outside the standard cabin.
pub fn parse_seat_number(number: &str) -> Option<(u32, char)> {
    let letter = number.chars().last()?.to_ascii_uppercase();
    if !SEAT_LETTERS.contains(&letter) {
        return None;
    }
    let row: u32 = number[..number.len() - 1].parse().ok()?;
    let sections = standard_sections();
    if sections.iter().any(|s| s.contains_row(row)) {
        Some((row, letter))
    } else {
        None
    }
}

/// Seat-selection charge for a seat number, by the section its row falls
/// in. None for seats that do not exist on the aircraft.
pub fn seat_price_inr(number: &str) -> Option<i32> {
    let (row, _) = parse_seat_number(number)?;
    standard_sections()
        .into_iter()
        .find(|s| s.contains_row(row))
        .map(|s| s.price_inr)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    pub number: String,
    pub row: u32,
    pub letter: char,
    pub section: String,
    pub price_inr: i32,
    pub occupied: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatMap {
    pub aircraft_model: String,
    /// Seats per row, aisle-separated, e.g. "3-3"
    pub layout: String,
    pub sections: Vec<SeatSection>,
    pub seats: Vec<Seat>,
}

impl SeatMap {
    pub fn seat(&self, number: &str) -> Option<&Seat> {
        self.seats.iter().find(|s| s.number == number)
    }
}

/// Produces display seat maps. Occupancy is mock data rolled per seat; the
/// RNG is injected so tests can seed it.
pub struct SeatMapGenerator {
    occupancy_probability: f64,
}

impl SeatMapGenerator {
    pub fn new(occupancy_probability: f64) -> Self {
        Self {
            occupancy_probability,
        }
    }

    pub fn generate<R: Rng>(&self, aircraft_model: &str, rng: &mut R) -> SeatMap {
        let sections = standard_sections();
        let mut seats = Vec::new();

        for section in &sections {
            for row in section.first_row..=section.last_row {
                for letter in SEAT_LETTERS {
                    seats.push(Seat {
                        number: format!("{}{}", row, letter),
                        row,
                        letter,
                        section: section.name.clone(),
                        price_inr: section.price_inr,
                        occupied: rng.gen_bool(self.occupancy_probability),
                    });
                }
            }
        }

        SeatMap {
            aircraft_model: aircraft_model.to_string(),
            layout: "3-3".to_string(),
            sections,
            seats,
        }
    }
}

impl Default for SeatMapGenerator {
    fn default() -> Self {
        Self::new(0.3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn seat_prices_follow_sections() {
        assert_eq!(seat_price_inr("2A"), Some(2500));
        assert_eq!(seat_price_inr("5F"), Some(1200));
        assert_eq!(seat_price_inr("20C"), Some(600));
        assert_eq!(seat_price_inr("33A"), None);
        assert_eq!(seat_price_inr("12G"), None);
    }

    #[test]
    fn generated_map_covers_all_rows() {
        let mut rng = StdRng::seed_from_u64(1);
        let map = SeatMapGenerator::default().generate("Boeing 737-800", &mut rng);
        // 32 rows x 6 letters
        assert_eq!(map.seats.len(), 192);
        assert!(map.seat("1A").is_some());
        assert!(map.seat("32F").is_some());
        assert_eq!(map.seat("4B").unwrap().section, "Premium Economy");
    }

    #[test]
    fn occupancy_is_deterministic_under_a_seed() {
        let a = SeatMapGenerator::default().generate("A320", &mut StdRng::seed_from_u64(9));
        let b = SeatMapGenerator::default().generate("A320", &mut StdRng::seed_from_u64(9));
        let occupied = |m: &SeatMap| {
            m.seats
                .iter()
                .filter(|s| s.occupied)
                .map(|s| s.number.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(occupied(&a), occupied(&b));
    }

    #[test]
    fn zero_probability_leaves_cabin_empty() {
        let map = SeatMapGenerator::new(0.0).generate("A320", &mut StdRng::seed_from_u64(3));
        assert!(map.seats.iter().all(|s| !s.occupied));
    }
}
