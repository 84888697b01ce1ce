use chrono::{NaiveDate, Timelike};
use serde::{Deserialize, Serialize};

use crate::flight::Flight;

#[derive(Debug, Clone, Deserialize)]
pub struct FlightQuery {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    pub passengers: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StopsFilter {
    #[default]
    Any,
    NonStop,
    OneStop,
    TwoPlus,
}

impl StopsFilter {
    fn matches(&self, stops: u32) -> bool {
        match self {
            StopsFilter::Any => true,
            StopsFilter::NonStop => stops == 0,
            StopsFilter::OneStop => stops == 1,
            StopsFilter::TwoPlus => stops >= 2,
        }
    }
}

/// Departure-time band, by local hour of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DepartureWindow {
    #[default]
    Any,
    /// 05:00 - 11:59
    Morning,
    /// 12:00 - 16:59
    Afternoon,
    /// 17:00 - 20:59
    Evening,
    /// 21:00 - 04:59
    Night,
}

impl DepartureWindow {
    fn matches(&self, hour: u32) -> bool {
        match self {
            DepartureWindow::Any => true,
            DepartureWindow::Morning => (5..12).contains(&hour),
            DepartureWindow::Afternoon => (12..17).contains(&hour),
            DepartureWindow::Evening => (17..21).contains(&hour),
            DepartureWindow::Night => hour >= 21 || hour < 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PriceRange {
    pub min_inr: i32,
    pub max_inr: i32,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SearchFilters {
    /// Carrier designators to include; empty selects all airlines.
    pub airlines: Vec<String>,
    pub price_range: Option<PriceRange>,
    pub stops: StopsFilter,
    pub departure_window: DepartureWindow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Price,
    Duration,
    Departure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Filter and order the catalog for one search. Cancelled flights and
/// flights without enough seats for the party never appear.
pub fn search_flights(
    flights: &[Flight],
    query: &FlightQuery,
    filters: &SearchFilters,
    sort_key: SortKey,
    sort_order: SortOrder,
) -> Vec<Flight> {
    let origin = query.origin.to_uppercase();
    let destination = query.destination.to_uppercase();

    let mut results: Vec<Flight> = flights
        .iter()
        .filter(|f| f.origin.eq_ignore_ascii_case(&origin))
        .filter(|f| f.destination.eq_ignore_ascii_case(&destination))
        .filter(|f| f.departure_time.date_naive() == query.date)
        .filter(|f| f.is_bookable(query.passengers))
        .filter(|f| filters.airlines.is_empty() || filters.airlines.contains(&f.airline.code))
        .filter(|f| match &filters.price_range {
            Some(range) => {
                f.fares.economy_inr >= range.min_inr && f.fares.economy_inr <= range.max_inr
            }
            None => true,
        })
        .filter(|f| filters.stops.matches(f.stops))
        .filter(|f| filters.departure_window.matches(f.departure_time.hour()))
        .cloned()
        .collect();

    results.sort_by_key(|f| match sort_key {
        SortKey::Price => f.fares.economy_inr as i64,
        SortKey::Duration => f.duration().num_minutes(),
        SortKey::Departure => f.departure_time.timestamp(),
    });

    if sort_order == SortOrder::Desc {
        results.reverse();
    }

    results
}
