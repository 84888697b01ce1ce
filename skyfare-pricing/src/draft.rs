use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use skyfare_core::traveler::{ContactInfo, TravelerDetails};

/// Service-class bundle selected for the whole party. Premium adds a flat
/// per-passenger surcharge on top of the economy base fare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FareTier {
    #[default]
    Regular,
    Premium,
}

/// Independent add-on toggles, each mapping to a flat catalog charge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AddOnSelection {
    pub extra_baggage: bool,
    pub priority_checkin: bool,
    pub fast_track: bool,
    pub lounge_access: bool,
    pub price_lock: bool,
}

/// Everything a traveler has picked for one booking, before confirmation.
/// A plain value object: the shell mutates it and re-derives the quote;
/// nothing here is persisted until the booking is confirmed.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BookingDraft {
    pub fare_tier: FareTier,
    pub insurance: bool,
    pub travelers: Vec<TravelerDetails>,
    pub contact: ContactInfo,
    /// traveler key -> seat number, e.g. "0" -> "12C"
    pub seats: BTreeMap<String, String>,
    /// traveler key -> meal code, e.g. "0" -> "veg"
    pub meals: BTreeMap<String, String>,
    pub add_ons: AddOnSelection,
}

impl BookingDraft {
    pub fn selected_seats(&self) -> impl Iterator<Item = &str> {
        self.seats.values().map(String::as_str)
    }

    /// Meal codes that actually charge; "none" means no meal was picked.
    pub fn selected_meals(&self) -> impl Iterator<Item = &str> {
        self.meals
            .values()
            .map(String::as_str)
            .filter(|code| !code.is_empty() && *code != "none")
    }
}
