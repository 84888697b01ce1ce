use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineCategory {
    BaseFare,
    FareUpgrade,
    Taxes,
    Insurance,
    Seats,
    Meals,
    AddOn,
    Discount,
}

/// One display row of the price breakdown. Discount amounts are negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteLine {
    pub category: LineCategory,
    pub label: String,
    pub amount_inr: i32,
}

/// A fully derived price for a booking draft. Pure data; recomputed from
/// scratch on every change to the draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub lines: Vec<QuoteLine>,
    /// Base fare plus fare-upgrade surcharge, before taxes and add-ons.
    pub subtotal_inr: i32,
    pub taxes_inr: i32,
    pub add_ons_inr: i32,
    pub discount_inr: i32,
    pub total_inr: i32,
    pub currency: String,
    pub applied_coupon: Option<String>,
    /// Why the requested coupon did not apply, if one was requested.
    pub coupon_error: Option<String>,
}

impl Quote {
    /// Total before the coupon discount.
    pub fn pre_discount_inr(&self) -> i32 {
        self.subtotal_inr + self.taxes_inr + self.add_ons_inr
    }
}
