use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use skyfare_catalog::ancillary::{AddOnCatalog, AddOnType, MealCatalog};
use skyfare_catalog::seatmap;

use crate::coupon::{CouponBook, CouponError};
use crate::draft::{BookingDraft, FareTier};
use crate::quote::{LineCategory, Quote, QuoteLine};

/// Rates that scale with the party rather than coming off the add-on
/// catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    pub tax_rate: f64,
    /// Flat premium-tier surcharge per passenger.
    pub premium_surcharge_inr: i32,
    /// Travel insurance premium per traveler.
    pub insurance_per_traveler_inr: i32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: 0.18,
            premium_surcharge_inr: 500,
            insurance_per_traveler_inr: 379,
        }
    }
}

/// Derives a booking quote from a draft. Pure: same inputs, same quote.
/// The shell re-invokes this on every draft change instead of patching a
/// running total.
pub struct QuoteCalculator {
    config: PricingConfig,
    add_ons: AddOnCatalog,
    meals: MealCatalog,
}

impl QuoteCalculator {
    pub fn new(config: PricingConfig) -> Self {
        Self {
            config,
            add_ons: AddOnCatalog::standard(),
            meals: MealCatalog::standard(),
        }
    }

    pub fn with_catalogs(config: PricingConfig, add_ons: AddOnCatalog, meals: MealCatalog) -> Self {
        Self {
            config,
            add_ons,
            meals,
        }
    }

    /// Price a draft against a per-passenger base fare.
    ///
    /// `coupon_code` is resolved against `book` as of `today`; a coupon
    /// that fails any gate never aborts the computation — the quote is
    /// produced without the discount and carries the reason.
    pub fn compute(
        &self,
        base_fare_inr: i32,
        passengers: u32,
        draft: &BookingDraft,
        coupon_code: Option<&str>,
        book: &CouponBook,
        today: NaiveDate,
    ) -> Quote {
        let pax = passengers as i32;
        let mut lines = Vec::new();

        let base = base_fare_inr * pax;
        lines.push(QuoteLine {
            category: LineCategory::BaseFare,
            label: format!("Base fare ({} × ₹{})", passengers, base_fare_inr),
            amount_inr: base,
        });

        let upgrade = match draft.fare_tier {
            FareTier::Regular => 0,
            FareTier::Premium => self.config.premium_surcharge_inr * pax,
        };
        if upgrade > 0 {
            lines.push(QuoteLine {
                category: LineCategory::FareUpgrade,
                label: format!("Premium upgrade ({} passengers)", passengers),
                amount_inr: upgrade,
            });
        }

        let subtotal = base + upgrade;

        let taxes = (subtotal as f64 * self.config.tax_rate).round() as i32;
        lines.push(QuoteLine {
            category: LineCategory::Taxes,
            label: "Taxes & fees".to_string(),
            amount_inr: taxes,
        });

        let mut add_ons_total = 0;

        if draft.insurance {
            let insurance = self.config.insurance_per_traveler_inr * pax;
            add_ons_total += insurance;
            lines.push(QuoteLine {
                category: LineCategory::Insurance,
                label: format!("Travel insurance ({} travelers)", passengers),
                amount_inr: insurance,
            });
        }

        let seat_charges: Vec<i32> = draft
            .selected_seats()
            .filter_map(seatmap::seat_price_inr)
            .collect();
        if !seat_charges.is_empty() {
            let seats_total: i32 = seat_charges.iter().sum();
            add_ons_total += seats_total;
            lines.push(QuoteLine {
                category: LineCategory::Seats,
                label: format!("Seat selection ({} seats)", seat_charges.len()),
                amount_inr: seats_total,
            });
        }

        let meal_charges: Vec<i32> = draft
            .selected_meals()
            .map(|code| self.meals.price_of(code))
            .collect();
        if !meal_charges.is_empty() {
            let meals_total: i32 = meal_charges.iter().sum();
            add_ons_total += meals_total;
            lines.push(QuoteLine {
                category: LineCategory::Meals,
                label: format!("Meal selection ({} meals)", meal_charges.len()),
                amount_inr: meals_total,
            });
        }

        for add_on_type in self.selected_add_ons(draft) {
            if let Some(add_on) = self.add_ons.get(add_on_type) {
                add_ons_total += add_on.price_inr;
                lines.push(QuoteLine {
                    category: LineCategory::AddOn,
                    label: add_on.name.clone(),
                    amount_inr: add_on.price_inr,
                });
            }
        }

        let pre_discount = subtotal + taxes + add_ons_total;

        let mut applied_coupon = None;
        let mut coupon_error = None;
        let mut discount = 0;
        if let Some(code) = coupon_code {
            match book.resolve(code, today) {
                Ok(coupon) if pre_discount >= coupon.min_amount_inr => {
                    discount = coupon.discount_inr;
                    applied_coupon = Some(coupon.code.clone());
                    lines.push(QuoteLine {
                        category: LineCategory::Discount,
                        label: format!("Discount ({})", coupon.code),
                        amount_inr: -discount,
                    });
                }
                Ok(coupon) => {
                    coupon_error =
                        Some(CouponError::MinimumNotMet(coupon.min_amount_inr).to_string());
                }
                Err(err) => {
                    coupon_error = Some(err.to_string());
                }
            }
        }

        let total = (pre_discount - discount).max(0);

        Quote {
            lines,
            subtotal_inr: subtotal,
            taxes_inr: taxes,
            add_ons_inr: add_ons_total,
            discount_inr: discount,
            total_inr: total,
            currency: "INR".to_string(),
            applied_coupon,
            coupon_error,
        }
    }

    fn selected_add_ons(&self, draft: &BookingDraft) -> Vec<AddOnType> {
        let selection = draft.add_ons;
        [
            (selection.extra_baggage, AddOnType::ExtraBaggage),
            (selection.priority_checkin, AddOnType::PriorityCheckin),
            (selection.fast_track, AddOnType::FastTrack),
            (selection.lounge_access, AddOnType::LoungeAccess),
            (selection.price_lock, AddOnType::PriceLock),
        ]
        .into_iter()
        .filter_map(|(selected, add_on)| selected.then_some(add_on))
        .collect()
    }
}

impl Default for QuoteCalculator {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}
