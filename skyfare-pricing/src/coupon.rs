use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A flat-discount promotional code with a minimum-spend threshold and an
/// optional validity window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coupon {
    pub code: String,
    pub description: String,
    pub discount_inr: i32,
    pub min_amount_inr: i32,
    pub valid_from: Option<NaiveDate>,
    pub valid_till: Option<NaiveDate>,
    pub is_active: bool,
}

impl Coupon {
    /// Window check only; activation and minimum spend are separate gates.
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        if let Some(from) = self.valid_from {
            if date < from {
                return false;
            }
        }
        if let Some(till) = self.valid_till {
            if date > till {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CouponError {
    #[error("Please enter a coupon code")]
    EmptyCode,

    #[error("Invalid coupon code")]
    UnknownCode,

    #[error("This coupon is currently inactive")]
    Inactive,

    #[error("This coupon is not currently valid")]
    OutsideValidity,

    #[error("Minimum booking amount ₹{0} required")]
    MinimumNotMet(i32),
}

/// Case-insensitive coupon registry. Codes are stored uppercased; lookups
/// uppercase their input, so "first100" resolves FIRST100.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CouponBook {
    coupons: HashMap<String, Coupon>,
}

impl CouponBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_coupons(coupons: Vec<Coupon>) -> Self {
        let mut book = Self::new();
        for coupon in coupons {
            book.insert(coupon);
        }
        book
    }

    pub fn insert(&mut self, mut coupon: Coupon) {
        coupon.code = coupon.code.to_uppercase();
        self.coupons.insert(coupon.code.clone(), coupon);
    }

    pub fn remove(&mut self, code: &str) -> Option<Coupon> {
        self.coupons.remove(&code.to_uppercase())
    }

    pub fn get(&self, code: &str) -> Option<&Coupon> {
        self.coupons.get(&code.to_uppercase())
    }

    pub fn get_mut(&mut self, code: &str) -> Option<&mut Coupon> {
        self.coupons.get_mut(&code.to_uppercase())
    }

    pub fn all(&self) -> Vec<&Coupon> {
        let mut coupons: Vec<&Coupon> = self.coupons.values().collect();
        coupons.sort_by(|a, b| a.code.cmp(&b.code));
        coupons
    }

    /// Resolve a code for use on `date`. Minimum spend is not checked
    /// here; the calculator gates it against the quote being built.
    pub fn resolve(&self, code: &str, date: NaiveDate) -> Result<&Coupon, CouponError> {
        if code.trim().is_empty() {
            return Err(CouponError::EmptyCode);
        }
        let coupon = self.get(code).ok_or(CouponError::UnknownCode)?;
        if !coupon.is_active {
            return Err(CouponError::Inactive);
        }
        if !coupon.is_valid_on(date) {
            return Err(CouponError::OutsideValidity);
        }
        Ok(coupon)
    }
}

/// The promotional codes advertised in the booking flow.
pub fn standard_coupons() -> Vec<Coupon> {
    let evergreen = |code: &str, description: &str, discount_inr: i32, min_amount_inr: i32| Coupon {
        code: code.to_string(),
        description: description.to_string(),
        discount_inr,
        min_amount_inr,
        valid_from: None,
        valid_till: None,
        is_active: true,
    };
    vec![
        evergreen("FIRST100", "₹100 off on first booking", 100, 2000),
        evergreen("SAVE500", "₹500 off on bookings above ₹10,000", 500, 10000),
        evergreen("NEWUSER", "₹750 off for new users", 750, 5000),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let book = CouponBook::with_coupons(standard_coupons());
        assert!(book.resolve("first100", date(2026, 8, 6)).is_ok());
        assert!(book.resolve("FIRST100", date(2026, 8, 6)).is_ok());
    }

    #[test]
    fn unknown_and_empty_codes_are_rejected() {
        let book = CouponBook::with_coupons(standard_coupons());
        assert_eq!(
            book.resolve("NOPE42", date(2026, 8, 6)),
            Err(CouponError::UnknownCode)
        );
        assert_eq!(
            book.resolve("   ", date(2026, 8, 6)),
            Err(CouponError::EmptyCode)
        );
    }

    #[test]
    fn inactive_coupon_is_rejected() {
        let mut book = CouponBook::with_coupons(standard_coupons());
        book.get_mut("FIRST100").unwrap().is_active = false;
        assert_eq!(
            book.resolve("FIRST100", date(2026, 8, 6)),
            Err(CouponError::Inactive)
        );
    }

    #[test]
    fn validity_window_is_inclusive() {
        let mut coupon = standard_coupons().remove(0);
        coupon.valid_from = Some(date(2026, 3, 1));
        coupon.valid_till = Some(date(2026, 3, 15));
        let book = CouponBook::with_coupons(vec![coupon]);

        assert!(book.resolve("FIRST100", date(2026, 3, 1)).is_ok());
        assert!(book.resolve("FIRST100", date(2026, 3, 15)).is_ok());
        assert_eq!(
            book.resolve("FIRST100", date(2026, 3, 16)),
            Err(CouponError::OutsideValidity)
        );
        assert_eq!(
            book.resolve("FIRST100", date(2026, 2, 28)),
            Err(CouponError::OutsideValidity)
        );
    }
}
