pub mod draft;
pub mod quote;
pub mod coupon;
pub mod calculator;
pub mod repository;

pub use draft::{AddOnSelection, BookingDraft, FareTier};
pub use quote::{LineCategory, Quote, QuoteLine};
pub use coupon::{standard_coupons, Coupon, CouponBook, CouponError};
pub use calculator::{PricingConfig, QuoteCalculator};
pub use repository::CouponRepository;
