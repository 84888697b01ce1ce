use async_trait::async_trait;

use crate::coupon::Coupon;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Repository trait for coupon management.
#[async_trait]
pub trait CouponRepository: Send + Sync {
    async fn get_coupon(&self, code: &str) -> Result<Option<Coupon>, BoxError>;

    async fn list_coupons(&self) -> Result<Vec<Coupon>, BoxError>;

    async fn save_coupon(&self, coupon: &Coupon) -> Result<(), BoxError>;

    async fn delete_coupon(&self, code: &str) -> Result<bool, BoxError>;

    /// Snapshot of the whole book, for quote computation.
    async fn coupon_book(&self) -> Result<crate::coupon::CouponBook, BoxError>;
}
