use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use skyfare_pricing::{BookingDraft, Quote};
use skyfare_shared::models::events::QuoteComputedEvent;

use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/quotes", post(compute_quote))
}

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub flight_id: Uuid,
    pub passengers: u32,
    #[serde(default)]
    pub draft: BookingDraft,
    /// Sending a different code on the next request replaces the coupon;
    /// omitting it drops the discount.
    pub coupon_code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub flight_id: Uuid,
    pub flight_number: String,
    pub quote: Quote,
}

/// POST /v1/quotes
///
/// Recompute the full price for a draft. Stateless: clients call this on
/// every change instead of patching a running total.
async fn compute_quote(
    State(state): State<AppState>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, AppError> {
    if req.passengers == 0 {
        return Err(AppError::ValidationError(
            "At least one passenger is required".to_string(),
        ));
    }

    let flight = state
        .flights
        .get_flight(req.flight_id)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .ok_or_else(|| AppError::NotFoundError(format!("Flight {} not found", req.flight_id)))?;

    let book = state
        .coupons
        .coupon_book()
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    let quote = state.calculator.compute(
        flight.fares.economy_inr,
        req.passengers,
        &req.draft,
        req.coupon_code.as_deref(),
        &book,
        Utc::now().date_naive(),
    );

    let _ = state
        .events
        .publish(
            "quote.computed",
            &QuoteComputedEvent {
                flight_id: flight.id,
                customer_id: None,
                passengers: req.passengers,
                total_inr: quote.total_inr,
                timestamp: Utc::now().timestamp(),
            },
        )
        .await;

    Ok(Json(QuoteResponse {
        flight_id: flight.id,
        flight_number: flight.flight_number,
        quote,
    }))
}
