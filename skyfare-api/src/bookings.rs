use axum::{
    extract::{Path, State},
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use skyfare_booking::{BookingError, BookingStatus};
use skyfare_pricing::{BookingDraft, Quote};
use skyfare_shared::models::events::{
    BookingCancelledEvent, BookingConfirmedEvent, CouponRedeemedEvent,
};

use crate::middleware::auth::{customer_auth_middleware, CustomerClaims};
use crate::{error::AppError, state::AppState};

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/v1/bookings", post(create_booking).get(list_bookings))
        .route("/v1/bookings/{id}", get(get_booking))
        .route("/v1/bookings/{id}/cancel", post(cancel_booking))
        .layer(axum::middleware::from_fn_with_state(
            state,
            customer_auth_middleware,
        ))
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub flight_id: Uuid,
    pub draft: BookingDraft,
    pub coupon_code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub booking_id: Uuid,
    pub pnr: String,
    pub flight_id: Uuid,
    pub flight_number: String,
    pub status: BookingStatus,
    pub quote: Quote,
    pub created_at: chrono::DateTime<Utc>,
}

impl From<skyfare_booking::Booking> for BookingResponse {
    fn from(booking: skyfare_booking::Booking) -> Self {
        Self {
            booking_id: booking.id,
            pnr: booking.pnr,
            flight_id: booking.flight_id,
            flight_number: booking.flight_number,
            status: booking.status,
            quote: booking.quote,
            created_at: booking.created_at,
        }
    }
}

fn map_booking_error(err: BookingError) -> AppError {
    match err {
        BookingError::Validation(fields) => AppError::ValidationFailed(fields),
        BookingError::UnknownSeat(_) => AppError::ValidationError(err.to_string()),
        BookingError::NotBookable { .. } | BookingError::InvalidTransition { .. } => {
            AppError::ConflictError(err.to_string())
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /v1/bookings
async fn create_booking(
    State(state): State<AppState>,
    Extension(claims): Extension<CustomerClaims>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
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

    let booking = state
        .booking_manager
        .confirm(
            claims.sub.clone(),
            &flight,
            req.draft,
            req.coupon_code.as_deref(),
            &book,
            Utc::now().date_naive(),
        )
        .map_err(map_booking_error)?;

    // Take the seats before the booking becomes visible; a competing
    // party may have drained the flight since the bookability check.
    state
        .flights
        .reserve_seats(flight.id, booking.passenger_count() as i32)
        .await
        .map_err(|e| AppError::ConflictError(e.to_string()))?;

    state
        .bookings
        .save_booking(&booking)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    let _ = state
        .events
        .publish(
            "booking.confirmed",
            &BookingConfirmedEvent {
                booking_id: booking.id,
                pnr: booking.pnr.clone(),
                flight_id: booking.flight_id,
                customer_id: booking.customer_id.clone(),
                total_inr: booking.quote.total_inr,
                timestamp: Utc::now().timestamp(),
            },
        )
        .await;

    if let Some(code) = booking.quote.applied_coupon.clone() {
        let _ = state
            .events
            .publish(
                "coupon.redeemed",
                &CouponRedeemedEvent {
                    code,
                    booking_id: booking.id,
                    discount_inr: booking.quote.discount_inr,
                    timestamp: Utc::now().timestamp(),
                },
            )
            .await;
    }

    info!("Booking confirmed: {} ({})", booking.pnr, booking.id);

    Ok(Json(booking.into()))
}

/// GET /v1/bookings
async fn list_bookings(
    State(state): State<AppState>,
    Extension(claims): Extension<CustomerClaims>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let bookings = state
        .bookings
        .list_bookings(&claims.sub)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    Ok(Json(bookings.into_iter().map(BookingResponse::from).collect()))
}

/// GET /v1/bookings/{id}
async fn get_booking(
    State(state): State<AppState>,
    Extension(claims): Extension<CustomerClaims>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<BookingResponse>, AppError> {
    let booking = fetch_owned_booking(&state, &claims, booking_id).await?;
    Ok(Json(booking.into()))
}

/// POST /v1/bookings/{id}/cancel
async fn cancel_booking(
    State(state): State<AppState>,
    Extension(claims): Extension<CustomerClaims>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<BookingResponse>, AppError> {
    let mut booking = fetch_owned_booking(&state, &claims, booking_id).await?;

    state
        .booking_manager
        .cancel(&mut booking)
        .map_err(map_booking_error)?;

    state
        .bookings
        .update_status(booking.id, BookingStatus::Cancelled)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    state
        .flights
        .release_seats(booking.flight_id, booking.passenger_count() as i32)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    let _ = state
        .events
        .publish(
            "booking.cancelled",
            &BookingCancelledEvent {
                booking_id: booking.id,
                pnr: booking.pnr.clone(),
                customer_id: booking.customer_id.clone(),
                timestamp: Utc::now().timestamp(),
            },
        )
        .await;

    info!("Booking cancelled: {} ({})", booking.pnr, booking.id);

    Ok(Json(booking.into()))
}

async fn fetch_owned_booking(
    state: &AppState,
    claims: &CustomerClaims,
    booking_id: Uuid,
) -> Result<skyfare_booking::Booking, AppError> {
    let booking = state
        .bookings
        .get_booking(booking_id)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .ok_or_else(|| AppError::NotFoundError(format!("Booking {} not found", booking_id)))?;

    if booking.customer_id != claims.sub {
        return Err(AppError::AuthorizationError(
            "Booking does not belong to you".to_string(),
        ));
    }

    Ok(booking)
}
