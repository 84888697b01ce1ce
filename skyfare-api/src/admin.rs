use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use skyfare_catalog::flight::{Aircraft, Airline, CabinFares, Flight, FlightStatus};
use skyfare_pricing::Coupon;
use skyfare_store::events::RecordedEvent;

use crate::flights::FlightResponse;
use crate::middleware::auth::admin_auth_middleware;
use crate::{error::AppError, state::AppState};

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/v1/admin/flights", get(list_flights).post(create_flight))
        .route("/v1/admin/flights/{id}", put(update_flight).delete(delete_flight))
        .route("/v1/admin/coupons", get(list_coupons).post(create_coupon))
        .route("/v1/admin/coupons/{code}", delete(delete_coupon))
        .route("/v1/admin/coupons/{code}/toggle", post(toggle_coupon))
        .route("/v1/admin/coupons/{code}/duplicate", post(duplicate_coupon))
        .route("/v1/admin/activity", get(recent_activity))
        .layer(axum::middleware::from_fn_with_state(
            state,
            admin_auth_middleware,
        ))
}

// ============================================================================
// Flight Inventory
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateFlightRequest {
    pub flight_number: String,
    pub airline_name: String,
    pub airline_code: String,
    pub aircraft_model: String,
    pub capacity: i32,
    pub origin: String,
    pub destination: String,
    pub departure_time: chrono::DateTime<chrono::Utc>,
    pub arrival_time: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub stops: u32,
    pub economy_inr: i32,
    pub business_inr: i32,
    pub seats_available: i32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFlightRequest {
    pub departure_time: Option<chrono::DateTime<chrono::Utc>>,
    pub arrival_time: Option<chrono::DateTime<chrono::Utc>>,
    pub economy_inr: Option<i32>,
    pub business_inr: Option<i32>,
    pub seats_available: Option<i32>,
    pub status: Option<FlightStatus>,
}

/// GET /v1/admin/flights
async fn list_flights(
    State(state): State<AppState>,
) -> Result<Json<Vec<FlightResponse>>, AppError> {
    let flights = state
        .flights
        .list_flights()
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;
    Ok(Json(flights.into_iter().map(FlightResponse::from).collect()))
}

/// POST /v1/admin/flights
async fn create_flight(
    State(state): State<AppState>,
    Json(req): Json<CreateFlightRequest>,
) -> Result<Json<FlightResponse>, AppError> {
    if req.seats_available > req.capacity {
        return Err(AppError::ValidationError(
            "Seats available cannot exceed aircraft capacity".to_string(),
        ));
    }

    let flight = Flight {
        id: Uuid::new_v4(),
        flight_number: req.flight_number,
        airline: Airline {
            name: req.airline_name,
            code: req.airline_code,
        },
        aircraft: Aircraft {
            model: req.aircraft_model,
            capacity: req.capacity,
        },
        origin: req.origin.to_uppercase(),
        destination: req.destination.to_uppercase(),
        departure_time: req.departure_time,
        arrival_time: req.arrival_time,
        stops: req.stops,
        fares: CabinFares {
            economy_inr: req.economy_inr,
            business_inr: req.business_inr,
        },
        seats_available: req.seats_available,
        status: FlightStatus::Scheduled,
    };

    state
        .flights
        .upsert_flight(&flight)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    Ok(Json(flight.into()))
}

/// PUT /v1/admin/flights/{id}
async fn update_flight(
    State(state): State<AppState>,
    Path(flight_id): Path<Uuid>,
    Json(req): Json<UpdateFlightRequest>,
) -> Result<Json<FlightResponse>, AppError> {
    let mut flight = state
        .flights
        .get_flight(flight_id)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .ok_or_else(|| AppError::NotFoundError(format!("Flight {} not found", flight_id)))?;

    if let Some(departure_time) = req.departure_time {
        flight.departure_time = departure_time;
    }
    if let Some(arrival_time) = req.arrival_time {
        flight.arrival_time = arrival_time;
    }
    if let Some(economy_inr) = req.economy_inr {
        flight.fares.economy_inr = economy_inr;
    }
    if let Some(business_inr) = req.business_inr {
        flight.fares.business_inr = business_inr;
    }
    if let Some(seats_available) = req.seats_available {
        flight.seats_available = seats_available.min(flight.aircraft.capacity);
    }
    if let Some(status) = req.status {
        flight.status = status;
    }

    state
        .flights
        .upsert_flight(&flight)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    Ok(Json(flight.into()))
}

/// DELETE /v1/admin/flights/{id}
async fn delete_flight(
    State(state): State<AppState>,
    Path(flight_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let removed = state
        .flights
        .delete_flight(flight_id)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFoundError(format!(
            "Flight {} not found",
            flight_id
        )))
    }
}

// ============================================================================
// Coupon Management
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateCouponRequest {
    pub code: String,
    pub description: String,
    pub discount_inr: i32,
    pub min_amount_inr: i32,
    pub valid_from: Option<NaiveDate>,
    pub valid_till: Option<NaiveDate>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// GET /v1/admin/coupons
async fn list_coupons(State(state): State<AppState>) -> Result<Json<Vec<Coupon>>, AppError> {
    let coupons = state
        .coupons
        .list_coupons()
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;
    Ok(Json(coupons))
}

/// POST /v1/admin/coupons
async fn create_coupon(
    State(state): State<AppState>,
    Json(req): Json<CreateCouponRequest>,
) -> Result<Json<Coupon>, AppError> {
    if req.code.trim().is_empty() {
        return Err(AppError::ValidationError("Coupon code is required".to_string()));
    }
    if req.discount_inr <= 0 {
        return Err(AppError::ValidationError(
            "Discount must be a positive amount".to_string(),
        ));
    }

    let coupon = Coupon {
        code: req.code.to_uppercase(),
        description: req.description,
        discount_inr: req.discount_inr,
        min_amount_inr: req.min_amount_inr.max(0),
        valid_from: req.valid_from,
        valid_till: req.valid_till,
        is_active: req.is_active,
    };

    state
        .coupons
        .save_coupon(&coupon)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    Ok(Json(coupon))
}

/// POST /v1/admin/coupons/{code}/toggle
async fn toggle_coupon(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Coupon>, AppError> {
    let mut coupon = state
        .coupons
        .get_coupon(&code)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .ok_or_else(|| AppError::NotFoundError(format!("Coupon {} not found", code)))?;

    coupon.is_active = !coupon.is_active;

    state
        .coupons
        .save_coupon(&coupon)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    Ok(Json(coupon))
}

/// POST /v1/admin/coupons/{code}/duplicate
async fn duplicate_coupon(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Coupon>, AppError> {
    let original = state
        .coupons
        .get_coupon(&code)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .ok_or_else(|| AppError::NotFoundError(format!("Coupon {} not found", code)))?;

    let copy = Coupon {
        code: format!("{}_COPY", original.code),
        ..original
    };

    state
        .coupons
        .save_coupon(&copy)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    Ok(Json(copy))
}

/// DELETE /v1/admin/coupons/{code}
async fn delete_coupon(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<StatusCode, AppError> {
    let removed = state
        .coupons
        .delete_coupon(&code)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFoundError(format!("Coupon {} not found", code)))
    }
}

// ============================================================================
// Activity
// ============================================================================

/// GET /v1/admin/activity
async fn recent_activity(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecordedEvent>>, AppError> {
    Ok(Json(state.events.recent(50).await))
}
