use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use skyfare_catalog::search::{search_flights, FlightQuery, SearchFilters, SortKey, SortOrder};
use skyfare_catalog::seatmap::SeatMapGenerator;
use skyfare_catalog::{Flight, SeatMap};

use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/flights/search", post(search))
        .route("/v1/flights/{id}", get(get_flight))
        .route("/v1/flights/{id}/seatmap", get(get_seatmap))
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchFlightsRequest {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    pub passengers: u32,
    #[serde(default)]
    pub filters: SearchFilters,
    #[serde(default)]
    pub sort_by: SortKey,
    #[serde(default)]
    pub sort_order: SortOrder,
}

#[derive(Debug, Serialize)]
pub struct FlightResponse {
    pub id: Uuid,
    pub flight_number: String,
    pub airline_name: String,
    pub airline_code: String,
    pub aircraft_model: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: chrono::DateTime<chrono::Utc>,
    pub arrival_time: chrono::DateTime<chrono::Utc>,
    pub duration_minutes: i64,
    pub stops: u32,
    pub economy_inr: i32,
    pub business_inr: i32,
    pub seats_available: i32,
    pub status: skyfare_catalog::FlightStatus,
}

impl From<Flight> for FlightResponse {
    fn from(flight: Flight) -> Self {
        let duration_minutes = flight.duration().num_minutes();
        Self {
            id: flight.id,
            flight_number: flight.flight_number,
            airline_name: flight.airline.name,
            airline_code: flight.airline.code,
            aircraft_model: flight.aircraft.model,
            origin: flight.origin,
            destination: flight.destination,
            departure_time: flight.departure_time,
            arrival_time: flight.arrival_time,
            duration_minutes,
            stops: flight.stops,
            economy_inr: flight.fares.economy_inr,
            business_inr: flight.fares.business_inr,
            seats_available: flight.seats_available,
            status: flight.status,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /v1/flights/search
async fn search(
    State(state): State<AppState>,
    Json(req): Json<SearchFlightsRequest>,
) -> Result<Json<Vec<FlightResponse>>, AppError> {
    if req.passengers == 0 {
        return Err(AppError::ValidationError(
            "At least one passenger is required".to_string(),
        ));
    }

    let flights = state
        .flights
        .list_flights()
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    let query = FlightQuery {
        origin: req.origin,
        destination: req.destination,
        date: req.date,
        passengers: req.passengers,
    };

    let results = search_flights(&flights, &query, &req.filters, req.sort_by, req.sort_order);
    tracing::debug!(
        origin = %query.origin,
        destination = %query.destination,
        results = results.len(),
        "flight search"
    );

    Ok(Json(results.into_iter().map(FlightResponse::from).collect()))
}

/// GET /v1/flights/{id}
async fn get_flight(
    State(state): State<AppState>,
    Path(flight_id): Path<Uuid>,
) -> Result<Json<FlightResponse>, AppError> {
    let flight = state
        .flights
        .get_flight(flight_id)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .ok_or_else(|| AppError::NotFoundError(format!("Flight {} not found", flight_id)))?;

    Ok(Json(flight.into()))
}

/// GET /v1/flights/{id}/seatmap
///
/// Occupancy is mock display data rolled fresh per request.
async fn get_seatmap(
    State(state): State<AppState>,
    Path(flight_id): Path<Uuid>,
) -> Result<Json<SeatMap>, AppError> {
    let flight = state
        .flights
        .get_flight(flight_id)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .ok_or_else(|| AppError::NotFoundError(format!("Flight {} not found", flight_id)))?;

    let generator = SeatMapGenerator::new(state.business_rules.seat_occupancy_probability);
    let map = generator.generate(&flight.aircraft.model, &mut rand::thread_rng());

    Ok(Json(map))
}
