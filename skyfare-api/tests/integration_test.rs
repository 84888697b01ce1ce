use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::Utc;
use serde_json::{json, Value};
use tower::ServiceExt;

use skyfare_api::middleware::auth::AdminClaims;
use skyfare_api::state::{AppState, AuthConfig};
use skyfare_api::app;
use skyfare_store::app_config::BusinessRules;

const TEST_SECRET: &str = "test-secret";

fn test_app() -> Router {
    let state = AppState::seeded(
        AuthConfig {
            secret: TEST_SECRET.to_string(),
            expiration: 3600,
        },
        BusinessRules {
            tax_rate: 0.18,
            premium_surcharge_inr: 500,
            insurance_per_traveler_inr: 379,
            seat_occupancy_probability: 0.3,
        },
    );
    app(state)
}

fn admin_token() -> String {
    let claims = AdminClaims {
        sub: "admin-1".to_string(),
        email: "ops@skyfare.example".to_string(),
        role: "ADMIN".to_string(),
        airline_id: None,
        exp: (Utc::now().timestamp() + 3600) as usize,
    };
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn guest_token(app: &Router) -> String {
    let (status, body) = send(app, "POST", "/v1/auth/guest", None, None).await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

fn search_request() -> Value {
    json!({
        "origin": "DEL",
        "destination": "BOM",
        "date": Utc::now().date_naive().to_string(),
        "passengers": 1,
    })
}

async fn first_flight(app: &Router) -> Value {
    let (status, body) = send(app, "POST", "/v1/flights/search", None, Some(search_request())).await;
    assert_eq!(status, StatusCode::OK);
    let flights = body.as_array().unwrap();
    assert!(!flights.is_empty());
    flights[0].clone()
}

fn complete_draft() -> Value {
    json!({
        "travelers": [{
            "first_name": "Ananya",
            "last_name": "Sharma",
            "gender": "female",
            "date_of_birth": "1992-04-17",
        }],
        "contact": { "email": "ananya@example.com", "mobile": "9876543210" },
    })
}

#[tokio::test]
async fn search_returns_seeded_flights_sorted_by_price() {
    let app = test_app();
    let (status, body) = send(&app, "POST", "/v1/flights/search", None, Some(search_request())).await;

    assert_eq!(status, StatusCode::OK);
    let flights = body.as_array().unwrap();
    assert!(flights.len() >= 3);

    let prices: Vec<i64> = flights
        .iter()
        .map(|f| f["economy_inr"].as_i64().unwrap())
        .collect();
    let mut sorted = prices.clone();
    sorted.sort();
    assert_eq!(prices, sorted);
}

#[tokio::test]
async fn quote_applies_a_valid_coupon() {
    let app = test_app();
    let flight = first_flight(&app).await;
    let base = flight["economy_inr"].as_i64().unwrap() as i32;

    let (status, body) = send(
        &app,
        "POST",
        "/v1/quotes",
        None,
        Some(json!({
            "flight_id": flight["id"],
            "passengers": 2,
            "coupon_code": "first100",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let quote = &body["quote"];
    let subtotal = base * 2;
    let taxes = (subtotal as f64 * 0.18).round() as i32;
    assert_eq!(quote["subtotal_inr"], subtotal);
    assert_eq!(quote["taxes_inr"], taxes);
    assert_eq!(quote["applied_coupon"], "FIRST100");
    assert_eq!(quote["total_inr"], subtotal + taxes - 100);
}

#[tokio::test]
async fn quote_with_unknown_coupon_still_prices_the_draft() {
    let app = test_app();
    let flight = first_flight(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/v1/quotes",
        None,
        Some(json!({
            "flight_id": flight["id"],
            "passengers": 1,
            "coupon_code": "NOPE42",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quote"]["coupon_error"], "Invalid coupon code");
    assert_eq!(body["quote"]["discount_inr"], 0);
    assert!(body["quote"]["total_inr"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn quote_for_unknown_flight_is_404() {
    let app = test_app();
    let (status, _) = send(
        &app,
        "POST",
        "/v1/quotes",
        None,
        Some(json!({
            "flight_id": uuid::Uuid::new_v4(),
            "passengers": 1,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn seatmap_covers_the_standard_cabin() {
    let app = test_app();
    let flight = first_flight(&app).await;

    let (status, body) = send(
        &app,
        "GET",
        &format!("/v1/flights/{}/seatmap", flight["id"].as_str().unwrap()),
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["layout"], "3-3");
    assert_eq!(body["seats"].as_array().unwrap().len(), 192);
}

#[tokio::test]
async fn bookings_require_a_token() {
    let app = test_app();
    let (status, _) = send(
        &app,
        "POST",
        "/v1/bookings",
        None,
        Some(json!({ "flight_id": uuid::Uuid::new_v4(), "draft": {} })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn booking_lifecycle_confirm_then_cancel() {
    let app = test_app();
    let token = guest_token(&app).await;
    let flight = first_flight(&app).await;
    let seats_before = flight["seats_available"].as_i64().unwrap();

    let (status, booking) = send(
        &app,
        "POST",
        "/v1/bookings",
        Some(&token),
        Some(json!({
            "flight_id": flight["id"],
            "draft": complete_draft(),
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(booking["pnr"].as_str().unwrap().len(), 6);
    assert_eq!(booking["status"], "CONFIRMED");

    // Seat was taken off the flight
    let (_, after) = send(
        &app,
        "GET",
        &format!("/v1/flights/{}", flight["id"].as_str().unwrap()),
        None,
        None,
    )
    .await;
    assert_eq!(after["seats_available"].as_i64().unwrap(), seats_before - 1);

    let (status, listed) = send(&app, "GET", "/v1/bookings", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let booking_id = booking["booking_id"].as_str().unwrap().to_string();
    let (status, cancelled) = send(
        &app,
        "POST",
        &format!("/v1/bookings/{}/cancel", booking_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cancelled["status"], "CANCELLED");

    // Cancelling twice is a conflict
    let (status, _) = send(
        &app,
        "POST",
        &format!("/v1/bookings/{}/cancel", booking_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn incomplete_draft_returns_the_field_error_map() {
    let app = test_app();
    let token = guest_token(&app).await;
    let flight = first_flight(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/v1/bookings",
        Some(&token),
        Some(json!({
            "flight_id": flight["id"],
            "draft": {
                "travelers": [{ "first_name": "", "last_name": "Sharma" }],
                "contact": { "email": "", "mobile": "9876543210" },
            },
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields = body["fields"].as_object().unwrap();
    assert!(fields.contains_key("traveler_0_first_name"));
    assert!(fields.contains_key("email"));
}

#[tokio::test]
async fn another_customer_cannot_read_or_cancel_a_booking() {
    let app = test_app();
    let owner = guest_token(&app).await;
    let stranger = guest_token(&app).await;
    let flight = first_flight(&app).await;

    let (_, booking) = send(
        &app,
        "POST",
        "/v1/bookings",
        Some(&owner),
        Some(json!({ "flight_id": flight["id"], "draft": complete_draft() })),
    )
    .await;
    let booking_id = booking["booking_id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        "GET",
        &format!("/v1/bookings/{}", booking_id),
        Some(&stranger),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_routes_reject_guest_and_missing_tokens() {
    let app = test_app();
    let token = guest_token(&app).await;

    let (status, _) = send(&app, "GET", "/v1/admin/coupons", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "GET", "/v1/admin/coupons", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_manages_coupons_end_to_end() {
    let app = test_app();
    let token = admin_token();

    let (status, created) = send(
        &app,
        "POST",
        "/v1/admin/coupons",
        Some(&token),
        Some(json!({
            "code": "summer25",
            "description": "₹25 off monsoon fares",
            "discount_inr": 25,
            "min_amount_inr": 1000,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["code"], "SUMMER25");
    assert_eq!(created["is_active"], true);

    let (status, toggled) = send(
        &app,
        "POST",
        "/v1/admin/coupons/SUMMER25/toggle",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(toggled["is_active"], false);

    let (status, copy) = send(
        &app,
        "POST",
        "/v1/admin/coupons/SUMMER25/duplicate",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(copy["code"], "SUMMER25_COPY");

    let (status, _) = send(
        &app,
        "DELETE",
        "/v1/admin/coupons/SUMMER25",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        "DELETE",
        "/v1/admin/coupons/SUMMER25",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admin_flight_inventory_crud() {
    let app = test_app();
    let token = admin_token();
    let departure = Utc::now() + chrono::Duration::days(3);

    let (status, created) = send(
        &app,
        "POST",
        "/v1/admin/flights",
        Some(&token),
        Some(json!({
            "flight_number": "6E-901",
            "airline_name": "IndiGo",
            "airline_code": "6E",
            "aircraft_model": "Airbus A320neo",
            "capacity": 186,
            "origin": "del",
            "destination": "ccu",
            "departure_time": departure.to_rfc3339(),
            "arrival_time": (departure + chrono::Duration::minutes(145)).to_rfc3339(),
            "economy_inr": 4600,
            "business_inr": 12900,
            "seats_available": 186,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["origin"], "DEL");
    let id = created["id"].as_str().unwrap().to_string();

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/v1/admin/flights/{}", id),
        Some(&token),
        Some(json!({ "economy_inr": 4999, "status": "DELAYED" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["economy_inr"], 4999);
    assert_eq!(updated["status"], "DELAYED");

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/v1/admin/flights/{}", id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}
