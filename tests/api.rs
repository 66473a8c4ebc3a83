//! End-to-end tests for the REST API against an in-memory SQLite database.
//!
//! Each test builds the full router and drives it with `tower::ServiceExt::
//! oneshot`, asserting on the `{ success, data | error }` envelope.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use satlogix::api::{AppState, router};
use serde_json::{Value, json};
use tower::ServiceExt; // for oneshot

async fn test_app() -> Router {
    let db = sea_orm::Database::connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    satlogix::config::database::create_tables(&db)
        .await
        .expect("schema creation");
    router(AppState { db })
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn create_user_returns_success_envelope_with_defaults() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/users",
            json!({ "name": "Evan Osei", "email": "evan@satlogix.test" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["email"], json!("evan@satlogix.test"));
    // Omitted role falls back to the database default
    assert_eq!(body["data"]["role"], json!("EMPLOYEE"));
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn duplicate_email_maps_to_500_error_envelope() {
    let app = test_app().await;

    let payload = json!({ "name": "First", "email": "dup@satlogix.test" });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/users", payload.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(json_request("POST", "/api/users", payload))
        .await
        .unwrap();

    // Constraint violations are not distinguished from other failures
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn missing_record_also_maps_to_500() {
    let app = test_app().await;

    let response = app.oneshot(get_request("/api/users/999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn booking_lifecycle_over_http() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/users",
            json!({ "name": "Traveler", "email": "t@satlogix.test" }),
        ))
        .await
        .unwrap();
    let user_id = response_json(response).await["data"]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/bookings",
            json!({
                "user_id": user_id,
                "booking_type": "FLIGHT",
                "destination": "Lisbon",
                "start_date": "2026-09-01",
                "end_date": "2026-09-05",
                "cost": 412.50,
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let booking_id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["status"], json!("PENDING"));
    assert_eq!(body["data"]["currency"], json!("USD"));

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/bookings/{booking_id}/status"),
            json!({ "status": "APPROVED" }),
        ))
        .await
        .unwrap();
    let body = response_json(response).await;
    assert_eq!(body["data"]["status"], json!("APPROVED"));

    let response = app
        .clone()
        .oneshot(get_request("/api/bookings?status=APPROVED"))
        .await
        .unwrap();
    let body = response_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/users/{user_id}/bookings")))
        .await
        .unwrap();
    let body = response_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/bookings/{booking_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn location_read_routes_over_http() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/users",
            json!({ "name": "Traveler", "email": "t@satlogix.test" }),
        ))
        .await
        .unwrap();
    let user_id = response_json(response).await["data"]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/locations",
            json!({
                "user_id": user_id,
                "latitude": 38.7223,
                "longitude": -9.1393,
                "address": "Lisbon, Portugal",
            }),
        ))
        .await
        .unwrap();
    let ping_id = response_json(response).await["data"]["id"].as_i64().unwrap();

    // Collection read
    let response = app
        .clone()
        .oneshot(get_request("/api/locations"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    // Single-ping read
    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/locations/{ping_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["address"], json!("Lisbon, Portugal"));

    // Pings are immutable: no PUT on the resource
    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/locations/{ping_id}"),
            json!({ "latitude": 0.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn dashboard_reflects_inserted_rows() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/users",
            json!({ "name": "Traveler", "email": "t@satlogix.test" }),
        ))
        .await
        .unwrap();
    let user_id = response_json(response).await["data"]["id"].as_i64().unwrap();

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/expenses",
            json!({
                "user_id": user_id,
                "category": "meals",
                "amount": 23.10,
                "description": "Airport dinner",
            }),
        ))
        .await
        .unwrap();

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/locations",
            json!({
                "user_id": user_id,
                "latitude": 38.7223,
                "longitude": -9.1393,
                "is_emergency": true,
            }),
        ))
        .await
        .unwrap();

    let response = app.oneshot(get_request("/api/dashboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["data"]["total_users"], json!(1));
    assert_eq!(body["data"]["total_expenses"], json!(1));
    assert_eq!(body["data"]["pending_expenses"], json!(1));
    assert_eq!(body["data"]["active_emergencies"], json!(1));
    assert!((body["data"]["total_expense_amount"].as_f64().unwrap() - 23.10).abs() < 1e-9);
}
