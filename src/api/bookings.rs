//! Booking route handlers.

use super::{ApiError, ApiResponse, AppState};
use crate::{
    core::booking,
    entities::{BookingStatus, BookingType, booking as booking_entity},
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, put},
};
use chrono::NaiveDate;
use serde::Deserialize;

/// Request body for `POST /api/bookings`.
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub user_id: i64,
    pub booking_type: BookingType,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub cost: f64,
    /// Omitted: database default (`USD`)
    pub currency: Option<String>,
    pub details: Option<serde_json::Value>,
}

/// Request body for `PUT /api/bookings/{id}`. All fields optional.
#[derive(Debug, Deserialize)]
pub struct UpdateBookingRequest {
    pub destination: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub cost: Option<f64>,
    pub currency: Option<String>,
    pub details: Option<serde_json::Value>,
}

/// Request body for `PUT /api/bookings/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: BookingStatus,
}

/// Query string for `GET /api/bookings`.
#[derive(Debug, Deserialize)]
pub struct ListBookingsQuery {
    pub status: Option<BookingStatus>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", get(list_bookings).post(create_booking))
        .route(
            "/bookings/{id}",
            get(get_booking).put(update_booking).delete(delete_booking),
        )
        .route("/bookings/{id}/status", put(update_booking_status))
}

/// Handler for `GET /api/bookings`, optionally filtered by `?status=`.
async fn list_bookings(
    State(state): State<AppState>,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<ApiResponse<Vec<booking_entity::Model>>>, ApiError> {
    let bookings = booking::get_all_bookings(&state.db, query.status).await?;
    Ok(ApiResponse::ok(bookings))
}

/// Handler for `POST /api/bookings`.
async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<Json<ApiResponse<booking_entity::Model>>, ApiError> {
    let created = booking::create_booking(
        &state.db,
        payload.user_id,
        payload.booking_type,
        payload.destination,
        payload.start_date,
        payload.end_date,
        payload.cost,
        payload.currency,
        payload.details,
    )
    .await?;
    Ok(ApiResponse::ok(created))
}

/// Handler for `GET /api/bookings/{id}`.
async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<booking_entity::Model>>, ApiError> {
    let found = booking::get_booking_by_id(&state.db, id)
        .await?
        .ok_or(crate::errors::Error::NotFound {
            entity: "Booking",
            id,
        })?;
    Ok(ApiResponse::ok(found))
}

/// Handler for `PUT /api/bookings/{id}`.
async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateBookingRequest>,
) -> Result<Json<ApiResponse<booking_entity::Model>>, ApiError> {
    let updated = booking::update_booking(
        &state.db,
        id,
        payload.destination,
        payload.start_date,
        payload.end_date,
        payload.cost,
        payload.currency,
        payload.details,
    )
    .await?;
    Ok(ApiResponse::ok(updated))
}

/// Handler for `PUT /api/bookings/{id}/status`.
async fn update_booking_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateBookingStatusRequest>,
) -> Result<Json<ApiResponse<booking_entity::Model>>, ApiError> {
    let updated = booking::update_booking_status(&state.db, id, payload.status).await?;
    Ok(ApiResponse::ok(updated))
}

/// Handler for `DELETE /api/bookings/{id}`.
async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    booking::delete_booking(&state.db, id).await?;
    Ok(ApiResponse::ok(()))
}
