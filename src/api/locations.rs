//! Traveler location route handlers.
//!
//! Pings are append-only, so there is no update route; the per-user listing
//! and latest-ping lookups live under `/api/users/{id}/locations`.

use super::{ApiError, ApiResponse, AppState};
use crate::{core::location, entities::traveler_location};
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};
use serde::Deserialize;

/// Request body for `POST /api/locations`.
#[derive(Debug, Deserialize)]
pub struct RecordLocationRequest {
    pub user_id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    /// Omitted: not an emergency
    #[serde(default)]
    pub is_emergency: bool,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/locations", get(list_locations).post(record_location))
        .route("/locations/emergencies", get(list_emergencies))
        .route("/locations/{id}", get(get_location).delete(delete_location))
}

/// Handler for `GET /api/locations`.
async fn list_locations(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<traveler_location::Model>>>, ApiError> {
    let pings = location::get_all_locations(&state.db).await?;
    Ok(ApiResponse::ok(pings))
}

/// Handler for `GET /api/locations/{id}`.
async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<traveler_location::Model>>, ApiError> {
    let found = location::get_location_by_id(&state.db, id)
        .await?
        .ok_or(crate::errors::Error::NotFound {
            entity: "TravelerLocation",
            id,
        })?;
    Ok(ApiResponse::ok(found))
}

/// Handler for `POST /api/locations`.
async fn record_location(
    State(state): State<AppState>,
    Json(payload): Json<RecordLocationRequest>,
) -> Result<Json<ApiResponse<traveler_location::Model>>, ApiError> {
    let ping = location::record_location(
        &state.db,
        payload.user_id,
        payload.latitude,
        payload.longitude,
        payload.address,
        payload.is_emergency,
    )
    .await?;
    Ok(ApiResponse::ok(ping))
}

/// Handler for `GET /api/locations/emergencies`.
async fn list_emergencies(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<traveler_location::Model>>>, ApiError> {
    let pings = location::get_emergency_locations(&state.db).await?;
    Ok(ApiResponse::ok(pings))
}

/// Handler for `DELETE /api/locations/{id}`.
async fn delete_location(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    location::delete_location(&state.db, id).await?;
    Ok(ApiResponse::ok(()))
}
