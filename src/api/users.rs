//! User route handlers.

use super::{ApiError, ApiResponse, AppState};
use crate::{
    core::{approval, booking, expense, location, user},
    entities::{
        Role, approval_request, booking as booking_entity, expense as expense_entity,
        traveler_location, user as user_entity,
    },
};
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::Deserialize;

/// Request body for `POST /api/users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    /// Omitted: database default (`EMPLOYEE`)
    pub role: Option<Role>,
    pub department: Option<String>,
}

/// Request body for `PUT /api/users/{id}`. All fields optional.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub department: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/users/{id}/bookings", get(list_user_bookings))
        .route("/users/{id}/expenses", get(list_user_expenses))
        .route("/users/{id}/approvals", get(list_user_approvals))
        .route("/users/{id}/locations", get(list_user_locations))
        .route("/users/{id}/locations/latest", get(latest_user_location))
}

/// Handler for `GET /api/users`.
async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<user_entity::Model>>>, ApiError> {
    let users = user::get_all_users(&state.db).await?;
    Ok(ApiResponse::ok(users))
}

/// Handler for `POST /api/users`.
async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<ApiResponse<user_entity::Model>>, ApiError> {
    let created = user::create_user(
        &state.db,
        payload.name,
        payload.email,
        payload.role,
        payload.department,
    )
    .await?;
    Ok(ApiResponse::ok(created))
}

/// Handler for `GET /api/users/{id}`.
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<user_entity::Model>>, ApiError> {
    let found = user::get_user_by_id(&state.db, id)
        .await?
        .ok_or(crate::errors::Error::NotFound {
            entity: "User",
            id,
        })?;
    Ok(ApiResponse::ok(found))
}

/// Handler for `PUT /api/users/{id}`.
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<user_entity::Model>>, ApiError> {
    let updated = user::update_user(
        &state.db,
        id,
        payload.name,
        payload.email,
        payload.role,
        payload.department,
    )
    .await?;
    Ok(ApiResponse::ok(updated))
}

/// Handler for `DELETE /api/users/{id}`.
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    user::delete_user(&state.db, id).await?;
    Ok(ApiResponse::ok(()))
}

/// Handler for `GET /api/users/{id}/bookings`.
async fn list_user_bookings(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<booking_entity::Model>>>, ApiError> {
    let bookings = booking::get_bookings_for_user(&state.db, id).await?;
    Ok(ApiResponse::ok(bookings))
}

/// Handler for `GET /api/users/{id}/expenses`.
async fn list_user_expenses(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<expense_entity::Model>>>, ApiError> {
    let expenses = expense::get_expenses_for_user(&state.db, id).await?;
    Ok(ApiResponse::ok(expenses))
}

/// Handler for `GET /api/users/{id}/approvals`.
async fn list_user_approvals(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<approval_request::Model>>>, ApiError> {
    let requests = approval::get_approval_requests_for_requester(&state.db, id).await?;
    Ok(ApiResponse::ok(requests))
}

/// Handler for `GET /api/users/{id}/locations`.
async fn list_user_locations(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<traveler_location::Model>>>, ApiError> {
    let pings = location::get_locations_for_user(&state.db, id).await?;
    Ok(ApiResponse::ok(pings))
}

/// Handler for `GET /api/users/{id}/locations/latest`.
async fn latest_user_location(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Option<traveler_location::Model>>>, ApiError> {
    let ping = location::get_latest_location_for_user(&state.db, id).await?;
    Ok(ApiResponse::ok(ping))
}
