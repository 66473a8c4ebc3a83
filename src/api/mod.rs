//! REST API - axum route handlers over the core operations.
//!
//! Every endpoint returns the same JSON envelope: `{"success": true, "data":
//! ...}` on success, and HTTP 500 with `{"success": false, "error": "..."}`
//! on any failure. Errors are not differentiated at the route boundary; a
//! validation rejection and a constraint violation produce the same shape.

pub mod approvals;
pub mod bookings;
pub mod dashboard;
pub mod expenses;
pub mod locations;
pub mod users;

use crate::errors::Error;
use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DatabaseConnection;
use serde::Serialize;

/// Shared state handed to every route handler.
#[derive(Clone)]
pub struct AppState {
    /// Live database connection pool
    pub db: DatabaseConnection,
}

/// The fixed response envelope wrapping all endpoint payloads.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Payload, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wraps a payload in the success envelope.
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

/// Error wrapper translating any crate error into the failure envelope.
///
/// Everything maps to HTTP 500: the route boundary deliberately does not
/// distinguish validation errors from missing rows or constraint violations.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Request failed");
        let body = Json(serde_json::json!({
            "success": false,
            "error": self.0.to_string(),
        }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Builds the full application router under `/api`.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .merge(users::routes())
        .merge(bookings::routes())
        .merge(expenses::routes())
        .merge(approvals::routes())
        .merge(locations::routes())
        .merge(dashboard::routes());

    Router::new().nest("/api", api).with_state(state)
}
