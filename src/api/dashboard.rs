//! Dashboard route handler.

use super::{ApiError, ApiResponse, AppState};
use crate::core::dashboard::{self, DashboardSummary};
use axum::{Json, Router, extract::State, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(get_dashboard))
}

/// Handler for `GET /api/dashboard`.
async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DashboardSummary>>, ApiError> {
    let summary = dashboard::get_dashboard_summary(&state.db).await?;
    Ok(ApiResponse::ok(summary))
}
