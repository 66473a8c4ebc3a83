//! Approval request route handlers.

use super::{ApiError, ApiResponse, AppState};
use crate::{
    core::approval,
    entities::{ApprovalStatus, ApprovalTarget, approval_request},
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, put},
};
use serde::Deserialize;

/// Request body for `POST /api/approvals`.
#[derive(Debug, Deserialize)]
pub struct CreateApprovalRequest {
    pub target_type: ApprovalTarget,
    pub target_id: i64,
    pub requester_id: i64,
    pub comments: Option<String>,
}

/// Request body for `PUT /api/approvals/{id}/decision`.
#[derive(Debug, Deserialize)]
pub struct DecideApprovalRequest {
    pub approver_id: i64,
    pub status: ApprovalStatus,
    pub comments: Option<String>,
}

/// Query string for `GET /api/approvals`.
#[derive(Debug, Deserialize)]
pub struct ListApprovalsQuery {
    pub status: Option<ApprovalStatus>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/approvals", get(list_approvals).post(create_approval))
        .route("/approvals/{id}", get(get_approval).delete(delete_approval))
        .route("/approvals/{id}/decision", put(decide_approval))
}

/// Handler for `GET /api/approvals`, optionally filtered by `?status=`.
async fn list_approvals(
    State(state): State<AppState>,
    Query(query): Query<ListApprovalsQuery>,
) -> Result<Json<ApiResponse<Vec<approval_request::Model>>>, ApiError> {
    let requests = approval::get_all_approval_requests(&state.db, query.status).await?;
    Ok(ApiResponse::ok(requests))
}

/// Handler for `POST /api/approvals`.
async fn create_approval(
    State(state): State<AppState>,
    Json(payload): Json<CreateApprovalRequest>,
) -> Result<Json<ApiResponse<approval_request::Model>>, ApiError> {
    let created = approval::create_approval_request(
        &state.db,
        payload.target_type,
        payload.target_id,
        payload.requester_id,
        payload.comments,
    )
    .await?;
    Ok(ApiResponse::ok(created))
}

/// Handler for `GET /api/approvals/{id}`.
async fn get_approval(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<approval_request::Model>>, ApiError> {
    let found = approval::get_approval_request_by_id(&state.db, id)
        .await?
        .ok_or(crate::errors::Error::NotFound {
            entity: "ApprovalRequest",
            id,
        })?;
    Ok(ApiResponse::ok(found))
}

/// Handler for `PUT /api/approvals/{id}/decision`.
async fn decide_approval(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<DecideApprovalRequest>,
) -> Result<Json<ApiResponse<approval_request::Model>>, ApiError> {
    let decided = approval::decide_approval_request(
        &state.db,
        id,
        payload.approver_id,
        payload.status,
        payload.comments,
    )
    .await?;
    Ok(ApiResponse::ok(decided))
}

/// Handler for `DELETE /api/approvals/{id}`.
async fn delete_approval(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    approval::delete_approval_request(&state.db, id).await?;
    Ok(ApiResponse::ok(()))
}
