//! Expense route handlers.

use super::{ApiError, ApiResponse, AppState};
use crate::{
    core::expense,
    entities::{ExpenseStatus, expense as expense_entity},
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, put},
};
use serde::Deserialize;

/// Request body for `POST /api/expenses`.
#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    pub user_id: i64,
    pub booking_id: Option<i64>,
    pub category: String,
    pub amount: f64,
    /// Omitted: database default (`USD`)
    pub currency: Option<String>,
    pub description: String,
    pub receipt_url: Option<String>,
}

/// Request body for `PUT /api/expenses/{id}`. All fields optional.
#[derive(Debug, Deserialize)]
pub struct UpdateExpenseRequest {
    pub booking_id: Option<i64>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub description: Option<String>,
    pub receipt_url: Option<String>,
}

/// Request body for `PUT /api/expenses/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateExpenseStatusRequest {
    pub status: ExpenseStatus,
}

/// Query string for `GET /api/expenses`.
#[derive(Debug, Deserialize)]
pub struct ListExpensesQuery {
    pub status: Option<ExpenseStatus>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route(
            "/expenses/{id}",
            get(get_expense).put(update_expense).delete(delete_expense),
        )
        .route("/expenses/{id}/status", put(update_expense_status))
}

/// Handler for `GET /api/expenses`, optionally filtered by `?status=`.
async fn list_expenses(
    State(state): State<AppState>,
    Query(query): Query<ListExpensesQuery>,
) -> Result<Json<ApiResponse<Vec<expense_entity::Model>>>, ApiError> {
    let expenses = expense::get_all_expenses(&state.db, query.status).await?;
    Ok(ApiResponse::ok(expenses))
}

/// Handler for `POST /api/expenses`.
async fn create_expense(
    State(state): State<AppState>,
    Json(payload): Json<CreateExpenseRequest>,
) -> Result<Json<ApiResponse<expense_entity::Model>>, ApiError> {
    let created = expense::create_expense(
        &state.db,
        payload.user_id,
        payload.booking_id,
        payload.category,
        payload.amount,
        payload.currency,
        payload.description,
        payload.receipt_url,
    )
    .await?;
    Ok(ApiResponse::ok(created))
}

/// Handler for `GET /api/expenses/{id}`.
async fn get_expense(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<expense_entity::Model>>, ApiError> {
    let found = expense::get_expense_by_id(&state.db, id)
        .await?
        .ok_or(crate::errors::Error::NotFound {
            entity: "Expense",
            id,
        })?;
    Ok(ApiResponse::ok(found))
}

/// Handler for `PUT /api/expenses/{id}`.
async fn update_expense(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateExpenseRequest>,
) -> Result<Json<ApiResponse<expense_entity::Model>>, ApiError> {
    let updated = expense::update_expense(
        &state.db,
        id,
        payload.booking_id,
        payload.category,
        payload.amount,
        payload.currency,
        payload.description,
        payload.receipt_url,
    )
    .await?;
    Ok(ApiResponse::ok(updated))
}

/// Handler for `PUT /api/expenses/{id}/status`.
async fn update_expense_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateExpenseStatusRequest>,
) -> Result<Json<ApiResponse<expense_entity::Model>>, ApiError> {
    let updated = expense::set_expense_status(&state.db, id, payload.status).await?;
    Ok(ApiResponse::ok(updated))
}

/// Handler for `DELETE /api/expenses/{id}`.
async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    expense::delete_expense(&state.db, id).await?;
    Ok(ApiResponse::ok(()))
}
