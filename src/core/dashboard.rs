//! Dashboard aggregation - counts and sums across the whole schema.
//!
//! The single read powering the dashboard page: row counts per table,
//! pending-work counts, and cost/amount totals. Each figure is one
//! aggregate query; there is no caching layer in front of this.

use crate::{
    entities::{
        ApprovalRequest, ApprovalStatus, Booking, BookingStatus, Expense, ExpenseStatus,
        TravelerLocation, User, approval_request, booking, expense, traveler_location,
    },
    errors::Result,
};
use sea_orm::{DatabaseConnection, EntityTrait, FromQueryResult, QuerySelect, prelude::*};
use serde::Serialize;

/// Aggregated figures for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// Total number of user accounts
    pub total_users: u64,
    /// Total number of bookings
    pub total_bookings: u64,
    /// Bookings still awaiting a decision
    pub pending_bookings: u64,
    /// Sum of all booking costs (mixed currencies summed as-is)
    pub total_booking_cost: f64,
    /// Total number of expenses
    pub total_expenses: u64,
    /// Expenses still awaiting review
    pub pending_expenses: u64,
    /// Sum of all expense amounts (mixed currencies summed as-is)
    pub total_expense_amount: f64,
    /// Approval requests still undecided
    pub pending_approvals: u64,
    /// Location pings currently flagged as emergencies
    pub active_emergencies: u64,
}

#[derive(FromQueryResult)]
struct TotalRow {
    total: Option<f64>,
}

async fn sum_column<E: EntityTrait>(
    db: &DatabaseConnection,
    column: impl ColumnTrait,
) -> Result<f64> {
    let row = E::find()
        .select_only()
        .column_as(column.sum(), "total")
        .into_model::<TotalRow>()
        .one(db)
        .await?;
    // SUM over an empty table yields NULL
    Ok(row.and_then(|r| r.total).unwrap_or(0.0))
}

/// Computes the dashboard summary.
pub async fn get_dashboard_summary(db: &DatabaseConnection) -> Result<DashboardSummary> {
    let total_users = User::find().count(db).await?;

    let total_bookings = Booking::find().count(db).await?;
    let pending_bookings = Booking::find()
        .filter(booking::Column::Status.eq(BookingStatus::Pending))
        .count(db)
        .await?;
    let total_booking_cost = sum_column::<Booking>(db, booking::Column::Cost).await?;

    let total_expenses = Expense::find().count(db).await?;
    let pending_expenses = Expense::find()
        .filter(expense::Column::Status.eq(ExpenseStatus::Pending))
        .count(db)
        .await?;
    let total_expense_amount = sum_column::<Expense>(db, expense::Column::Amount).await?;

    let pending_approvals = ApprovalRequest::find()
        .filter(approval_request::Column::Status.eq(ApprovalStatus::Pending))
        .count(db)
        .await?;

    let active_emergencies = TravelerLocation::find()
        .filter(traveler_location::Column::IsEmergency.eq(true))
        .count(db)
        .await?;

    Ok(DashboardSummary {
        total_users,
        total_bookings,
        pending_bookings,
        total_booking_cost,
        total_expenses,
        pending_expenses,
        total_expense_amount,
        pending_approvals,
        active_emergencies,
    })
}
