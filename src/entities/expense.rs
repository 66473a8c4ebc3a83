//! Expense entity - Represents a submitted travel expense.
//!
//! Expenses belong to one user and may optionally reference the booking they
//! were incurred against. Deleting the user deletes the expense; deleting the
//! linked booking only clears `booking_id`, the expense itself survives.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Review status of an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "APPROVED")]
    Approved,
    #[sea_orm(string_value = "REJECTED")]
    Rejected,
}

/// Expense database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    /// Unique identifier for the expense
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user who submitted the expense
    pub user_id: i64,
    /// Booking this expense was incurred against, if any
    pub booking_id: Option<i64>,
    /// Expense category (e.g. "meals", "transport")
    pub category: String,
    /// Amount claimed
    pub amount: f64,
    /// ISO 4217 currency code, defaults to `USD` when omitted on insert
    #[sea_orm(default_value = "USD")]
    pub currency: String,
    /// Human-readable description of the expense
    pub description: String,
    /// Reference to an uploaded receipt, if one was attached
    pub receipt_url: Option<String>,
    /// Review status, defaults to `PENDING` when omitted on insert
    #[sea_orm(default_value = "PENDING")]
    pub status: ExpenseStatus,
    /// When the expense was submitted
    pub submitted_at: DateTimeUtc,
    /// When the expense was approved, if it has been
    pub approved_at: Option<DateTimeUtc>,
}

/// Defines relationships between Expense and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each expense belongs to one user; removed together with the user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    /// Optional link to a booking; cleared (not deleted) when the booking goes away
    #[sea_orm(
        belongs_to = "super::booking::Entity",
        from = "Column::BookingId",
        to = "super::booking::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Booking,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
