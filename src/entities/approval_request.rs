//! ApprovalRequest entity - Tracks a request to approve a booking or expense.
//!
//! The target is polymorphic: `target_type` names the table and `target_id`
//! the row, with no enforced referential integrity to the target itself.
//! The requester link cascades on user deletion; the approver link is merely
//! cleared so the decision trail survives the approver's account.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Which kind of record an approval request points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalTarget {
    #[sea_orm(string_value = "BOOKING")]
    Booking,
    #[sea_orm(string_value = "EXPENSE")]
    Expense,
}

/// Outcome of an approval request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "APPROVED")]
    Approved,
    #[sea_orm(string_value = "REJECTED")]
    Rejected,
}

/// ApprovalRequest database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "approval_requests")]
pub struct Model {
    /// Unique identifier for the request
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Whether the target is a booking or an expense
    pub target_type: ApprovalTarget,
    /// Row id of the target record; untyped, no foreign key
    pub target_id: i64,
    /// User who asked for approval
    pub requester_id: i64,
    /// User who decided the request, once someone has
    pub approver_id: Option<i64>,
    /// Decision status, defaults to `PENDING` when omitted on insert
    #[sea_orm(default_value = "PENDING")]
    pub status: ApprovalStatus,
    /// Free-form reviewer comments
    pub comments: Option<String>,
    /// When the request was created
    pub created_at: DateTimeUtc,
    /// When the request was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between ApprovalRequest and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Requester link; requests die with the requesting user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::RequesterId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Requester,
    /// Approver link; cleared when the approving user is deleted
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ApproverId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Approver,
}

impl ActiveModelBehavior for ActiveModel {}
