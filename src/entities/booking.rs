//! Booking entity - Represents a travel booking (flight, hotel, car or package).
//!
//! Each booking belongs to one user and carries a destination, a date range,
//! a cost in some currency, and an optional opaque JSON blob with
//! provider-specific details. Deleting the owning user deletes the booking.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Kind of travel product booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingType {
    #[sea_orm(string_value = "FLIGHT")]
    Flight,
    #[sea_orm(string_value = "HOTEL")]
    Hotel,
    #[sea_orm(string_value = "CAR")]
    Car,
    /// Bundled flight + hotel package
    #[sea_orm(string_value = "PACKAGE")]
    Package,
}

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "APPROVED")]
    Approved,
    #[sea_orm(string_value = "REJECTED")]
    Rejected,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
}

/// Booking database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    /// Unique identifier for the booking
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user who owns this booking
    pub user_id: i64,
    /// What was booked (flight, hotel, car, package)
    pub booking_type: BookingType,
    /// Destination city or venue
    pub destination: String,
    /// First day of travel
    pub start_date: Date,
    /// Last day of travel
    pub end_date: Date,
    /// Approval status, defaults to `PENDING` when omitted on insert
    #[sea_orm(default_value = "PENDING")]
    pub status: BookingStatus,
    /// Total cost of the booking
    pub cost: f64,
    /// ISO 4217 currency code, defaults to `USD` when omitted on insert
    #[sea_orm(default_value = "USD")]
    pub currency: String,
    /// Opaque provider payload (confirmation numbers, fare class, ...)
    pub details: Option<Json>,
    /// When the booking was created
    pub created_at: DateTimeUtc,
    /// When the booking was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Booking and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each booking belongs to one user; removed together with the user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    /// One booking may have many expenses charged against it
    #[sea_orm(has_many = "super::expense::Entity")]
    Expenses,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::expense::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expenses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
