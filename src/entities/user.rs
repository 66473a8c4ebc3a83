//! User entity - Represents an account in the travel management system.
//!
//! Each user has a unique email, a role controlling what they may approve,
//! and an optional department. Users own bookings, expenses, approval
//! requests and location pings; deleting a user cascades to all of them.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Role assigned to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Full administrative access
    #[sea_orm(string_value = "ADMIN")]
    Admin,
    /// Can approve bookings and expenses for their reports
    #[sea_orm(string_value = "MANAGER")]
    Manager,
    /// Regular traveler account
    #[sea_orm(string_value = "EMPLOYEE")]
    Employee,
}

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the user
    pub name: String,
    /// Login email, unique across all users
    #[sea_orm(unique)]
    pub email: String,
    /// Access role, defaults to `EMPLOYEE` when omitted on insert
    #[sea_orm(default_value = "EMPLOYEE")]
    pub role: Role,
    /// Department the user belongs to, if any
    pub department: Option<String>,
    /// When the account was created
    pub created_at: DateTimeUtc,
    /// When the account was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between User and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One user has many bookings
    #[sea_orm(has_many = "super::booking::Entity")]
    Bookings,
    /// One user has many expenses
    #[sea_orm(has_many = "super::expense::Entity")]
    Expenses,
    /// One user has many location pings
    #[sea_orm(has_many = "super::traveler_location::Entity")]
    TravelerLocations,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl Related<super::expense::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expenses.def()
    }
}

impl Related<super::traveler_location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TravelerLocations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
