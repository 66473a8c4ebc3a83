//! TravelerLocation entity - A location ping reported by a traveling user.
//!
//! Pings are append-only position reports with an emergency flag used for
//! duty-of-care lookups. They are removed together with the owning user.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// TravelerLocation database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "traveler_locations")]
pub struct Model {
    /// Unique identifier for the ping
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user who reported this position
    pub user_id: i64,
    /// Latitude in decimal degrees, [-90, 90]
    pub latitude: f64,
    /// Longitude in decimal degrees, [-180, 180]
    pub longitude: f64,
    /// Reverse-geocoded address, if known
    pub address: Option<String>,
    /// True when the traveler flagged this ping as an emergency
    pub is_emergency: bool,
    /// When the position was recorded
    pub recorded_at: DateTimeUtc,
}

/// Defines relationships between TravelerLocation and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each ping belongs to one user; removed together with the user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
