//! Traveler location business logic.
//!
//! Location pings are append-only: they can be recorded, listed and deleted,
//! never edited. Coordinates are validated against the WGS84 ranges before
//! anything touches the database.

use crate::{
    entities::{TravelerLocation, traveler_location},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};

/// Records a location ping for a user.
///
/// Latitude must be within [-90, 90] and longitude within [-180, 180];
/// the user must exist.
pub async fn record_location(
    db: &DatabaseConnection,
    user_id: i64,
    latitude: f64,
    longitude: f64,
    address: Option<String>,
    is_emergency: bool,
) -> Result<traveler_location::Model> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::Validation {
            message: format!("Latitude out of range: {latitude}"),
        });
    }

    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::Validation {
            message: format!("Longitude out of range: {longitude}"),
        });
    }

    crate::core::user::get_user_by_id(db, user_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "User",
            id: user_id,
        })?;

    let ping = traveler_location::ActiveModel {
        user_id: Set(user_id),
        latitude: Set(latitude),
        longitude: Set(longitude),
        address: Set(address),
        is_emergency: Set(is_emergency),
        recorded_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = ping.insert(db).await?;
    Ok(result)
}

/// Finds a location ping by its unique id.
pub async fn get_location_by_id(
    db: &DatabaseConnection,
    location_id: i64,
) -> Result<Option<traveler_location::Model>> {
    TravelerLocation::find_by_id(location_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all pings across all users, newest first.
pub async fn get_all_locations(db: &DatabaseConnection) -> Result<Vec<traveler_location::Model>> {
    TravelerLocation::find()
        .order_by_desc(traveler_location::Column::RecordedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all pings for one user, newest first.
pub async fn get_locations_for_user(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<traveler_location::Model>> {
    TravelerLocation::find()
        .filter(traveler_location::Column::UserId.eq(user_id))
        .order_by_desc(traveler_location::Column::RecordedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the most recent ping for one user, if any.
pub async fn get_latest_location_for_user(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Option<traveler_location::Model>> {
    TravelerLocation::find()
        .filter(traveler_location::Column::UserId.eq(user_id))
        .order_by_desc(traveler_location::Column::RecordedAt)
        .limit(1)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all pings flagged as emergencies, newest first.
pub async fn get_emergency_locations(
    db: &DatabaseConnection,
) -> Result<Vec<traveler_location::Model>> {
    TravelerLocation::find()
        .filter(traveler_location::Column::IsEmergency.eq(true))
        .order_by_desc(traveler_location::Column::RecordedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes a location ping by id. Returns `Error::NotFound` when no row was deleted.
pub async fn delete_location(db: &DatabaseConnection, location_id: i64) -> Result<()> {
    let result = TravelerLocation::delete_by_id(location_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: "TravelerLocation",
            id: location_id,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_record_location() -> Result<()> {
        let (db, user) = setup_with_user().await?;

        let ping = record_location(
            &db,
            user.id,
            38.7223,
            -9.1393,
            Some("Lisbon, Portugal".to_string()),
            false,
        )
        .await?;

        assert_eq!(ping.latitude, 38.7223);
        assert_eq!(ping.longitude, -9.1393);
        assert!(!ping.is_emergency);

        Ok(())
    }

    #[tokio::test]
    async fn test_coordinate_validation() -> Result<()> {
        let (db, user) = setup_with_user().await?;

        let result = record_location(&db, user.id, 90.1, 0.0, None, false).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        let result = record_location(&db, user.id, 0.0, -180.5, None, false).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        let result = record_location(&db, user.id, f64::NAN, 0.0, None, false).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        // Boundary values are valid
        let ping = record_location(&db, user.id, -90.0, 180.0, None, false).await?;
        assert_eq!(ping.latitude, -90.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_record_location_unknown_user() -> Result<()> {
        let db = setup_test_db().await?;

        let result = record_location(&db, 999, 0.0, 0.0, None, false).await;
        assert!(matches!(result.unwrap_err(), Error::NotFound { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_latest_location_wins() -> Result<()> {
        let (db, user) = setup_with_user().await?;

        record_location(&db, user.id, 10.0, 10.0, None, false).await?;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let newer = record_location(&db, user.id, 20.0, 20.0, None, false).await?;

        let latest = get_latest_location_for_user(&db, user.id).await?.unwrap();
        assert_eq!(latest.id, newer.id);

        let all = get_locations_for_user(&db, user.id).await?;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, newer.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_all_locations_spans_users() -> Result<()> {
        let (db, user) = setup_with_user().await?;
        let other = create_test_user(&db, "other@satlogix.test").await?;

        record_location(&db, user.id, 10.0, 10.0, None, false).await?;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let newest = record_location(&db, other.id, 20.0, 20.0, None, false).await?;

        let all = get_all_locations(&db).await?;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, newest.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_emergency_listing() -> Result<()> {
        let (db, user) = setup_with_user().await?;

        record_location(&db, user.id, 10.0, 10.0, None, false).await?;
        let sos = record_location(
            &db,
            user.id,
            48.8566,
            2.3522,
            Some("Paris".to_string()),
            true,
        )
        .await?;

        let emergencies = get_emergency_locations(&db).await?;
        assert_eq!(emergencies.len(), 1);
        assert_eq!(emergencies[0].id, sos.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_location() -> Result<()> {
        let (db, user) = setup_with_user().await?;
        let ping = create_test_location(&db, user.id).await?;

        delete_location(&db, ping.id).await?;
        assert!(get_location_by_id(&db, ping.id).await?.is_none());

        let result = delete_location(&db, ping.id).await;
        assert!(matches!(result.unwrap_err(), Error::NotFound { .. }));

        Ok(())
    }
}
