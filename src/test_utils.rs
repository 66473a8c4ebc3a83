//! Shared test utilities for the Satlogix data layer.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{approval, booking, expense, location, user},
    entities,
    entities::{ApprovalTarget, BookingType},
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Creates an in-memory SQLite database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test user with sensible defaults.
///
/// # Defaults
/// * `name`: "Test User"
/// * `role`: omitted (database default, `EMPLOYEE`)
/// * `department`: None
pub async fn create_test_user(
    db: &DatabaseConnection,
    email: &str,
) -> Result<entities::user::Model> {
    user::create_user(db, "Test User".to_string(), email.to_string(), None, None).await
}

/// Creates a test booking with sensible defaults.
///
/// # Defaults
/// * `booking_type`: FLIGHT
/// * `destination`: "Lisbon"
/// * dates: 2026-09-01 to 2026-09-05
/// * `cost`: 412.50, currency omitted (database default, `USD`)
pub async fn create_test_booking(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<entities::booking::Model> {
    let start = NaiveDate::parse_from_str("2026-09-01", "%Y-%m-%d").map_err(|e| {
        crate::errors::Error::Validation {
            message: e.to_string(),
        }
    })?;
    let end = NaiveDate::parse_from_str("2026-09-05", "%Y-%m-%d").map_err(|e| {
        crate::errors::Error::Validation {
            message: e.to_string(),
        }
    })?;

    booking::create_booking(
        db,
        user_id,
        BookingType::Flight,
        "Lisbon".to_string(),
        start,
        end,
        412.50,
        None,
        None,
    )
    .await
}

/// Creates a test expense with sensible defaults.
///
/// # Defaults
/// * `category`: "meals"
/// * `amount`: 23.10, currency omitted (database default, `USD`)
/// * `description`: "Test expense"
pub async fn create_test_expense(
    db: &DatabaseConnection,
    user_id: i64,
    booking_id: Option<i64>,
) -> Result<entities::expense::Model> {
    expense::create_expense(
        db,
        user_id,
        booking_id,
        "meals".to_string(),
        23.10,
        None,
        "Test expense".to_string(),
        None,
    )
    .await
}

/// Creates a test approval request targeting a booking.
pub async fn create_test_approval(
    db: &DatabaseConnection,
    requester_id: i64,
    booking_id: i64,
) -> Result<entities::approval_request::Model> {
    approval::create_approval_request(
        db,
        ApprovalTarget::Booking,
        booking_id,
        requester_id,
        None,
    )
    .await
}

/// Creates a test location ping with sensible defaults (Lisbon, not an emergency).
pub async fn create_test_location(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<entities::traveler_location::Model> {
    location::record_location(db, user_id, 38.7223, -9.1393, None, false).await
}

/// Sets up a complete test environment with one user.
/// Returns (db, user) for common test scenarios.
pub async fn setup_with_user() -> Result<(DatabaseConnection, entities::user::Model)> {
    let db = setup_test_db().await?;
    let user = create_test_user(&db, "traveler@satlogix.test").await?;
    Ok((db, user))
}
