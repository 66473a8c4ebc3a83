//! Booking business logic - Handles all travel booking operations.
//!
//! Provides functions for creating, retrieving, updating and deleting
//! bookings. Creation validates the date range and cost and verifies the
//! owning user exists; status transitions are plain field updates with no
//! workflow rules attached.

use crate::{
    entities::{Booking, BookingStatus, BookingType, booking},
    errors::{Error, Result},
};
use sea_orm::{ActiveValue::NotSet, QueryOrder, Set, prelude::*};

/// Creates a new booking for a user.
///
/// The destination must be non-empty, the date range must not be inverted,
/// and the cost must be a finite non-negative number. When `currency` is
/// `None` the database default (`USD`) applies; the status always starts at
/// the database default (`PENDING`).
pub async fn create_booking(
    db: &DatabaseConnection,
    user_id: i64,
    booking_type: BookingType,
    destination: String,
    start_date: Date,
    end_date: Date,
    cost: f64,
    currency: Option<String>,
    details: Option<Json>,
) -> Result<booking::Model> {
    if destination.trim().is_empty() {
        return Err(Error::Validation {
            message: "Booking destination cannot be empty".to_string(),
        });
    }

    if end_date < start_date {
        return Err(Error::Validation {
            message: format!("Booking end date {end_date} precedes start date {start_date}"),
        });
    }

    if !cost.is_finite() || cost < 0.0 {
        return Err(Error::Validation {
            message: format!("Booking cost must be a non-negative amount, got {cost}"),
        });
    }

    // The FK would reject this anyway, but checking here gives a clear error
    crate::core::user::get_user_by_id(db, user_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "User",
            id: user_id,
        })?;

    let now = chrono::Utc::now();
    let booking = booking::ActiveModel {
        user_id: Set(user_id),
        booking_type: Set(booking_type),
        destination: Set(destination.trim().to_string()),
        start_date: Set(start_date),
        end_date: Set(end_date),
        cost: Set(cost),
        currency: currency.map_or(NotSet, Set),
        details: Set(details),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let result = booking.insert(db).await?;
    Ok(result)
}

/// Finds a booking by its unique id.
pub async fn get_booking_by_id(
    db: &DatabaseConnection,
    booking_id: i64,
) -> Result<Option<booking::Model>> {
    Booking::find_by_id(booking_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all bookings for one user, most recent travel first.
pub async fn get_bookings_for_user(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<booking::Model>> {
    Booking::find()
        .filter(booking::Column::UserId.eq(user_id))
        .order_by_desc(booking::Column::StartDate)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all bookings, optionally filtered by status, most recent travel first.
pub async fn get_all_bookings(
    db: &DatabaseConnection,
    status: Option<BookingStatus>,
) -> Result<Vec<booking::Model>> {
    let mut query = Booking::find().order_by_desc(booking::Column::StartDate);
    if let Some(status) = status {
        query = query.filter(booking::Column::Status.eq(status));
    }
    query.all(db).await.map_err(Into::into)
}

/// Applies a partial update to a booking and bumps `updated_at`.
///
/// Fields passed as `None` are left untouched. The resulting date range is
/// re-validated against whichever dates changed.
pub async fn update_booking(
    db: &DatabaseConnection,
    booking_id: i64,
    destination: Option<String>,
    start_date: Option<Date>,
    end_date: Option<Date>,
    cost: Option<f64>,
    currency: Option<String>,
    details: Option<Json>,
) -> Result<booking::Model> {
    let booking = get_booking_by_id(db, booking_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "Booking",
            id: booking_id,
        })?;

    let new_start = start_date.unwrap_or(booking.start_date);
    let new_end = end_date.unwrap_or(booking.end_date);
    if new_end < new_start {
        return Err(Error::Validation {
            message: format!("Booking end date {new_end} precedes start date {new_start}"),
        });
    }

    if let Some(cost) = cost {
        if !cost.is_finite() || cost < 0.0 {
            return Err(Error::Validation {
                message: format!("Booking cost must be a non-negative amount, got {cost}"),
            });
        }
    }

    let mut active: booking::ActiveModel = booking.into();
    if let Some(destination) = destination {
        if destination.trim().is_empty() {
            return Err(Error::Validation {
                message: "Booking destination cannot be empty".to_string(),
            });
        }
        active.destination = Set(destination.trim().to_string());
    }
    active.start_date = Set(new_start);
    active.end_date = Set(new_end);
    if let Some(cost) = cost {
        active.cost = Set(cost);
    }
    if let Some(currency) = currency {
        active.currency = Set(currency);
    }
    if let Some(details) = details {
        active.details = Set(Some(details));
    }
    active.updated_at = Set(chrono::Utc::now());

    active.update(db).await.map_err(Into::into)
}

/// Sets the status of a booking.
///
/// This is a plain field update; nothing checks approval requests or
/// expenses, the workflow around statuses lives outside this crate.
pub async fn update_booking_status(
    db: &DatabaseConnection,
    booking_id: i64,
    status: BookingStatus,
) -> Result<booking::Model> {
    let booking = get_booking_by_id(db, booking_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "Booking",
            id: booking_id,
        })?;

    let mut active: booking::ActiveModel = booking.into();
    active.status = Set(status);
    active.updated_at = Set(chrono::Utc::now());

    active.update(db).await.map_err(Into::into)
}

/// Deletes a booking by id.
///
/// Expenses that referenced the booking survive with `booking_id` cleared
/// by the database. Returns `Error::NotFound` when no row was deleted.
pub async fn delete_booking(db: &DatabaseConnection, booking_id: i64) -> Result<()> {
    let result = Booking::delete_by_id(booking_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: "Booking",
            id: booking_id,
        });
    }
    Ok(())
}
