//! Expense business logic - Handles all expense operations.
//!
//! Provides functions for submitting, retrieving, updating and deleting
//! expenses. Submission validates the amount and the owning user, and checks
//! that a linked booking exists when one is given. Status changes stamp or
//! clear `approved_at` but enforce no workflow beyond that.

use crate::{
    entities::{Expense, ExpenseStatus, expense},
    errors::{Error, Result},
};
use sea_orm::{ActiveValue::NotSet, QueryOrder, Set, prelude::*};

/// Submits a new expense for a user.
///
/// The amount must be a finite positive number, category and description must
/// be non-empty, and the linked booking (when given) must exist. When
/// `currency` is `None` the database default (`USD`) applies; the status
/// always starts at the database default (`PENDING`).
pub async fn create_expense(
    db: &DatabaseConnection,
    user_id: i64,
    booking_id: Option<i64>,
    category: String,
    amount: f64,
    currency: Option<String>,
    description: String,
    receipt_url: Option<String>,
) -> Result<expense::Model> {
    if category.trim().is_empty() {
        return Err(Error::Validation {
            message: "Expense category cannot be empty".to_string(),
        });
    }

    if description.trim().is_empty() {
        return Err(Error::Validation {
            message: "Expense description cannot be empty".to_string(),
        });
    }

    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::Validation {
            message: format!("Expense amount must be a positive amount, got {amount}"),
        });
    }

    crate::core::user::get_user_by_id(db, user_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "User",
            id: user_id,
        })?;

    if let Some(booking_id) = booking_id {
        crate::core::booking::get_booking_by_id(db, booking_id)
            .await?
            .ok_or(Error::NotFound {
                entity: "Booking",
                id: booking_id,
            })?;
    }

    let expense = expense::ActiveModel {
        user_id: Set(user_id),
        booking_id: Set(booking_id),
        category: Set(category.trim().to_string()),
        amount: Set(amount),
        currency: currency.map_or(NotSet, Set),
        description: Set(description.trim().to_string()),
        receipt_url: Set(receipt_url),
        submitted_at: Set(chrono::Utc::now()),
        approved_at: Set(None),
        ..Default::default()
    };

    let result = expense.insert(db).await?;
    Ok(result)
}

/// Finds an expense by its unique id.
pub async fn get_expense_by_id(
    db: &DatabaseConnection,
    expense_id: i64,
) -> Result<Option<expense::Model>> {
    Expense::find_by_id(expense_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all expenses for one user, most recently submitted first.
pub async fn get_expenses_for_user(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<expense::Model>> {
    Expense::find()
        .filter(expense::Column::UserId.eq(user_id))
        .order_by_desc(expense::Column::SubmittedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all expenses, optionally filtered by status, most recently submitted first.
pub async fn get_all_expenses(
    db: &DatabaseConnection,
    status: Option<ExpenseStatus>,
) -> Result<Vec<expense::Model>> {
    let mut query = Expense::find().order_by_desc(expense::Column::SubmittedAt);
    if let Some(status) = status {
        query = query.filter(expense::Column::Status.eq(status));
    }
    query.all(db).await.map_err(Into::into)
}

/// Applies a partial update to an expense.
///
/// Fields passed as `None` are left untouched. A new `booking_id` is checked
/// for existence before it is stored.
pub async fn update_expense(
    db: &DatabaseConnection,
    expense_id: i64,
    booking_id: Option<i64>,
    category: Option<String>,
    amount: Option<f64>,
    currency: Option<String>,
    description: Option<String>,
    receipt_url: Option<String>,
) -> Result<expense::Model> {
    let expense = get_expense_by_id(db, expense_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "Expense",
            id: expense_id,
        })?;

    if let Some(amount) = amount {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(Error::Validation {
                message: format!("Expense amount must be a positive amount, got {amount}"),
            });
        }
    }

    if let Some(booking_id) = booking_id {
        crate::core::booking::get_booking_by_id(db, booking_id)
            .await?
            .ok_or(Error::NotFound {
                entity: "Booking",
                id: booking_id,
            })?;
    }

    let mut active: expense::ActiveModel = expense.into();
    if let Some(booking_id) = booking_id {
        active.booking_id = Set(Some(booking_id));
    }
    if let Some(category) = category {
        if category.trim().is_empty() {
            return Err(Error::Validation {
                message: "Expense category cannot be empty".to_string(),
            });
        }
        active.category = Set(category.trim().to_string());
    }
    if let Some(amount) = amount {
        active.amount = Set(amount);
    }
    if let Some(currency) = currency {
        active.currency = Set(currency);
    }
    if let Some(description) = description {
        if description.trim().is_empty() {
            return Err(Error::Validation {
                message: "Expense description cannot be empty".to_string(),
            });
        }
        active.description = Set(description.trim().to_string());
    }
    if let Some(receipt_url) = receipt_url {
        active.receipt_url = Set(Some(receipt_url));
    }

    active.update(db).await.map_err(Into::into)
}

/// Sets the review status of an expense.
///
/// Moving to `APPROVED` stamps `approved_at`; any other status clears it.
/// No cross-entity rules apply, an expense can be approved regardless of
/// the state of its booking.
pub async fn set_expense_status(
    db: &DatabaseConnection,
    expense_id: i64,
    status: ExpenseStatus,
) -> Result<expense::Model> {
    let expense = get_expense_by_id(db, expense_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "Expense",
            id: expense_id,
        })?;

    let mut active: expense::ActiveModel = expense.into();
    active.status = Set(status);
    active.approved_at = Set(match status {
        ExpenseStatus::Approved => Some(chrono::Utc::now()),
        ExpenseStatus::Pending | ExpenseStatus::Rejected => None,
    });

    active.update(db).await.map_err(Into::into)
}

/// Deletes an expense by id. Returns `Error::NotFound` when no row was deleted.
pub async fn delete_expense(db: &DatabaseConnection, expense_id: i64) -> Result<()> {
    let result = Expense::delete_by_id(expense_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: "Expense",
            id: expense_id,
        });
    }
    Ok(())
}
