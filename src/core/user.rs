//! User business logic - Handles all user account operations.
//!
//! Provides functions for creating, retrieving, updating and deleting users.
//! Email uniqueness is enforced by the database; deleting a user relies on
//! the schema's cascade rules to clean up dependent rows.

use crate::{
    entities::{Role, User, user},
    errors::{Error, Result},
};
use sea_orm::{ActiveValue::NotSet, QueryOrder, Set, prelude::*};

/// Creates a new user account.
///
/// The name must be non-empty and the email must look like an address.
/// When `role` is `None` the column is omitted from the insert so the
/// database default (`EMPLOYEE`) applies.
pub async fn create_user(
    db: &DatabaseConnection,
    name: String,
    email: String,
    role: Option<Role>,
    department: Option<String>,
) -> Result<user::Model> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            message: "User name cannot be empty".to_string(),
        });
    }

    let email = email.trim().to_string();
    if email.is_empty() || !email.contains('@') {
        return Err(Error::Validation {
            message: format!("Invalid email address: {email:?}"),
        });
    }

    let now = chrono::Utc::now();
    let user = user::ActiveModel {
        name: Set(name.trim().to_string()),
        email: Set(email),
        role: role.map_or(NotSet, Set),
        department: Set(department),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let result = user.insert(db).await?;
    Ok(result)
}

/// Finds a user by their unique id.
pub async fn get_user_by_id(db: &DatabaseConnection, user_id: i64) -> Result<Option<user::Model>> {
    User::find_by_id(user_id).one(db).await.map_err(Into::into)
}

/// Finds a user by their unique email.
pub async fn get_user_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<user::Model>> {
    User::find()
        .filter(user::Column::Email.eq(email))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all users, ordered alphabetically by name.
pub async fn get_all_users(db: &DatabaseConnection) -> Result<Vec<user::Model>> {
    User::find()
        .order_by_asc(user::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Applies a partial update to a user and bumps `updated_at`.
///
/// Fields passed as `None` are left untouched. Returns the updated model,
/// or `Error::NotFound` when no such user exists.
pub async fn update_user(
    db: &DatabaseConnection,
    user_id: i64,
    name: Option<String>,
    email: Option<String>,
    role: Option<Role>,
    department: Option<String>,
) -> Result<user::Model> {
    let user = get_user_by_id(db, user_id).await?.ok_or(Error::NotFound {
        entity: "User",
        id: user_id,
    })?;

    let mut active: user::ActiveModel = user.into();
    if let Some(name) = name {
        if name.trim().is_empty() {
            return Err(Error::Validation {
                message: "User name cannot be empty".to_string(),
            });
        }
        active.name = Set(name.trim().to_string());
    }
    if let Some(email) = email {
        let email = email.trim().to_string();
        if email.is_empty() || !email.contains('@') {
            return Err(Error::Validation {
                message: format!("Invalid email address: {email:?}"),
            });
        }
        active.email = Set(email);
    }
    if let Some(role) = role {
        active.role = Set(role);
    }
    if let Some(department) = department {
        active.department = Set(Some(department));
    }
    active.updated_at = Set(chrono::Utc::now());

    active.update(db).await.map_err(Into::into)
}

/// Deletes a user by id.
///
/// The database cascades this to the user's bookings, expenses, location
/// pings and requested approvals, and clears the approver on approvals they
/// decided. Returns `Error::NotFound` when no row was deleted.
pub async fn delete_user(db: &DatabaseConnection, user_id: i64) -> Result<()> {
    let result = User::delete_by_id(user_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: "User",
            id: user_id,
        });
    }
    Ok(())
}
