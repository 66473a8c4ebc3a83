//! Database seeding from a seed.toml file.
//!
//! Applies the parsed [`SeedConfig`](crate::config::seed::SeedConfig) to a
//! fresh database. Seeding is idempotent at the run level: if any users
//! already exist the whole step is skipped, so restarting the server never
//! duplicates demo data.

use crate::{
    config::seed::SeedConfig,
    core::{booking, expense, user},
    entities::User,
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use std::collections::HashMap;
use tracing::info;

fn parse_seed_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| Error::Config {
        message: format!("Invalid seed date {value:?}: {e}"),
    })
}

/// Inserts the seed data unless the database already holds users.
///
/// Users are created first; bookings and expenses then resolve their owner
/// by email against the users inserted in this run. Referencing an email
/// that is not in the seed file is a configuration error.
pub async fn seed_database(db: &DatabaseConnection, config: &SeedConfig) -> Result<()> {
    let existing = User::find().count(db).await?;
    if existing > 0 {
        info!("Database already has {existing} users, skipping seed");
        return Ok(());
    }

    let mut ids_by_email: HashMap<String, i64> = HashMap::new();
    for seed_user in &config.users {
        let created = user::create_user(
            db,
            seed_user.name.clone(),
            seed_user.email.clone(),
            seed_user.role,
            seed_user.department.clone(),
        )
        .await?;
        ids_by_email.insert(created.email.clone(), created.id);
    }

    for seed_booking in &config.bookings {
        let user_id = *ids_by_email
            .get(&seed_booking.user)
            .ok_or_else(|| Error::Config {
                message: format!("Seed booking references unknown user {:?}", seed_booking.user),
            })?;
        booking::create_booking(
            db,
            user_id,
            seed_booking.booking_type,
            seed_booking.destination.clone(),
            parse_seed_date(&seed_booking.start_date)?,
            parse_seed_date(&seed_booking.end_date)?,
            seed_booking.cost,
            seed_booking.currency.clone(),
            None,
        )
        .await?;
    }

    for seed_expense in &config.expenses {
        let user_id = *ids_by_email
            .get(&seed_expense.user)
            .ok_or_else(|| Error::Config {
                message: format!("Seed expense references unknown user {:?}", seed_expense.user),
            })?;
        expense::create_expense(
            db,
            user_id,
            None,
            seed_expense.category.clone(),
            seed_expense.amount,
            seed_expense.currency.clone(),
            seed_expense.description.clone(),
            None,
        )
        .await?;
    }

    info!(
        users = config.users.len(),
        bookings = config.bookings.len(),
        expenses = config.expenses.len(),
        "Seeded database"
    );
    Ok(())
}
