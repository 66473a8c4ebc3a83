//! Seed data loading from seed.toml
//!
//! This module parses the optional seed file used to populate a fresh
//! database with demo users, bookings and expenses. Bookings and expenses
//! reference their owning user by email, which the seed step resolves to a
//! row id after the users have been inserted.

use crate::entities::{BookingType, Role};
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Structure of the entire seed.toml file
#[derive(Debug, Deserialize)]
pub struct SeedConfig {
    /// Users to create
    #[serde(default)]
    pub users: Vec<SeedUser>,
    /// Bookings to create, keyed to users by email
    #[serde(default)]
    pub bookings: Vec<SeedBooking>,
    /// Expenses to create, keyed to users by email
    #[serde(default)]
    pub expenses: Vec<SeedExpense>,
}

/// A user row in the seed file
#[derive(Debug, Deserialize, Clone)]
pub struct SeedUser {
    /// Display name
    pub name: String,
    /// Unique email
    pub email: String,
    /// Role; omitted entries get the database default (`EMPLOYEE`)
    pub role: Option<Role>,
    /// Optional department
    pub department: Option<String>,
}

/// A booking row in the seed file
#[derive(Debug, Deserialize, Clone)]
pub struct SeedBooking {
    /// Email of the owning user
    pub user: String,
    /// What kind of booking this is
    pub booking_type: BookingType,
    /// Destination city or venue
    pub destination: String,
    /// First day of travel, `YYYY-MM-DD`
    pub start_date: String,
    /// Last day of travel, `YYYY-MM-DD`
    pub end_date: String,
    /// Total cost
    pub cost: f64,
    /// Currency; omitted entries get the database default (`USD`)
    pub currency: Option<String>,
}

/// An expense row in the seed file
#[derive(Debug, Deserialize, Clone)]
pub struct SeedExpense {
    /// Email of the owning user
    pub user: String,
    /// Expense category
    pub category: String,
    /// Amount claimed
    pub amount: f64,
    /// Description shown to approvers
    pub description: String,
    /// Currency; omitted entries get the database default (`USD`)
    pub currency: Option<String>,
}

/// Loads seed configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read, the TOML syntax is invalid,
/// or required fields are missing.
pub fn load_seed_config<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read seed file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seed file: {e}"),
    })
}
