//! Unified error types for the Satlogix data layer.
//!
//! All fallible functions in this crate return [`Result`], so callers can use
//! `?` throughout. Database errors are wrapped unchanged; the route layer
//! collapses everything into a single 500 envelope anyway.

use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong while loading configuration
        message: String,
    },

    /// Input failed validation before touching the database
    #[error("Validation error: {message}")]
    Validation {
        /// Which check failed
        message: String,
    },

    /// A referenced record does not exist
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Table the lookup ran against
        entity: &'static str,
        /// The id that was looked up
        id: i64,
    },

    /// Error bubbled up from SeaORM / the database driver
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error (seed file, listener binding)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
