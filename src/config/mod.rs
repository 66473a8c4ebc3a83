//! Configuration management for database, server and seed settings.

/// Database connection and table creation
pub mod database;

/// Seed data loading from seed.toml
pub mod seed;

use crate::errors::Result;
use std::path::PathBuf;

/// Resolved application configuration, assembled from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Connection string passed to SeaORM (`sqlite://`, `postgres://` or `mysql://`)
    pub database_url: String,
    /// Address the HTTP server binds to
    pub bind_addr: String,
    /// Seed file to apply on startup, when it exists
    pub seed_path: PathBuf,
}

/// Loads the application configuration from the environment.
///
/// Reads `DATABASE_URL` (falling back to a local SQLite file), `BIND_ADDR`
/// (falling back to `0.0.0.0:3000`) and `SEED_CONFIG` (falling back to
/// `./seed.toml`). Call after `dotenvy::dotenv()` so `.env` values are seen.
pub fn load_app_configuration() -> Result<AppConfig> {
    let database_url = database::get_database_url()?;
    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let seed_path = std::env::var("SEED_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("seed.toml"));

    Ok(AppConfig {
        database_url,
        bind_addr,
        seed_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        let config = load_app_configuration().unwrap();
        assert!(!config.database_url.is_empty());
        assert!(config.bind_addr.contains(':'));
        assert_eq!(config.seed_path.extension().unwrap(), "toml");
    }
}
