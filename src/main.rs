//! Satlogix server binary: connect, migrate, seed, serve.

use dotenvy::dotenv;
use satlogix::{
    api::{self, AppState},
    config,
    errors::Result,
    seed,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; non-fatal, env vars can be set externally
    dotenv().ok();

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()?;
    info!(database_url = %app_config.database_url, "Loaded application configuration");

    // 4. Connect and create tables
    let db = config::database::create_connection(&app_config.database_url)
        .await
        .inspect(|_| info!("Database connection established"))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    config::database::create_tables(&db).await?;

    // 5. Seed demo data when a seed file is present
    if app_config.seed_path.exists() {
        let seed_config = config::seed::load_seed_config(&app_config.seed_path)?;
        seed::seed_database(&db, &seed_config)
            .await
            .inspect_err(|e| error!("Failed to seed database: {e}"))?;
    } else {
        info!(path = %app_config.seed_path.display(), "No seed file, skipping seed step");
    }

    // 6. Serve the REST API
    let listener = tokio::net::TcpListener::bind(&app_config.bind_addr).await?;
    info!(addr = %app_config.bind_addr, "Listening");
    axum::serve(listener, api::router(AppState { db }))
        .await
        .map_err(Into::into)
}
