//! Startup sequence for the HTTP server
//!
//! Configuration and database failures abort here, before the listener is
//! bound. Once serving, request failures are HTTP errors only.

use anyhow::{Context, Result};

use userbase_server::{create_pool, run_server, AppState, DbConfig, ServerConfig};

/// Load config, open the pool and serve until shutdown
pub async fn run_serve() -> Result<()> {
    let db_config = DbConfig::load().context("Failed to load database configuration")?;

    // Create database pool
    let pool = create_pool(&db_config)
        .await
        .context("Failed to connect to database")?;

    let config = ServerConfig::default();
    tracing::info!("Starting userbase server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(AppState::postgres(pool), config)
        .await
        .context("Server error")?;

    Ok(())
}
