//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. The pool is built once
//! from [`DbConfig`] and verified with a ping before the server starts.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, PgPool};

use super::DbError;
use crate::config::DbConfig;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long a request waits for a free connection before failing.
const ACQUIRE_TIMEOUT_SECS: u64 = 8;

/// Create a PostgreSQL connection pool from configuration.
///
/// # Errors
///
/// Returns [`DbError::Connect`] if the database is unreachable or the
/// liveness ping fails.
///
/// # Example
///
/// ```ignore
/// let config = DbConfig::load()?;
/// let pool = create_pool(&config).await?;
/// ```
pub async fn create_pool(config: &DbConfig) -> Result<PgPool, DbError> {
    tracing::info!(source = %config.redacted_source(), "Connecting to database");
    create_pool_with_options(&config.source, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with custom options.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, DbError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(ACQUIRE_TIMEOUT_SECS))
        .connect(database_url)
        .await
        .map_err(DbError::Connect)?;

    ping(&pool).await?;
    tracing::info!(max_connections, "Database connection verified");

    Ok(pool)
}

/// Check out one connection and ping it.
pub async fn ping(pool: &PgPool) -> Result<(), DbError> {
    let mut conn = pool.acquire().await.map_err(DbError::Connect)?;
    conn.ping().await.map_err(DbError::Connect)
}
