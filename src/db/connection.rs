use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use crate::config::AppConfig;
use crate::db::errors::{DatabaseError, Result};

/// Create the connection pool from explicit configuration.
///
/// Each request checks a connection out of this pool and releases it when
/// the handler's guard drops, on every exit path. Checkout is bounded by
/// the config's fixed acquire timeout; a store that cannot be reached in
/// that window is reported immediately, not retried.
pub async fn create_pool(config: &AppConfig) -> Result<PgPool> {
    info!("Creating database connection pool");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.database_url)
        .await
        .map_err(|e| DatabaseError::ConnectionError(format!("Failed to create pool: {}", e)))?;

    info!("Database connection pool created successfully");
    Ok(pool)
}

/// Round-trip a trivial query, reporting an unreachable store as a
/// connection failure. Backs the health endpoint.
pub async fn ping(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(|e| DatabaseError::ConnectionError(format!("Database connection failed: {}", e)))?;
    Ok(())
}
