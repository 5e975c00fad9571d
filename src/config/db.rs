// src/config/db.rs
// DOCUMENTATION: Database connection pool initialization
// PURPOSE: Setup and manage PostgreSQL connection pool

use crate::config::Config;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Initialize PostgreSQL connection pool
/// DOCUMENTATION: Creates connection pool, verifies it, and applies the
/// embedded schema migrations when enabled.
/// Called once during application startup in main.rs
pub async fn init_db_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    log::info!("Initializing database pool ({} max connections)", config.db_max_connections);

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connection_timeout))
        // Connection idle timeout (5 minutes)
        .idle_timeout(Duration::from_secs(300))
        // Connection lifetime (30 minutes before recycle)
        .max_lifetime(Duration::from_secs(1800))
        .connect(&config.database_url)
        .await?;

    // Verify connection works
    sqlx::query("SELECT 1").execute(&pool).await?;

    if config.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        log::info!("Database migrations applied");
    }

    log::info!("Database pool initialized successfully");
    Ok(pool)
}
