//! PostgreSQL connection pool management

use sqlx::postgres::{PgPool, PgPoolOptions};
use stage_common::DatabaseConfig;
use std::time::Duration;

/// Create a new PostgreSQL connection pool from application configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .connect(&config.url)
        .await
}
