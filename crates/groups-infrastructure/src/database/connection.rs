//! Database connection pool

use groups_core::DomainError;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use tracing::{error, info};

/// Connect, check the server answers, and make sure the `groups` table exists.
pub async fn create_pool(
    url: &str,
    max_connections: u32,
    connect_timeout: Duration,
) -> Result<PgPool, DomainError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(connect_timeout)
        .connect(url)
        .await
        .map_err(|e| {
            error!("Failed to connect to database {}: {}", url, e);
            DomainError::operation_failed(format!("failed to connect to {}", url), e)
        })?;

    sqlx::query("SELECT 1").execute(&pool).await.map_err(|e| {
        error!("Failed to check database {}: {}", url, e);
        DomainError::operation_failed(format!("failed to check {}", url), e)
    })?;

    ensure_groups_table(&pool).await.map_err(|e| {
        error!("Failed to prepare groups table: {}", e);
        DomainError::operation_failed("failed to prepare groups table", e)
    })?;

    info!("Database ready at {}", url);
    Ok(pool)
}

async fn ensure_groups_table(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS groups (
            id   TEXT PRIMARY KEY,
            name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}
