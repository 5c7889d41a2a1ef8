//! Postgres access for the Callboard dashboard.
//!
//! - [`models`] -- row structs (`FromRow`) and input DTOs.
//! - [`repositories`] -- zero-sized repos returning `Result<_, sqlx::Error>`.
//! - [`views`] -- display-ready view models built on the repositories.
//!   Reads at this layer never fail: errors are logged and surface as an
//!   empty list or `None`.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod views;

pub type DbPool = sqlx::PgPool;

/// Default pool size when `DB_MAX_CONNECTIONS` is not configured.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
