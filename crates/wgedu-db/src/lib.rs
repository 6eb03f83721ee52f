//! # WG Edu DB
//!
//! PostgreSQL pool construction and schema setup.
//!
//! The schema lives in the workspace `migrations/` directory and is embedded
//! into the binary at compile time. Every statement there is idempotent
//! (`CREATE ... IF NOT EXISTS`), so [`run_migrations`] is safe to call on
//! each startup.
//!
//! # Example
//!
//! ```ignore
//! use wgedu_config::DatabaseConfig;
//! use wgedu_db::{init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//! run_migrations(&pool).await?;
//! ```

use std::time::Duration;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use wgedu_config::DatabaseConfig;

pub use sqlx::PgPool;

pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Opens a PostgreSQL connection pool.
///
/// The pool is cheap to clone and is shared by every request through the
/// application state. Connection acquisition is bounded by
/// `acquire_timeout_secs` so a saturated pool surfaces as an error instead
/// of a hung request.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        "Connected to database"
    );

    Ok(pool)
}

/// Applies the embedded schema.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}
