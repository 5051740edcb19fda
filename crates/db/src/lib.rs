//! Persistence layer for the vehicle manager.
//!
//! SQLite through `sqlx`. Repositories take a `&mut SqliteConnection` so the
//! caller decides the session scope (one pooled connection per HTTP request).

use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};

pub mod models;
pub mod repositories;
pub mod seed;

pub type DbPool = sqlx::SqlitePool;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Create a connection pool from a database URL.
///
/// The database file is created if it does not exist, and foreign-key
/// enforcement is switched on for every connection.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Create a single-connection pool backed by a private in-memory database.
///
/// An in-memory SQLite database lives only as long as its connection, so the
/// pool keeps exactly one connection open and never recycles it.
pub async fn connect_in_memory() -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Version of the newest migration compiled into this binary.
pub fn latest_migration_version() -> Option<i64> {
    MIGRATOR.iter().map(|m| m.version).max()
}

/// Version of the newest migration successfully applied to the database, or
/// `None` when migrations have never run.
pub async fn applied_migration_version(pool: &DbPool) -> Result<Option<i64>, sqlx::Error> {
    let tracked = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = '_sqlx_migrations'",
    )
    .fetch_one(pool)
    .await?;
    if tracked == 0 {
        return Ok(None);
    }

    sqlx::query_scalar::<_, Option<i64>>(
        "SELECT MAX(version) FROM _sqlx_migrations WHERE success = 1",
    )
    .fetch_one(pool)
    .await
}

/// Snapshot of database reachability, schema state and pool occupancy.
#[derive(Debug, Clone, Serialize)]
pub struct DbStatus {
    pub reachable: bool,
    pub schema_version: Option<i64>,
    pub expected_schema_version: Option<i64>,
    pub pool_size: u32,
    pub idle_connections: usize,
}

impl DbStatus {
    /// Reachable and migrated up to the embedded schema.
    pub fn is_healthy(&self) -> bool {
        self.reachable && self.schema_version == self.expected_schema_version
    }
}

/// Check the database. Never fails; an unreachable database is reported in
/// the returned status.
pub async fn status(pool: &DbPool) -> DbStatus {
    let (reachable, schema_version) = match applied_migration_version(pool).await {
        Ok(version) => (true, version),
        Err(err) => {
            tracing::warn!(error = %err, "Database status check failed");
            (false, None)
        }
    };

    DbStatus {
        reachable,
        schema_version,
        expected_schema_version: latest_migration_version(),
        pool_size: pool.size(),
        idle_connections: pool.num_idle(),
    }
}

/// Finish a write transaction.
///
/// Commits when `result` is `Ok`. On `Err` the transaction is rolled back
/// explicitly before the original error is returned, so a failed write never
/// leaves partial changes behind.
pub async fn commit_or_rollback<T>(
    tx: Transaction<'_, Sqlite>,
    result: Result<T, sqlx::Error>,
) -> Result<T, sqlx::Error> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            tracing::error!(error = %err, "Write failed, rolling back transaction");
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(error = %rollback_err, "Transaction rollback failed");
            }
            Err(err)
        }
    }
}
