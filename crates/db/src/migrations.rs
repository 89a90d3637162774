//! Startup schema bootstrap.
//!
//! The `migrations` ledger records every script that has been applied. On
//! startup [`run_migrations`] applies the initial script exactly once: the
//! script and its ledger entry are written in a single transaction, so a
//! failure leaves neither behind.

use std::path::{Path, PathBuf};

use catapi_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::DbPool;

/// Ledger name of the initial schema migration.
pub const INITIAL_MIGRATION: &str = "001_init";

const CREATE_LEDGER: &str = "\
    CREATE TABLE IF NOT EXISTS migrations ( \
        id INTEGER PRIMARY KEY AUTOINCREMENT, \
        name TEXT NOT NULL UNIQUE, \
        applied_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')) \
    )";

/// A row from the `migrations` ledger.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MigrationRecord {
    pub id: DbId,
    pub name: String,
    pub applied_at: Timestamp,
}

/// What [`run_migrations`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// The initial script was executed and recorded.
    Applied,
    /// The ledger already listed the initial script; nothing ran.
    UpToDate,
}

#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("failed to create migrations table: {0}")]
    CreateLedger(#[source] sqlx::Error),

    #[error("failed to check migrations: {0}")]
    CheckLedger(#[source] sqlx::Error),

    #[error("failed to read migration file {}: {source}", .path.display())]
    ReadScript {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to begin transaction: {0}")]
    Begin(#[source] sqlx::Error),

    #[error("failed to execute migration: {0}")]
    Execute(#[source] sqlx::Error),

    #[error("failed to record migration: {0}")]
    Record(#[source] sqlx::Error),

    #[error("failed to commit migration: {0}")]
    Commit(#[source] sqlx::Error),
}

/// Path of the initial migration script inside `migrations_dir`.
pub fn initial_script_path(migrations_dir: &Path) -> PathBuf {
    migrations_dir.join(format!("{INITIAL_MIGRATION}.sql"))
}

/// Ensure the ledger exists and apply the initial migration if it is missing.
///
/// The script is only read from disk when it actually has to run, so an
/// already-migrated database starts without the migrations directory.
pub async fn run_migrations(
    pool: &DbPool,
    migrations_dir: &Path,
) -> Result<MigrationOutcome, MigrationError> {
    sqlx::query(CREATE_LEDGER)
        .execute(pool)
        .await
        .map_err(MigrationError::CreateLedger)?;

    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM migrations WHERE name = ?1")
        .bind(INITIAL_MIGRATION)
        .fetch_one(pool)
        .await
        .map_err(MigrationError::CheckLedger)?;

    if applied > 0 {
        tracing::info!("Migrations are up to date");
        return Ok(MigrationOutcome::UpToDate);
    }

    tracing::info!(migration = INITIAL_MIGRATION, "Applying initial migration");

    let path = initial_script_path(migrations_dir);
    let script =
        std::fs::read_to_string(&path).map_err(|source| MigrationError::ReadScript {
            path: path.clone(),
            source,
        })?;

    // Dropping `tx` without commit rolls everything back.
    let mut tx = pool.begin().await.map_err(MigrationError::Begin)?;

    sqlx::raw_sql(&script)
        .execute(&mut *tx)
        .await
        .map_err(MigrationError::Execute)?;

    sqlx::query("INSERT INTO migrations (name) VALUES (?1)")
        .bind(INITIAL_MIGRATION)
        .execute(&mut *tx)
        .await
        .map_err(MigrationError::Record)?;

    tx.commit().await.map_err(MigrationError::Commit)?;

    tracing::info!(migration = INITIAL_MIGRATION, "Initial migration applied successfully");
    Ok(MigrationOutcome::Applied)
}

/// List the ledger in application order.
pub async fn applied_migrations(pool: &DbPool) -> Result<Vec<MigrationRecord>, sqlx::Error> {
    sqlx::query_as::<_, MigrationRecord>(
        "SELECT id, name, applied_at FROM migrations ORDER BY id",
    )
    .fetch_all(pool)
    .await
}
