use std::path::PathBuf;

use catapi_db::DbPool;
use tempfile::TempDir;

/// Directory holding the on-disk migration scripts.
pub fn migrations_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../db/migrations")
}

/// Open a pool on a fresh database file inside a temporary directory.
///
/// The returned `TempDir` must be kept alive for as long as the pool is used.
pub async fn empty_pool() -> (TempDir, DbPool) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let pool = catapi_db::create_pool(&dir.path().join("cats.db"))
        .await
        .expect("open test database");
    (dir, pool)
}

/// Open a pool on a fresh database with the initial migration applied.
pub async fn migrated_pool() -> (TempDir, DbPool) {
    let (dir, pool) = empty_pool().await;
    catapi_db::run_migrations(&pool, &migrations_dir())
        .await
        .expect("apply migrations");
    (dir, pool)
}
