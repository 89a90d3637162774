//! Repository for the `masters` table.

use catapi_core::types::DbId;
use sqlx::SqlitePool;

use super::NOW;
use crate::models::master::{CreateMaster, Master, UpdateMaster};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, place, created_at, updated_at";

/// Provides CRUD operations for masters.
pub struct MasterRepo;

impl MasterRepo {
    /// Insert a new master, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateMaster) -> Result<Master, sqlx::Error> {
        let query = format!(
            "INSERT INTO masters (first_name, last_name, place) \
             VALUES (?1, ?2, ?3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Master>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.place)
            .fetch_one(pool)
            .await
    }

    /// Find a master by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Master>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM masters WHERE id = ?1");
        sqlx::query_as::<_, Master>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all masters ordered by ID.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Master>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM masters ORDER BY id");
        sqlx::query_as::<_, Master>(&query).fetch_all(pool).await
    }

    /// Overwrite every writable field of a master and bump `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateMaster,
    ) -> Result<Option<Master>, sqlx::Error> {
        let query = format!(
            "UPDATE masters SET \
                first_name = ?2, \
                last_name = ?3, \
                place = ?4, \
                updated_at = {NOW} \
             WHERE id = ?1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Master>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.place)
            .fetch_optional(pool)
            .await
    }

    /// Delete a master by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while any cat still references it.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM masters WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
