//! Repository for the `types` table.

use catapi_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::cat_type::{CatType, CreateCatType, UpdateCatType};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at";

/// Provides CRUD operations for cat types.
pub struct CatTypeRepo;

impl CatTypeRepo {
    /// Insert a new type, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateCatType) -> Result<CatType, sqlx::Error> {
        let query = format!("INSERT INTO types (name) VALUES (?1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, CatType>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a type by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<CatType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM types WHERE id = ?1");
        sqlx::query_as::<_, CatType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all types ordered by ID.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<CatType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM types ORDER BY id");
        sqlx::query_as::<_, CatType>(&query).fetch_all(pool).await
    }

    /// Rename a type.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateCatType,
    ) -> Result<Option<CatType>, sqlx::Error> {
        let query = format!("UPDATE types SET name = ?2 WHERE id = ?1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, CatType>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a type by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while any cat still references it.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM types WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
