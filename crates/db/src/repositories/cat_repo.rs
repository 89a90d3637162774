//! Repository for the `cats` table.
//!
//! Besides plain CRUD this repository can resolve a cat's type and master
//! in the same statement via LEFT JOINs (see [`CatRepo::list_with_relations`]).

use catapi_core::types::DbId;
use sqlx::SqlitePool;

use super::NOW;
use crate::models::cat::{Cat, CatWithRelationsRow, CreateCat, UpdateCat};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, cat_type_id, master_id, created_at, updated_at";

/// SELECT/FROM clause joining a cat with its type and master.
///
/// Joined columns are aliased to the field names of [`CatWithRelationsRow`].
const JOINED_SELECT: &str = "\
    SELECT c.id, c.name, c.cat_type_id, c.master_id, c.created_at, c.updated_at, \
           t.id AS type_id, t.name AS type_name, t.created_at AS type_created_at, \
           m.id AS master_ref_id, m.first_name AS master_first_name, \
           m.last_name AS master_last_name, m.place AS master_place, \
           m.created_at AS master_created_at, m.updated_at AS master_updated_at \
    FROM cats c \
    LEFT JOIN types t ON c.cat_type_id = t.id \
    LEFT JOIN masters m ON c.master_id = m.id";

/// Provides CRUD operations for cats.
pub struct CatRepo;

impl CatRepo {
    /// Insert a new cat, returning the created row (relations not resolved).
    pub async fn create(pool: &SqlitePool, input: &CreateCat) -> Result<Cat, sqlx::Error> {
        let query = format!(
            "INSERT INTO cats (name, cat_type_id, master_id) \
             VALUES (?1, ?2, ?3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cat>(&query)
            .bind(&input.name)
            .bind(input.cat_type_id)
            .bind(input.master_id)
            .fetch_one(pool)
            .await
    }

    /// Find a cat by its ID without resolving relations.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Cat>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cats WHERE id = ?1");
        sqlx::query_as::<_, Cat>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a cat by its ID with its type and master attached.
    pub async fn find_by_id_with_relations(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<Cat>, sqlx::Error> {
        let query = format!("{JOINED_SELECT} WHERE c.id = ?1");
        let row = sqlx::query_as::<_, CatWithRelationsRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Cat::from))
    }

    /// List all cats ordered by ID.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Cat>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cats ORDER BY id");
        sqlx::query_as::<_, Cat>(&query).fetch_all(pool).await
    }

    /// List all cats ordered by ID, each with its type and master attached.
    ///
    /// A cat whose type or master row is missing is still returned; the
    /// corresponding nested field is `None`.
    pub async fn list_with_relations(pool: &SqlitePool) -> Result<Vec<Cat>, sqlx::Error> {
        let query = format!("{JOINED_SELECT} ORDER BY c.id");
        let rows = sqlx::query_as::<_, CatWithRelationsRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Cat::from).collect())
    }

    /// Overwrite every writable field of a cat and bump `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateCat,
    ) -> Result<Option<Cat>, sqlx::Error> {
        let query = format!(
            "UPDATE cats SET \
                name = ?2, \
                cat_type_id = ?3, \
                master_id = ?4, \
                updated_at = {NOW} \
             WHERE id = ?1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cat>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.cat_type_id)
            .bind(input.master_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a cat by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cats WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
