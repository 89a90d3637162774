//! Cat type (breed/category) model and DTOs.

use catapi_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `types` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct CatType {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCatType {
    #[serde(default)]
    pub name: String,
}

/// DTO for renaming a type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCatType {
    #[serde(default)]
    pub name: String,
}
