//! Master (owner/caretaker) model and DTOs.

use catapi_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `masters` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Master {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub place: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new master. `place` defaults to an empty string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMaster {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub place: String,
}

/// DTO for overwriting a master.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMaster {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub place: String,
}
