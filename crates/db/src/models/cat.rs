//! Cat model and DTOs.
//!
//! A [`Cat`] references one [`CatType`] and one [`Master`]. The referenced
//! rows are only attached when the caller asks for relations; otherwise the
//! nested fields stay `None` and are left out of the JSON.

use catapi_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::cat_type::CatType;
use super::master::Master;

/// A row from the `cats` table, optionally with its relations resolved.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Cat {
    pub id: DbId,
    pub name: String,
    pub cat_type_id: DbId,
    pub master_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,

    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cat_type: Option<CatType>,
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master: Option<Master>,
}

/// DTO for creating a new cat.
///
/// Missing fields deserialize to their zero value so the handler can report
/// them as a validation error instead of a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCat {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cat_type_id: DbId,
    #[serde(default)]
    pub master_id: DbId,
}

/// DTO for overwriting a cat. Every field is written.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCat {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cat_type_id: DbId,
    #[serde(default)]
    pub master_id: DbId,
}

/// Flat row produced by joining `cats` with `types` and `masters`.
///
/// The joined columns are nullable because a LEFT JOIN yields NULLs for a
/// dangling reference.
#[derive(Debug, FromRow)]
pub(crate) struct CatWithRelationsRow {
    pub id: DbId,
    pub name: String,
    pub cat_type_id: DbId,
    pub master_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,

    pub type_id: Option<DbId>,
    pub type_name: Option<String>,
    pub type_created_at: Option<Timestamp>,

    pub master_ref_id: Option<DbId>,
    pub master_first_name: Option<String>,
    pub master_last_name: Option<String>,
    pub master_place: Option<String>,
    pub master_created_at: Option<Timestamp>,
    pub master_updated_at: Option<Timestamp>,
}

impl From<CatWithRelationsRow> for Cat {
    fn from(row: CatWithRelationsRow) -> Self {
        let cat_type = match (row.type_id, row.type_name, row.type_created_at) {
            (Some(id), Some(name), Some(created_at)) => Some(CatType {
                id,
                name,
                created_at,
            }),
            _ => None,
        };

        let master = match (
            row.master_ref_id,
            row.master_first_name,
            row.master_last_name,
            row.master_place,
            row.master_created_at,
            row.master_updated_at,
        ) {
            (
                Some(id),
                Some(first_name),
                Some(last_name),
                Some(place),
                Some(created_at),
                Some(updated_at),
            ) => Some(Master {
                id,
                first_name,
                last_name,
                place,
                created_at,
                updated_at,
            }),
            _ => None,
        };

        Cat {
            id: row.id,
            name: row.name,
            cat_type_id: row.cat_type_id,
            master_id: row.master_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            cat_type,
            master,
        }
    }
}
