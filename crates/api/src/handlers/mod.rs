//! Request handlers.
//!
//! Each submodule provides async handler functions (create, list, get_by_id,
//! update, delete) for a single entity type. Handlers validate input,
//! delegate to the corresponding repository in `catapi_db` and map errors
//! via [`AppError`](crate::error::AppError).

pub mod cat;
pub mod cat_type;
pub mod master;
