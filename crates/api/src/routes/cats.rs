//! Route definitions for cats.

use axum::routing::get;
use axum::Router;

use crate::handlers::cat;
use crate::state::AppState;

/// Routes mounted at `/cats`.
///
/// ```text
/// GET    /        -> list (?include=all nests type and master)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cat::list).post(cat::create))
        .route(
            "/{id}",
            get(cat::get_by_id).put(cat::update).delete(cat::delete),
        )
}
