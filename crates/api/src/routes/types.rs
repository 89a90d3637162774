//! Route definitions for cat types.

use axum::routing::get;
use axum::Router;

use crate::handlers::cat_type;
use crate::state::AppState;

/// Routes mounted at `/types`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cat_type::list).post(cat_type::create))
        .route(
            "/{id}",
            get(cat_type::get_by_id)
                .put(cat_type::update)
                .delete(cat_type::delete),
        )
}
