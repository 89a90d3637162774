//! Route definitions for masters.

use axum::routing::get;
use axum::Router;

use crate::handlers::master;
use crate::state::AppState;

/// Routes mounted at `/masters`.
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
        .route("/", get(master::list).post(master::create))
        .route(
            "/{id}",
            get(master::get_by_id).put(master::update).delete(master::delete),
        )
}
