pub mod cats;
pub mod health;
pub mod masters;
pub mod types;

use axum::Router;

use crate::state::AppState;

/// Build the entity route tree.
///
/// Route hierarchy:
///
/// ```text
/// /cats                 list, create
/// /cats/{id}            get (with type + master), update, delete
///
/// /types                list, create
/// /types/{id}           get, update, delete
///
/// /masters              list, create
/// /masters/{id}         get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/cats", cats::router())
        .nest("/types", types::router())
        .nest("/masters", masters::router())
}
