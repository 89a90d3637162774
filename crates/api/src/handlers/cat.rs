//! Handlers for the `/cats` resource.
//!
//! Single-cat reads always resolve the cat's type and master. The list
//! endpoint only does so when called with `?include=all`.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catapi_core::types::DbId;
use catapi_core::validation::validate_cat_fields;
use catapi_db::models::cat::{CreateCat, UpdateCat};
use catapi_db::repositories::CatRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::query::IncludeParams;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /cats?include=all
///
/// List all cats. With `include=all` each cat carries its nested
/// `cat_type` and `master`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<IncludeParams>,
) -> AppResult<impl IntoResponse> {
    let cats = if params.includes_relations() {
        CatRepo::list_with_relations(&state.pool).await?
    } else {
        CatRepo::list(&state.pool).await?
    };
    Ok(Json(cats))
}

/// POST /cats
///
/// Create a new cat. `name`, `cat_type_id` and `master_id` are required.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCat>,
) -> AppResult<impl IntoResponse> {
    validate_cat_fields(&input.name, input.cat_type_id, input.master_id)?;

    let cat = CatRepo::create(&state.pool, &input).await?;
    tracing::info!(cat_id = cat.id, "Cat created");
    Ok((StatusCode::CREATED, Json(cat)))
}

/// GET /cats/{id}
///
/// Fetch one cat with its type and master resolved.
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let cat = CatRepo::find_by_id_with_relations(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Cat", id))?;
    Ok(Json(cat))
}

/// PUT /cats/{id}
///
/// Overwrite a cat. Same required fields as create.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateCat>,
) -> AppResult<impl IntoResponse> {
    validate_cat_fields(&input.name, input.cat_type_id, input.master_id)?;

    let cat = CatRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Cat", id))?;
    Ok(Json(cat))
}

/// DELETE /cats/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if !CatRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Cat", id));
    }
    tracing::info!(cat_id = id, "Cat deleted");
    Ok(StatusCode::NO_CONTENT)
}
