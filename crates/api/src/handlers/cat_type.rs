//! Handlers for the `/types` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catapi_core::types::DbId;
use catapi_core::validation::validate_type_fields;
use catapi_db::models::cat_type::{CreateCatType, UpdateCatType};
use catapi_db::repositories::CatTypeRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

/// GET /types
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let types = CatTypeRepo::list(&state.pool).await?;
    Ok(Json(types))
}

/// POST /types
///
/// Create a new type. `name` is required.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCatType>,
) -> AppResult<impl IntoResponse> {
    validate_type_fields(&input.name)?;

    let cat_type = CatTypeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(cat_type)))
}

/// GET /types/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let cat_type = CatTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Type", id))?;
    Ok(Json(cat_type))
}

/// PUT /types/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateCatType>,
) -> AppResult<impl IntoResponse> {
    validate_type_fields(&input.name)?;

    let cat_type = CatTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Type", id))?;
    Ok(Json(cat_type))
}

/// DELETE /types/{id}
///
/// Returns 409 while any cat still references the type.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if !CatTypeRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Type", id));
    }
    Ok(StatusCode::NO_CONTENT)
}
