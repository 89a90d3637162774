//! Handlers for the `/masters` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catapi_core::types::DbId;
use catapi_core::validation::validate_master_fields;
use catapi_db::models::master::{CreateMaster, UpdateMaster};
use catapi_db::repositories::MasterRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

/// GET /masters
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let masters = MasterRepo::list(&state.pool).await?;
    Ok(Json(masters))
}

/// POST /masters
///
/// Create a new master. `first_name` and `last_name` are required.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateMaster>,
) -> AppResult<impl IntoResponse> {
    validate_master_fields(&input.first_name, &input.last_name)?;

    let master = MasterRepo::create(&state.pool, &input).await?;
    tracing::info!(master_id = master.id, "Master created");
    Ok((StatusCode::CREATED, Json(master)))
}

/// GET /masters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let master = MasterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Master", id))?;
    Ok(Json(master))
}

/// PUT /masters/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateMaster>,
) -> AppResult<impl IntoResponse> {
    validate_master_fields(&input.first_name, &input.last_name)?;

    let master = MasterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Master", id))?;
    Ok(Json(master))
}

/// DELETE /masters/{id}
///
/// Returns 409 while any cat still references the master.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if !MasterRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Master", id));
    }
    Ok(StatusCode::NO_CONTENT)
}
