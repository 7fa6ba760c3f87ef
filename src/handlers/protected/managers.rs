use axum::extract::{Path, State};
use axum::Json;

use crate::config;
use crate::database::models::Manager;
use crate::database::repositories::{ManagerPayload, ManagerRepository};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Manager>> {
    let managers = ManagerRepository::new(state.pool.clone()).find_all().await?;
    Ok(ApiResponse::success(managers))
}

pub async fn show(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<Manager> {
    let manager = ManagerRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?;
    Ok(ApiResponse::success(manager))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ManagerPayload>,
) -> ApiResult<Manager> {
    let password = payload
        .password
        .as_deref()
        .ok_or_else(|| ApiError::bad_request("Password is required"))?;
    let hash = bcrypt::hash(password, config::config().security.bcrypt_cost)?;

    let manager = ManagerRepository::new(state.pool.clone())
        .create(&payload, &hash)
        .await?;
    Ok(ApiResponse::created(manager))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ManagerPayload>,
) -> ApiResult<Manager> {
    let hash = match payload.password.as_deref() {
        Some(password) => Some(bcrypt::hash(password, config::config().security.bcrypt_cost)?),
        None => None,
    };

    let manager = ManagerRepository::new(state.pool.clone())
        .update(id, &payload, hash.as_deref())
        .await?;
    Ok(ApiResponse::success(manager))
}

pub async fn destroy(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<()> {
    ManagerRepository::new(state.pool.clone()).delete(id).await?;
    Ok(ApiResponse::<()>::no_content())
}
