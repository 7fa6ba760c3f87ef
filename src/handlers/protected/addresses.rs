use axum::extract::{Path, State};
use axum::Json;

use crate::database::models::Address;
use crate::database::repositories::{AddressPayload, AddressRepository};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Address>> {
    let addresses = AddressRepository::new(state.pool.clone()).find_all().await?;
    Ok(ApiResponse::success(addresses))
}

pub async fn show(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<Address> {
    let address = AddressRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?;
    Ok(ApiResponse::success(address))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<AddressPayload>,
) -> ApiResult<Address> {
    let address = AddressRepository::new(state.pool.clone())
        .create(&payload)
        .await?;
    Ok(ApiResponse::created(address))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<AddressPayload>,
) -> ApiResult<Address> {
    let address = AddressRepository::new(state.pool.clone())
        .update(id, &payload)
        .await?;
    Ok(ApiResponse::success(address))
}

pub async fn destroy(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<()> {
    AddressRepository::new(state.pool.clone()).delete(id).await?;
    Ok(ApiResponse::<()>::no_content())
}
