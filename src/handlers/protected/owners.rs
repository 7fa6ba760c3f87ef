use axum::extract::{Path, State};
use axum::{Extension, Json};

use crate::auth::Role;
use crate::config;
use crate::database::models::Owner;
use crate::database::repositories::{OwnerPayload, OwnerRepository};
use crate::error::ApiError;
use crate::middleware::{require_role, ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

// Reads are open to managers (they need owner contact data); writes
// are admin-only, per the access policy.

pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Vec<Owner>> {
    require_role(&user, &[Role::Manager])?;
    let owners = OwnerRepository::new(state.pool.clone()).find_all().await?;
    Ok(ApiResponse::success(owners))
}

pub async fn show(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i32>,
) -> ApiResult<Owner> {
    require_role(&user, &[Role::Manager])?;
    let owner = OwnerRepository::new(state.pool.clone()).find_by_id(id).await?;
    Ok(ApiResponse::success(owner))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<OwnerPayload>,
) -> ApiResult<Owner> {
    require_role(&user, &[])?;

    let password = payload
        .password
        .as_deref()
        .ok_or_else(|| ApiError::bad_request("Password is required"))?;
    let hash = bcrypt::hash(password, config::config().security.bcrypt_cost)?;

    let owner = OwnerRepository::new(state.pool.clone())
        .create(&payload, &hash)
        .await?;
    Ok(ApiResponse::created(owner))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i32>,
    Json(payload): Json<OwnerPayload>,
) -> ApiResult<Owner> {
    require_role(&user, &[])?;

    let hash = match payload.password.as_deref() {
        Some(password) => Some(bcrypt::hash(password, config::config().security.bcrypt_cost)?),
        None => None,
    };

    let owner = OwnerRepository::new(state.pool.clone())
        .update(id, &payload, hash.as_deref())
        .await?;
    Ok(ApiResponse::success(owner))
}

pub async fn destroy(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i32>,
) -> ApiResult<()> {
    require_role(&user, &[])?;
    OwnerRepository::new(state.pool.clone()).delete(id).await?;
    Ok(ApiResponse::<()>::no_content())
}
