use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::middleware::{ApiResponse, ApiResult};
use crate::services::{AuthService, LoginResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/login - authenticate and receive a JWT session token.
///
/// The email is probed across all three role tables; the response
/// carries the token plus the resolved user and role.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let response = AuthService::new(state.pool.clone())
        .authenticate(&payload.email, &payload.password)
        .await?;

    Ok(ApiResponse::success(response))
}
