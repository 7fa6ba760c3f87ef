use axum::Extension;
use serde_json::{json, Value};

use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// GET /api/me - identity of the calling user, from token claims.
pub async fn me(Extension(user): Extension<AuthUser>) -> ApiResult<Value> {
    Ok(ApiResponse::success(json!({
        "id": user.user_id,
        "name": user.name,
        "email": user.email,
        "role": user.role,
    })))
}
