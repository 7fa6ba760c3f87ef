use axum::extract::{Path, State};
use axum::Json;

use crate::database::models::Assessment;
use crate::database::repositories::{AssessmentPayload, AssessmentRepository};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

// Any authenticated user may read and record assessments; assessors
// are identified through the optional manager_id on the payload.

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Assessment>> {
    let assessments = AssessmentRepository::new(state.pool.clone())
        .find_all()
        .await?;
    Ok(ApiResponse::success(assessments))
}

pub async fn show(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<Assessment> {
    let assessment = AssessmentRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?;
    Ok(ApiResponse::success(assessment))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<AssessmentPayload>,
) -> ApiResult<Assessment> {
    let assessment = AssessmentRepository::new(state.pool.clone())
        .create(&payload)
        .await?;
    Ok(ApiResponse::created(assessment))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<AssessmentPayload>,
) -> ApiResult<Assessment> {
    let assessment = AssessmentRepository::new(state.pool.clone())
        .update(id, &payload)
        .await?;
    Ok(ApiResponse::success(assessment))
}

pub async fn destroy(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<()> {
    AssessmentRepository::new(state.pool.clone()).delete(id).await?;
    Ok(ApiResponse::<()>::no_content())
}
