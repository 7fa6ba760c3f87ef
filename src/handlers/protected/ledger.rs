//! Handlers for the three financial ledgers, open to any
//! authenticated user. The three resources differ only in entity
//! type and repository constructor, hence the macro.

use axum::extract::{Path, State};
use axum::Json;

use crate::database::models::{Expense, Income, Tax};
use crate::database::repositories::{
    ExpenseRepository, IncomeRepository, LedgerPayload, TaxRepository,
};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

macro_rules! ledger_handlers {
    ($module:ident, $entity:ty, $repo:ident :: $ctor:ident) => {
        pub mod $module {
            use super::*;

            pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<$entity>> {
                let rows = $repo::$ctor(state.pool.clone()).find_all().await?;
                Ok(ApiResponse::success(rows))
            }

            pub async fn show(
                State(state): State<AppState>,
                Path(id): Path<i32>,
            ) -> ApiResult<$entity> {
                let row = $repo::$ctor(state.pool.clone()).find_by_id(id).await?;
                Ok(ApiResponse::success(row))
            }

            pub async fn create(
                State(state): State<AppState>,
                Json(payload): Json<LedgerPayload>,
            ) -> ApiResult<$entity> {
                let row = $repo::$ctor(state.pool.clone()).create(&payload).await?;
                Ok(ApiResponse::created(row))
            }

            pub async fn update(
                State(state): State<AppState>,
                Path(id): Path<i32>,
                Json(payload): Json<LedgerPayload>,
            ) -> ApiResult<$entity> {
                let row = $repo::$ctor(state.pool.clone()).update(id, &payload).await?;
                Ok(ApiResponse::success(row))
            }

            pub async fn destroy(
                State(state): State<AppState>,
                Path(id): Path<i32>,
            ) -> ApiResult<()> {
                $repo::$ctor(state.pool.clone()).delete(id).await?;
                Ok(ApiResponse::<()>::no_content())
            }
        }
    };
}

ledger_handlers!(expenses, Expense, ExpenseRepository::expenses);
ledger_handlers!(taxes, Tax, TaxRepository::taxes);
ledger_handlers!(incomes, Income, IncomeRepository::incomes);
