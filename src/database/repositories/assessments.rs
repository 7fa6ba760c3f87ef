use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;

use crate::database::models::Assessment;

#[derive(Debug, Deserialize)]
pub struct AssessmentPayload {
    pub property_id: i32,
    pub value: Decimal,
    pub assessment_date: NaiveDate,
    pub manager_id: Option<i32>,
}

pub struct AssessmentRepository {
    pool: PgPool,
}

impl AssessmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Assessment>, sqlx::Error> {
        sqlx::query_as::<_, Assessment>("SELECT * FROM assessments ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    /// Assessment history for one property, oldest first.
    pub async fn find_by_property(&self, property_id: i32) -> Result<Vec<Assessment>, sqlx::Error> {
        sqlx::query_as::<_, Assessment>(
            "SELECT * FROM assessments WHERE property_id = $1 ORDER BY assessment_date, id",
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Assessment, sqlx::Error> {
        sqlx::query_as::<_, Assessment>("SELECT * FROM assessments WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn create(&self, payload: &AssessmentPayload) -> Result<Assessment, sqlx::Error> {
        sqlx::query_as::<_, Assessment>(
            "INSERT INTO assessments (property_id, value, assessment_date, manager_id) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(payload.property_id)
        .bind(payload.value)
        .bind(payload.assessment_date)
        .bind(payload.manager_id)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update(
        &self,
        id: i32,
        payload: &AssessmentPayload,
    ) -> Result<Assessment, sqlx::Error> {
        sqlx::query_as::<_, Assessment>(
            "UPDATE assessments SET property_id = $2, value = $3, assessment_date = $4, \
             manager_id = $5 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(payload.property_id)
        .bind(payload.value)
        .bind(payload.assessment_date)
        .bind(payload.manager_id)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM assessments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }
        Ok(())
    }
}
