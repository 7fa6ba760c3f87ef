use serde::Deserialize;
use sqlx::PgPool;

use crate::database::models::Manager;

#[derive(Debug, Deserialize)]
pub struct ManagerPayload {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub cpf: String,
    pub password: Option<String>,
}

pub struct ManagerRepository {
    pool: PgPool,
}

impl ManagerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Manager>, sqlx::Error> {
        sqlx::query_as::<_, Manager>("SELECT * FROM managers ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Manager, sqlx::Error> {
        sqlx::query_as::<_, Manager>("SELECT * FROM managers WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Manager>, sqlx::Error> {
        sqlx::query_as::<_, Manager>("SELECT * FROM managers WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create(
        &self,
        payload: &ManagerPayload,
        password_hash: &str,
    ) -> Result<Manager, sqlx::Error> {
        sqlx::query_as::<_, Manager>(
            "INSERT INTO managers (name, email, phone, cpf, password_hash) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(&payload.cpf)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update(
        &self,
        id: i32,
        payload: &ManagerPayload,
        password_hash: Option<&str>,
    ) -> Result<Manager, sqlx::Error> {
        sqlx::query_as::<_, Manager>(
            "UPDATE managers SET name = $2, email = $3, phone = $4, cpf = $5, \
             password_hash = COALESCE($6, password_hash) WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(&payload.cpf)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM managers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }
        Ok(())
    }
}
