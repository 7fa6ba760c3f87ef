use serde::Deserialize;
use sqlx::PgPool;

use crate::database::models::Owner;

#[derive(Debug, Deserialize)]
pub struct OwnerPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub document: String,
    pub document_type: String,
    /// Plain-text on input only; hashed before it reaches the repository.
    pub password: Option<String>,
}

pub struct OwnerRepository {
    pool: PgPool,
}

impl OwnerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Owner>, sqlx::Error> {
        sqlx::query_as::<_, Owner>("SELECT * FROM owners ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Owner, sqlx::Error> {
        sqlx::query_as::<_, Owner>("SELECT * FROM owners WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Owner>, sqlx::Error> {
        sqlx::query_as::<_, Owner>("SELECT * FROM owners WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create(
        &self,
        payload: &OwnerPayload,
        password_hash: &str,
    ) -> Result<Owner, sqlx::Error> {
        sqlx::query_as::<_, Owner>(
            "INSERT INTO owners (name, email, phone, document, document_type, password_hash) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(&payload.document)
        .bind(&payload.document_type)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
    }

    /// Update every mutable column; the password hash only when a new
    /// one was supplied.
    pub async fn update(
        &self,
        id: i32,
        payload: &OwnerPayload,
        password_hash: Option<&str>,
    ) -> Result<Owner, sqlx::Error> {
        sqlx::query_as::<_, Owner>(
            "UPDATE owners SET name = $2, email = $3, phone = $4, document = $5, \
             document_type = $6, password_hash = COALESCE($7, password_hash) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(&payload.document)
        .bind(&payload.document_type)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM owners WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }
        Ok(())
    }
}
