use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;

use crate::database::models::Address;

#[derive(Debug, Deserialize)]
pub struct AddressPayload {
    pub street: String,
    pub number: String,
    pub district: String,
    pub city: String,
    pub state: String,
    pub postal_code: Option<String>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
}

pub struct AddressRepository {
    pool: PgPool,
}

impl AddressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Address>, sqlx::Error> {
        sqlx::query_as::<_, Address>("SELECT * FROM addresses ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Address, sqlx::Error> {
        sqlx::query_as::<_, Address>("SELECT * FROM addresses WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn create(&self, payload: &AddressPayload) -> Result<Address, sqlx::Error> {
        sqlx::query_as::<_, Address>(
            "INSERT INTO addresses (street, number, district, city, state, postal_code, \
             latitude, longitude) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(&payload.street)
        .bind(&payload.number)
        .bind(&payload.district)
        .bind(&payload.city)
        .bind(&payload.state)
        .bind(&payload.postal_code)
        .bind(payload.latitude)
        .bind(payload.longitude)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update(&self, id: i32, payload: &AddressPayload) -> Result<Address, sqlx::Error> {
        sqlx::query_as::<_, Address>(
            "UPDATE addresses SET street = $2, number = $3, district = $4, city = $5, \
             state = $6, postal_code = $7, latitude = $8, longitude = $9 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&payload.street)
        .bind(&payload.number)
        .bind(&payload.district)
        .bind(&payload.city)
        .bind(&payload.state)
        .bind(&payload.postal_code)
        .bind(payload.latitude)
        .bind(payload.longitude)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }
        Ok(())
    }
}
