use serde::Deserialize;
use sqlx::PgPool;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::database::models::Property;

#[derive(Debug, Deserialize)]
pub struct PropertyPayload {
    pub name: String,
    pub kind: String,
    pub address_id: i32,
    pub owner_id: i32,
    pub manager_id: Option<i32>,
    pub registered_value: Option<Decimal>,
    pub registry_date: Option<NaiveDate>,
    pub current_rent: Option<Decimal>,
    pub estimated_sale_value: Option<Decimal>,
    pub property_tax_value: Option<Decimal>,
    pub area: Option<Decimal>,
    pub bedrooms: Option<i32>,
    pub apartment_count: Option<i32>,
}

pub struct PropertyRepository {
    pool: PgPool,
}

impl PropertyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Property>, sqlx::Error> {
        sqlx::query_as::<_, Property>("SELECT * FROM properties ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_manager(&self, manager_id: i32) -> Result<Vec<Property>, sqlx::Error> {
        sqlx::query_as::<_, Property>(
            "SELECT * FROM properties WHERE manager_id = $1 ORDER BY id",
        )
        .bind(manager_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_by_owner(&self, owner_id: i32) -> Result<Vec<Property>, sqlx::Error> {
        sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE owner_id = $1 ORDER BY id")
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Property, sqlx::Error> {
        sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn create(&self, payload: &PropertyPayload) -> Result<Property, sqlx::Error> {
        sqlx::query_as::<_, Property>(
            "INSERT INTO properties (name, kind, address_id, owner_id, manager_id, \
             registered_value, registry_date, current_rent, estimated_sale_value, \
             property_tax_value, area, bedrooms, apartment_count) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) RETURNING *",
        )
        .bind(&payload.name)
        .bind(&payload.kind)
        .bind(payload.address_id)
        .bind(payload.owner_id)
        .bind(payload.manager_id)
        .bind(payload.registered_value)
        .bind(payload.registry_date)
        .bind(payload.current_rent)
        .bind(payload.estimated_sale_value)
        .bind(payload.property_tax_value)
        .bind(payload.area)
        .bind(payload.bedrooms)
        .bind(payload.apartment_count)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update(
        &self,
        id: i32,
        payload: &PropertyPayload,
    ) -> Result<Property, sqlx::Error> {
        sqlx::query_as::<_, Property>(
            "UPDATE properties SET name = $2, kind = $3, address_id = $4, owner_id = $5, \
             manager_id = $6, registered_value = $7, registry_date = $8, current_rent = $9, \
             estimated_sale_value = $10, property_tax_value = $11, area = $12, bedrooms = $13, \
             apartment_count = $14 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&payload.name)
        .bind(&payload.kind)
        .bind(payload.address_id)
        .bind(payload.owner_id)
        .bind(payload.manager_id)
        .bind(payload.registered_value)
        .bind(payload.registry_date)
        .bind(payload.current_rent)
        .bind(payload.estimated_sale_value)
        .bind(payload.property_tax_value)
        .bind(payload.area)
        .bind(payload.bedrooms)
        .bind(payload.apartment_count)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }
        Ok(())
    }
}
