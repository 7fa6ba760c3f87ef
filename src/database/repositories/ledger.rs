//! One generic repository covers the three financial ledgers, which
//! differ only in table and date-column names.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::{postgres::PgRow, FromRow, PgPool};

use crate::database::models::{Expense, Income, Tax};

#[derive(Debug, Deserialize)]
pub struct LedgerPayload {
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: Option<String>,
}

pub struct LedgerRepository<T> {
    table: &'static str,
    date_column: &'static str,
    pool: PgPool,
    _phantom: std::marker::PhantomData<T>,
}

pub type ExpenseRepository = LedgerRepository<Expense>;
pub type TaxRepository = LedgerRepository<Tax>;
pub type IncomeRepository = LedgerRepository<Income>;

impl LedgerRepository<Expense> {
    pub fn expenses(pool: PgPool) -> Self {
        Self::new("expenses", "expense_date", pool)
    }
}

impl LedgerRepository<Tax> {
    pub fn taxes(pool: PgPool) -> Self {
        Self::new("taxes", "tax_date", pool)
    }
}

impl LedgerRepository<Income> {
    pub fn incomes(pool: PgPool) -> Self {
        Self::new("incomes", "income_date", pool)
    }
}

impl<T> LedgerRepository<T>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    fn new(table: &'static str, date_column: &'static str, pool: PgPool) -> Self {
        Self {
            table,
            date_column,
            pool,
            _phantom: std::marker::PhantomData,
        }
    }

    pub async fn find_all(&self) -> Result<Vec<T>, sqlx::Error> {
        let sql = format!("SELECT * FROM {} ORDER BY id", self.table);
        sqlx::query_as::<_, T>(&sql).fetch_all(&self.pool).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<T, sqlx::Error> {
        let sql = format!("SELECT * FROM {} WHERE id = $1", self.table);
        sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn create(&self, payload: &LedgerPayload) -> Result<T, sqlx::Error> {
        let sql = format!(
            "INSERT INTO {} (amount, {}, description) VALUES ($1, $2, $3) RETURNING *",
            self.table, self.date_column
        );
        sqlx::query_as::<_, T>(&sql)
            .bind(payload.amount)
            .bind(payload.date)
            .bind(&payload.description)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn update(&self, id: i32, payload: &LedgerPayload) -> Result<T, sqlx::Error> {
        let sql = format!(
            "UPDATE {} SET amount = $2, {} = $3, description = $4 WHERE id = $1 RETURNING *",
            self.table, self.date_column
        );
        sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .bind(payload.amount)
            .bind(payload.date)
            .bind(&payload.description)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), sqlx::Error> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.table);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }
        Ok(())
    }
}
