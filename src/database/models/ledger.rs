//! Financial ledger rows: expenses, taxes and income records share the
//! same shape (amount, date, free-text description).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Expense {
    pub id: i32,
    pub amount: Decimal,
    pub expense_date: NaiveDate,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tax {
    pub id: i32,
    pub amount: Decimal,
    pub tax_date: NaiveDate,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Income {
    pub id: i32,
    pub amount: Decimal,
    pub income_date: NaiveDate,
    pub description: Option<String>,
}
