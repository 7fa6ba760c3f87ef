use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Assessment {
    pub id: i32,
    pub property_id: i32,
    pub value: Decimal,
    pub assessment_date: NaiveDate,
    pub manager_id: Option<i32>,
}
