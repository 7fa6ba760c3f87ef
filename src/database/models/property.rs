use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A managed property. `registered_value` and `registry_date` form
/// the escalation baseline; both are nullable in the schema, which is
/// why the escalation engine treats a missing pair as invalid input
/// rather than trusting the row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Property {
    pub id: i32,
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
