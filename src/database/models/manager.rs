use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Manager {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub cpf: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}
