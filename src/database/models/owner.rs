use serde::Serialize;
use sqlx::FromRow;

/// Portfolio owner. `document` carries a CPF or CNPJ depending on
/// `document_type` ("cpf" | "cnpj").
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Owner {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub document: String,
    pub document_type: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}
