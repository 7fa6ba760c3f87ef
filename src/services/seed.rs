use sqlx::PgPool;
use tracing::info;

use crate::config;
use crate::database::repositories::{
    AdminRepository, ManagerPayload, ManagerRepository, OwnerPayload, OwnerRepository,
};

const DEFAULT_PASSWORD: &str = "changeme";

/// Create one user of each role if their emails are absent. Gated on
/// `seed_default_users` (development only by default) so fresh
/// environments are usable immediately.
pub async fn ensure_default_users(pool: &PgPool) -> anyhow::Result<()> {
    let cost = config::config().security.bcrypt_cost;

    let admins = AdminRepository::new(pool.clone());
    if admins.find_by_email("admin@portfolio.local").await?.is_none() {
        let hash = bcrypt::hash(DEFAULT_PASSWORD, cost)?;
        admins
            .create("System Administrator", "admin@portfolio.local", &hash)
            .await?;
        info!("Seeded default admin: admin@portfolio.local");
    }

    let managers = ManagerRepository::new(pool.clone());
    if managers
        .find_by_email("manager@portfolio.local")
        .await?
        .is_none()
    {
        let hash = bcrypt::hash(DEFAULT_PASSWORD, cost)?;
        managers
            .create(
                &ManagerPayload {
                    name: "João Silva".to_string(),
                    email: "manager@portfolio.local".to_string(),
                    phone: None,
                    cpf: "12345678901".to_string(),
                    password: None,
                },
                &hash,
            )
            .await?;
        info!("Seeded default manager: manager@portfolio.local");
    }

    let owners = OwnerRepository::new(pool.clone());
    if owners
        .find_by_email("owner@portfolio.local")
        .await?
        .is_none()
    {
        let hash = bcrypt::hash(DEFAULT_PASSWORD, cost)?;
        owners
            .create(
                &OwnerPayload {
                    name: "Maria Santos".to_string(),
                    email: "owner@portfolio.local".to_string(),
                    phone: "11999999999".to_string(),
                    document: "98765432100".to_string(),
                    document_type: "cpf".to_string(),
                    password: None,
                },
                &hash,
            )
            .await?;
        info!("Seeded default owner: owner@portfolio.local");
    }

    Ok(())
}
