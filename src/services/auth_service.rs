use serde::Serialize;
use sqlx::PgPool;

use crate::auth::{generate_jwt, Claims, Role};
use crate::database::repositories::{AdminRepository, ManagerRepository, OwnerRepository};
use crate::error::ApiError;

/// A user resolved from one of the three role tables.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password_hash: String,
}

#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<&AuthenticatedUser> for UserDto {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserDto,
}

pub struct AuthService {
    pool: PgPool,
}

impl AuthService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Verify credentials and issue a session token. Unknown email and
    /// wrong password are indistinguishable to the caller.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let user = self
            .find_user_by_email(email)
            .await?
            .ok_or_else(|| ApiError::unauthorized("Invalid email or password"))?;

        let matches = bcrypt::verify(password, &user.password_hash)?;
        if !matches {
            return Err(ApiError::unauthorized("Invalid email or password"));
        }

        let claims = Claims::new(user.email.clone(), user.name.clone(), user.role, user.id);
        let token = generate_jwt(claims)?;

        tracing::info!("Authenticated {} ({})", user.email, user.role);
        Ok(LoginResponse {
            token,
            user: UserDto::from(&user),
        })
    }

    /// Probe the role tables in privilege order: admins, then
    /// managers, then owners. Emails are unique within each table;
    /// the first hit wins.
    pub async fn find_user_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AuthenticatedUser>, ApiError> {
        if let Some(admin) = AdminRepository::new(self.pool.clone())
            .find_by_email(email)
            .await?
        {
            return Ok(Some(AuthenticatedUser {
                id: admin.id,
                name: admin.name,
                email: admin.email,
                role: Role::Admin,
                password_hash: admin.password_hash,
            }));
        }

        if let Some(manager) = ManagerRepository::new(self.pool.clone())
            .find_by_email(email)
            .await?
        {
            return Ok(Some(AuthenticatedUser {
                id: manager.id,
                name: manager.name,
                email: manager.email,
                role: Role::Manager,
                password_hash: manager.password_hash,
            }));
        }

        if let Some(owner) = OwnerRepository::new(self.pool.clone())
            .find_by_email(email)
            .await?
        {
            return Ok(Some(AuthenticatedUser {
                id: owner.id,
                name: owner.name,
                email: owner.email,
                role: Role::Owner,
                password_hash: owner.password_hash,
            }));
        }

        Ok(None)
    }
}
