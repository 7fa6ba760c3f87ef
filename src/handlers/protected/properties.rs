use axum::extract::{Path, State};
use axum::{Extension, Json};

use crate::auth::Role;
use crate::database::models::Property;
use crate::database::repositories::{PropertyPayload, PropertyRepository};
use crate::error::ApiError;
use crate::incc::EscalationEngine;
use crate::middleware::{require_role, ApiResponse, ApiResult, AuthUser};
use crate::services::{PropertyService, PropertyValuationSnapshot};
use crate::state::AppState;

/// GET /api/properties - the listing is scoped by role: admins see
/// the whole portfolio, managers their managed properties, owners
/// their own.
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Vec<Property>> {
    let repo = PropertyRepository::new(state.pool.clone());
    let properties = match user.role {
        Role::Admin => repo.find_all().await?,
        Role::Manager => repo.find_by_manager(user.user_id).await?,
        Role::Owner => repo.find_by_owner(user.user_id).await?,
    };
    Ok(ApiResponse::success(properties))
}

pub async fn show(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<Property> {
    let property = PropertyRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?;
    Ok(ApiResponse::success(property))
}

/// GET /api/properties/:id/details - the valuation snapshot. Access
/// follows the listing scope: a manager or owner may only view a
/// property inside their own scope.
pub async fn details(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i32>,
) -> ApiResult<PropertyValuationSnapshot> {
    let property = PropertyRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?;
    authorize_scope(&user, &property)?;

    let engine: EscalationEngine = state.engine.clone();
    let snapshot = PropertyService::new(state.pool.clone(), engine)
        .valuation_snapshot(id)
        .await?;
    Ok(ApiResponse::success(snapshot))
}

fn authorize_scope(user: &AuthUser, property: &Property) -> Result<(), ApiError> {
    let allowed = match user.role {
        Role::Admin => true,
        Role::Manager => property.manager_id == Some(user.user_id),
        Role::Owner => property.owner_id == user.user_id,
    };
    if allowed {
        Ok(())
    } else {
        Err(ApiError::forbidden(
            "You do not have permission to view this property",
        ))
    }
}

pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<PropertyPayload>,
) -> ApiResult<Property> {
    require_role(&user, &[])?;
    let property = PropertyRepository::new(state.pool.clone())
        .create(&payload)
        .await?;
    Ok(ApiResponse::created(property))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i32>,
    Json(payload): Json<PropertyPayload>,
) -> ApiResult<Property> {
    require_role(&user, &[])?;
    let property = PropertyRepository::new(state.pool.clone())
        .update(id, &payload)
        .await?;
    Ok(ApiResponse::success(property))
}

pub async fn destroy(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i32>,
) -> ApiResult<()> {
    require_role(&user, &[])?;
    PropertyRepository::new(state.pool.clone()).delete(id).await?;
    Ok(ApiResponse::<()>::no_content())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(owner_id: i32, manager_id: Option<i32>) -> Property {
        Property {
            id: 1,
            name: "Unit 12".to_string(),
            kind: "apartment".to_string(),
            address_id: 1,
            owner_id,
            manager_id,
            registered_value: None,
            registry_date: None,
            current_rent: None,
            estimated_sale_value: None,
            property_tax_value: None,
            area: None,
            bedrooms: None,
            apartment_count: None,
        }
    }

    fn user(id: i32, role: Role) -> AuthUser {
        AuthUser {
            user_id: id,
            email: format!("user{}@example.com", id),
            name: "User".to_string(),
            role,
        }
    }

    #[test]
    fn admin_sees_any_property() {
        assert!(authorize_scope(&user(99, Role::Admin), &property(1, Some(2))).is_ok());
    }

    #[test]
    fn manager_scope_is_their_managed_properties() {
        assert!(authorize_scope(&user(2, Role::Manager), &property(1, Some(2))).is_ok());
        assert!(authorize_scope(&user(3, Role::Manager), &property(1, Some(2))).is_err());
        assert!(authorize_scope(&user(3, Role::Manager), &property(1, None)).is_err());
    }

    #[test]
    fn owner_scope_is_their_own_properties() {
        assert!(authorize_scope(&user(1, Role::Owner), &property(1, Some(2))).is_ok());
        assert!(authorize_scope(&user(5, Role::Owner), &property(1, Some(2))).is_err());
    }
}
