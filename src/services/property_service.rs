use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;

use crate::database::models::{Assessment, Property};
use crate::database::repositories::{AssessmentRepository, OwnerRepository, PropertyRepository};
use crate::error::ApiError;
use crate::incc::EscalationEngine;

/// Read-model for the property detail view: the property itself, its
/// owner's display name, the index-adjusted present value and the
/// assessment history. Assembled per request, never persisted.
#[derive(Debug, Serialize)]
pub struct PropertyValuationSnapshot {
    pub property: Property,
    pub owner_name: String,
    pub adjusted_value: Decimal,
    pub assessments: Vec<Assessment>,
}

pub struct PropertyService {
    pool: PgPool,
    engine: EscalationEngine,
}

impl PropertyService {
    pub fn new(pool: PgPool, engine: EscalationEngine) -> Self {
        Self { pool, engine }
    }

    /// Build the valuation snapshot for one property. NotFound if the
    /// id does not resolve; an empty assessment history is a valid
    /// state (freshly registered property).
    pub async fn valuation_snapshot(
        &self,
        property_id: i32,
    ) -> Result<PropertyValuationSnapshot, ApiError> {
        let property = PropertyRepository::new(self.pool.clone())
            .find_by_id(property_id)
            .await?;

        let owner = OwnerRepository::new(self.pool.clone())
            .find_by_id(property.owner_id)
            .await?;

        let adjusted_value = self
            .engine
            .adjusted_value(property.registry_date, property.registered_value)?;

        let assessments = AssessmentRepository::new(self.pool.clone())
            .find_by_property(property_id)
            .await?;

        Ok(PropertyValuationSnapshot {
            property,
            owner_name: owner.name,
            adjusted_value,
            assessments,
        })
    }
}
