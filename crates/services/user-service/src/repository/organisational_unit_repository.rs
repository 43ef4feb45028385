//! Organisational unit repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    Set,
};

use super::entities::organisational_unit::{self, ActiveModel, Entity as UnitEntity};
use common::{AppError, AppResult};
use domain::{DomainError, OrganisationalUnit};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Organisational unit repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OrganisationalUnitRepository: Send + Sync {
    /// List all units in store order
    async fn find_all(&self) -> AppResult<Vec<OrganisationalUnit>>;

    /// Find unit by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<OrganisationalUnit>>;

    /// Insert when `unit.id` is `None`, otherwise replace the stored row
    async fn save(&self, unit: OrganisationalUnit) -> AppResult<OrganisationalUnit>;

    /// Delete the stored row of `unit`
    async fn delete(&self, unit: OrganisationalUnit) -> AppResult<()>;
}

/// Concrete implementation of OrganisationalUnitRepository
pub struct OrganisationalUnitStore {
    db: Arc<DatabaseConnection>,
}

impl OrganisationalUnitStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrganisationalUnitRepository for OrganisationalUnitStore {
    async fn find_all(&self) -> AppResult<Vec<OrganisationalUnit>> {
        let models = UnitEntity::find()
            .order_by_asc(organisational_unit::Column::Id)
            .all(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(OrganisationalUnit::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<OrganisationalUnit>> {
        let result = UnitEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(OrganisationalUnit::from))
    }

    async fn save(&self, unit: OrganisationalUnit) -> AppResult<OrganisationalUnit> {
        let active = ActiveModel {
            id: match unit.id {
                Some(id) => Set(id),
                None => NotSet,
            },
            name: Set(unit.name),
        };

        let model = match unit.id {
            None => active.insert(&*self.db).await.map_err(AppError::from)?,
            Some(id) => active.update(&*self.db).await.map_err(|e| match e {
                DbErr::RecordNotUpdated => AppError::from(DomainError::unit_not_found(id)),
                other => AppError::from(other),
            })?,
        };

        Ok(OrganisationalUnit::from(model))
    }

    async fn delete(&self, unit: OrganisationalUnit) -> AppResult<()> {
        let id = unit.id.ok_or_else(|| {
            AppError::internal("Cannot delete an organisational unit that was never saved")
        })?;

        let result = UnitEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(DomainError::unit_not_found(id).into());
        }

        Ok(())
    }
}
