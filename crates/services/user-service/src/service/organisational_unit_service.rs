//! Organisational unit service - creation, lookup and removal of units.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use common::{AppError, AppResult, OptionExt};
use domain::{
    DomainError, OrganisationalUnit, OrganisationalUnitDraft, OrganisationalUnitView, User,
};

use crate::repository::{OrganisationalUnitRepository, UserRepository};

#[async_trait]
pub trait OrganisationalUnitService: Send + Sync {
    /// List every unit with its members
    async fn list_units(&self) -> AppResult<Vec<OrganisationalUnitView>>;

    /// Get unit view by ID
    async fn get_unit(&self, id: i64) -> AppResult<OrganisationalUnitView>;

    /// Persist a new unit, returning the assigned id
    async fn create_unit(&self, draft: OrganisationalUnitDraft) -> AppResult<i64>;

    /// Delete unit by ID; referencing users become unassigned
    async fn delete_unit(&self, id: i64) -> AppResult<()>;
}

pub struct OrganisationalUnitManager {
    units: Arc<dyn OrganisationalUnitRepository>,
    users: Arc<dyn UserRepository>,
}

impl OrganisationalUnitManager {
    pub fn new(
        units: Arc<dyn OrganisationalUnitRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self { units, users }
    }

    async fn find_unit(&self, id: i64) -> AppResult<OrganisationalUnit> {
        self.units
            .find_by_id(id)
            .await?
            .ok_or_not_found(|| DomainError::unit_not_found(id))
    }
}

fn to_view(unit: OrganisationalUnit, members: Vec<User>) -> AppResult<OrganisationalUnitView> {
    let id = unit
        .id
        .ok_or_else(|| AppError::internal("Stored organisational unit without id"))?;
    Ok(OrganisationalUnitView::new(id, unit, members))
}

#[async_trait]
impl OrganisationalUnitService for OrganisationalUnitManager {
    async fn list_units(&self) -> AppResult<Vec<OrganisationalUnitView>> {
        let units = self.units.find_all().await?;
        if units.is_empty() {
            return Ok(Vec::new());
        }

        let mut members: HashMap<i64, Vec<User>> = HashMap::new();
        for user in self.users.find_all().await? {
            if let Some(unit_id) = user.organisational_unit_id {
                members.entry(unit_id).or_default().push(user);
            }
        }

        units
            .into_iter()
            .map(|unit| {
                let users = unit
                    .id
                    .and_then(|id| members.remove(&id))
                    .unwrap_or_default();
                to_view(unit, users)
            })
            .collect()
    }

    async fn get_unit(&self, id: i64) -> AppResult<OrganisationalUnitView> {
        let unit = self.find_unit(id).await?;
        let members = self.users.find_by_organisational_unit(id).await?;
        to_view(unit, members)
    }

    async fn create_unit(&self, draft: OrganisationalUnitDraft) -> AppResult<i64> {
        let saved = self
            .units
            .save(OrganisationalUnit::from_draft(draft))
            .await?;

        saved
            .id
            .ok_or_else(|| AppError::internal("Store did not assign an organisational unit id"))
    }

    async fn delete_unit(&self, id: i64) -> AppResult<()> {
        let unit = self.find_unit(id).await?;
        self.units.delete(unit).await
    }
}
