//! In-memory repositories shared by the integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use common::{AppError, AppResult};
use domain::{DomainError, OrganisationalUnit, User};
use user_service_lib::api::AppState;
use user_service_lib::repository::{OrganisationalUnitRepository, UserRepository};
use user_service_lib::service::{OrganisationalUnitManager, UserManager};

#[derive(Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    units: BTreeMap<i64, OrganisationalUnit>,
    next_user_id: i64,
    next_unit_id: i64,
}

/// Both tables behind one lock so deleting a unit can unassign its users.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn user_count(&self) -> usize {
        self.tables.lock().unwrap().users.len()
    }

    pub fn stored_user(&self, id: i64) -> Option<User> {
        self.tables.lock().unwrap().users.get(&id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.tables.lock().unwrap().users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.tables.lock().unwrap().users.get(&id).cloned())
    }

    async fn find_by_organisational_unit(&self, unit_id: i64) -> AppResult<Vec<User>> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .users
            .values()
            .filter(|u| u.organisational_unit_id == Some(unit_id))
            .cloned()
            .collect())
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        let mut tables = self.tables.lock().unwrap();
        let id = match user.id {
            Some(id) if tables.users.contains_key(&id) => id,
            Some(id) => return Err(DomainError::user_not_found(id).into()),
            None => {
                tables.next_user_id += 1;
                tables.next_user_id
            }
        };
        user.id = Some(id);
        tables.users.insert(id, user.clone());
        Ok(user)
    }

    async fn delete(&self, user: User) -> AppResult<()> {
        let id = user
            .id
            .ok_or_else(|| AppError::internal("Cannot delete an unsaved user"))?;
        self.tables
            .lock()
            .unwrap()
            .users
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::user_not_found(id).into())
    }
}

#[async_trait]
impl OrganisationalUnitRepository for InMemoryStore {
    async fn find_all(&self) -> AppResult<Vec<OrganisationalUnit>> {
        Ok(self.tables.lock().unwrap().units.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<OrganisationalUnit>> {
        Ok(self.tables.lock().unwrap().units.get(&id).cloned())
    }

    async fn save(&self, mut unit: OrganisationalUnit) -> AppResult<OrganisationalUnit> {
        let mut tables = self.tables.lock().unwrap();
        let id = match unit.id {
            Some(id) if tables.units.contains_key(&id) => id,
            Some(id) => return Err(DomainError::unit_not_found(id).into()),
            None => {
                tables.next_unit_id += 1;
                tables.next_unit_id
            }
        };
        unit.id = Some(id);
        tables.units.insert(id, unit.clone());
        Ok(unit)
    }

    async fn delete(&self, unit: OrganisationalUnit) -> AppResult<()> {
        let id = unit
            .id
            .ok_or_else(|| AppError::internal("Cannot delete an unsaved unit"))?;
        let mut tables = self.tables.lock().unwrap();
        if tables.units.remove(&id).is_none() {
            return Err(DomainError::unit_not_found(id).into());
        }
        // ON DELETE SET NULL
        for user in tables.users.values_mut() {
            if user.organisational_unit_id == Some(id) {
                user.organisational_unit_id = None;
            }
        }
        Ok(())
    }
}

pub fn user_manager(store: &Arc<InMemoryStore>) -> UserManager {
    UserManager::new(store.clone(), store.clone())
}

pub fn unit_manager(store: &Arc<InMemoryStore>) -> OrganisationalUnitManager {
    OrganisationalUnitManager::new(store.clone(), store.clone())
}

pub fn app_state(store: &Arc<InMemoryStore>) -> AppState {
    AppState::new(Arc::new(user_manager(store)), Arc::new(unit_manager(store)))
}
