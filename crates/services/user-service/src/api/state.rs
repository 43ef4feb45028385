//! Application state for dependency injection.

use std::sync::Arc;

use crate::infra::Database;
use crate::repository::{OrganisationalUnitStore, UserStore};
use crate::service::{
    OrganisationalUnitManager, OrganisationalUnitService, UserManager, UserService,
};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Organisational unit service
    pub unit_service: Arc<dyn OrganisationalUnitService>,
    /// Database handle for health checks, absent when services are injected directly
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Wire SeaORM stores and services on top of a database connection.
    pub fn from_database(database: Database) -> Self {
        let users = Arc::new(UserStore::new(database.get_connection()));
        let units = Arc::new(OrganisationalUnitStore::new(database.get_connection()));

        Self {
            user_service: Arc::new(UserManager::new(users.clone(), units.clone())),
            unit_service: Arc::new(OrganisationalUnitManager::new(units, users)),
            database: Some(Arc::new(database)),
        }
    }

    /// Create state with manually injected services.
    pub fn new(
        user_service: Arc<dyn UserService>,
        unit_service: Arc<dyn OrganisationalUnitService>,
    ) -> Self {
        Self {
            user_service,
            unit_service,
            database: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::entities::user;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn stores_share_one_connection() {
        let connection = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user::Model {
                id: 1,
                email: "test1.user@foo.bar".to_string(),
                first_name: "Test".to_string(),
                sur_name: "User".to_string(),
                gender: None,
                organisational_unit_id: None,
            }]])
            .into_connection();

        let state = AppState::from_database(Database::from_connection(connection));
        let users = state.user_service.list_users().await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "test1.user@foo.bar");
        assert!(state.database.is_some());
    }
}
