//! User service - Handles user-related business logic.
//!
//! Validation, draft-to-entity mapping and the projection of stored users
//! into their client-facing views.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use common::{AppError, AppResult, OptionExt};
use domain::{validate_email, DomainError, User, UserDraft, UserView};

use crate::repository::{OrganisationalUnitRepository, UserRepository};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List every stored user as a view, in store order
    async fn list_users(&self) -> AppResult<Vec<UserView>>;

    /// Get user view by ID
    async fn get_user(&self, id: i64) -> AppResult<UserView>;

    /// Validate and persist a new user, returning the assigned id
    async fn create_user(&self, draft: UserDraft) -> AppResult<i64>;

    /// Validate and replace email, names and gender of an existing user
    async fn update_user(&self, id: i64, draft: UserDraft) -> AppResult<()>;

    /// Delete user by ID
    async fn delete_user(&self, id: i64) -> AppResult<()>;

    /// Point a user at an organisational unit
    async fn assign_organisational_unit(&self, user_id: i64, unit_id: i64) -> AppResult<()>;
}

/// Concrete implementation of UserService using repositories.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
    units: Arc<dyn OrganisationalUnitRepository>,
}

impl UserManager {
    /// Create new user service instance with repositories
    pub fn new(
        users: Arc<dyn UserRepository>,
        units: Arc<dyn OrganisationalUnitRepository>,
    ) -> Self {
        Self { users, units }
    }

    async fn find_user(&self, id: i64) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_not_found(|| DomainError::user_not_found(id))
    }

    async fn unit_name(&self, unit_id: Option<i64>) -> AppResult<Option<String>> {
        match unit_id {
            None => Ok(None),
            Some(unit_id) => {
                let unit = self
                    .units
                    .find_by_id(unit_id)
                    .await?
                    .ok_or_not_found(|| DomainError::unit_not_found(unit_id))?;
                Ok(Some(unit.name))
            }
        }
    }
}

/// Build a view from a stored user and the already resolved unit name.
fn to_view(user: User, unit_name: Option<String>) -> AppResult<UserView> {
    let id = user
        .id
        .ok_or_else(|| AppError::internal("Stored user without id"))?;
    Ok(UserView::new(id, user, unit_name))
}

fn check_email(draft: &UserDraft) -> AppResult<()> {
    validate_email(&draft.email).map_err(|e| {
        tracing::warn!(email = %draft.email, "Rejected user with invalid email");
        AppError::from(e)
    })
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<UserView>> {
        let users = self.users.find_all().await?;

        let unit_names: HashMap<i64, String> =
            if users.iter().any(|u| u.organisational_unit_id.is_some()) {
                self.units
                    .find_all()
                    .await?
                    .into_iter()
                    .filter_map(|unit| unit.id.map(|id| (id, unit.name)))
                    .collect()
            } else {
                HashMap::new()
            };

        users
            .into_iter()
            .map(|user| {
                let unit_name = match user.organisational_unit_id {
                    None => None,
                    Some(unit_id) => Some(
                        unit_names
                            .get(&unit_id)
                            .cloned()
                            .ok_or_not_found(|| DomainError::unit_not_found(unit_id))?,
                    ),
                };
                to_view(user, unit_name)
            })
            .collect()
    }

    async fn get_user(&self, id: i64) -> AppResult<UserView> {
        let user = self.find_user(id).await?;
        let unit_name = self.unit_name(user.organisational_unit_id).await?;
        to_view(user, unit_name)
    }

    async fn create_user(&self, draft: UserDraft) -> AppResult<i64> {
        check_email(&draft)?;

        let saved = self.users.save(User::from_draft(draft)).await?;
        let id = saved
            .id
            .ok_or_else(|| AppError::internal("Store did not assign a user id"))?;

        tracing::debug!(user_id = id, "User created");
        Ok(id)
    }

    async fn update_user(&self, id: i64, draft: UserDraft) -> AppResult<()> {
        check_email(&draft)?;
        let mut user = self.find_user(id).await?;
        user.apply_draft(draft);
        self.users.save(user).await?;
        Ok(())
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        let user = self.find_user(id).await?;
        self.users.delete(user).await
    }

    async fn assign_organisational_unit(&self, user_id: i64, unit_id: i64) -> AppResult<()> {
        let mut user = self.find_user(user_id).await?;
        self.units
            .find_by_id(unit_id)
            .await?
            .ok_or_not_found(|| DomainError::unit_not_found(unit_id))?;

        user.assign_unit(unit_id);
        self.users.save(user).await?;
        Ok(())
    }
}
