//! User repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{DomainError, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users in store order
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// List users referencing the given organisational unit
    async fn find_by_organisational_unit(&self, unit_id: i64) -> AppResult<Vec<User>>;

    /// Insert when `user.id` is `None`, otherwise replace every column of the stored row
    async fn save(&self, user: User) -> AppResult<User>;

    /// Delete the stored row of `user`
    async fn delete(&self, user: User) -> AppResult<()>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_active_model(user: User) -> ActiveModel {
    ActiveModel {
        id: match user.id {
            Some(id) => Set(id),
            None => NotSet,
        },
        email: Set(user.email),
        first_name: Set(user.first_name),
        sur_name: Set(user.sur_name),
        gender: Set(user.gender.map(String::from)),
        organisational_unit_id: Set(user.organisational_unit_id),
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_organisational_unit(&self, unit_id: i64) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .filter(user::Column::OrganisationalUnitId.eq(unit_id))
            .order_by_asc(user::Column::Id)
            .all(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let id = user.id;
        let active = to_active_model(user);

        let model = match id {
            None => active.insert(&*self.db).await.map_err(AppError::from)?,
            Some(id) => active.update(&*self.db).await.map_err(|e| match e {
                DbErr::RecordNotUpdated => AppError::from(DomainError::user_not_found(id)),
                other => AppError::from(other),
            })?,
        };

        Ok(User::from(model))
    }

    async fn delete(&self, user: User) -> AppResult<()> {
        let id = user
            .id
            .ok_or_else(|| AppError::internal("Cannot delete a user that was never saved"))?;

        let result = UserEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(DomainError::user_not_found(id).into());
        }

        Ok(())
    }
}
