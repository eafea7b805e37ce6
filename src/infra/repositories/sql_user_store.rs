//! Relational user repository backed by SeaORM.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use super::user_repository::UserRepository;
use crate::domain::{CreateUser, UpdateUser, User};
use crate::errors::{AppError, AppResult};

/// Concrete implementation of UserRepository over a SQL table
pub struct SqlUserStore {
    db: DatabaseConnection,
}

impl SqlUserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Load the row for `id`; ids that are not UUIDs cannot match any row
    async fn find_model(&self, id: &str) -> AppResult<Option<user::Model>> {
        let Ok(uuid) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        UserEntity::find_by_id(uuid)
            .one(&self.db)
            .await
            .map_err(AppError::from)
    }
}

#[async_trait]
impl UserRepository for SqlUserStore {
    async fn create(&self, input: CreateUser) -> AppResult<User> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            email: Set(input.email),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        tracing::info!(user_id = %model.id, "User created");

        Ok(User::from(model))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        Ok(self.find_model(id).await?.map(User::from))
    }

    async fn update(&self, id: &str, input: UpdateUser) -> AppResult<Option<User>> {
        let Some(existing) = self.find_model(id).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = existing.into();

        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(email) = input.email {
            active.email = Set(email);
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Some(User::from(model)))
    }

    async fn delete(&self, id: &str) -> AppResult<Option<User>> {
        let Some(existing) = self.find_model(id).await? else {
            return Ok(None);
        };

        let result = UserEntity::delete_by_id(existing.id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        // Removed by a concurrent request between the lookup and the delete
        if result.rows_affected == 0 {
            return Ok(None);
        }

        tracing::info!(user_id = %existing.id, "User deleted");
        Ok(Some(User::from(existing)))
    }
}
