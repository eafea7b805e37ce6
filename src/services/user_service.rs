//! User service - Enforces user existence on by-id operations.
//!
//! SOLID (SRP): Handles user-related use cases only.
//! Repository results pass through untouched except for `None`,
//! which becomes a not-found error naming the requested id.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateUser, UpdateUser, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user from validated input
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;

    /// List all users (may be empty)
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: &str) -> AppResult<User>;

    /// Apply a partial update and return the new state
    async fn update_user(&self, id: &str, input: UpdateUser) -> AppResult<User>;

    /// Delete user and return the removed record
    async fn delete_user(&self, id: &str) -> AppResult<User>;
}

/// Concrete implementation of UserService over any repository adapter.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

/// Turn the repository's not-found sentinel into a domain error
fn found(user: Option<User>, id: &str) -> AppResult<User> {
    user.ok_or_else(|| {
        tracing::debug!(user_id = %id, "User not found");
        AppError::user_not_found(id)
    })
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        self.repo.create(input).await
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.find_all().await
    }

    async fn get_user(&self, id: &str) -> AppResult<User> {
        found(self.repo.find_by_id(id).await?, id)
    }

    async fn update_user(&self, id: &str, input: UpdateUser) -> AppResult<User> {
        found(self.repo.update(id, input).await?, id)
    }

    async fn delete_user(&self, id: &str) -> AppResult<User> {
        found(self.repo.delete(id).await?, id)
    }
}
