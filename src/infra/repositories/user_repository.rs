//! User repository contract shared by every storage adapter.

use async_trait::async_trait;

use crate::domain::{CreateUser, UpdateUser, User};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Lookups by id return `Ok(None)` when nothing matches, including ids the
/// adapter cannot parse. Adapter failures are returned unchanged.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; the store assigns id and timestamps
    async fn create(&self, input: CreateUser) -> AppResult<User>;

    /// List every user in insertion order
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// Merge the supplied fields and return the post-update state
    async fn update(&self, id: &str, input: UpdateUser) -> AppResult<Option<User>>;

    /// Remove the user and return its last-known state
    async fn delete(&self, id: &str) -> AppResult<Option<User>>;
}
