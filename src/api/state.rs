//! Application state - Dependency injection container.
//!
//! Holds the services handlers call into.

use std::sync::Arc;

use crate::infra::UserRepository;
use crate::services::{UserManager, UserService};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Create application state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Create application state wiring the default service over `repo`.
    pub fn from_repository(repo: Arc<dyn UserRepository>) -> Self {
        Self::new(Arc::new(UserManager::new(repo)))
    }
}
