//! Infrastructure layer - External systems integration
//!
//! This module handles all storage concerns:
//! - Relational connection and migrations (SeaORM)
//! - Document store connection and indexes (MongoDB)
//! - Repository adapters behind the `UserRepository` contract

pub mod db;
pub mod mongo;
pub mod repositories;

use std::sync::Arc;

use crate::config::{Config, StorageBackend};
use crate::errors::AppResult;

pub use db::{Database, Migrator};
pub use mongo::DocumentStore;
pub use repositories::{MongoUserStore, SqlUserStore, UserRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;

/// Connect to the selected storage engine and build its user repository.
pub async fn connect_user_repository(
    config: &Config,
    backend: StorageBackend,
) -> AppResult<Arc<dyn UserRepository>> {
    match backend {
        StorageBackend::Postgres => {
            let db = Database::connect(&config.database_url).await?;
            tracing::info!("Using relational storage");
            Ok(Arc::new(SqlUserStore::new(db.get_connection())))
        }
        StorageBackend::Mongo => {
            let store = DocumentStore::connect(&config.mongo_url, &config.mongo_database).await?;
            tracing::info!(database = %config.mongo_database, "Using document storage");
            Ok(Arc::new(MongoUserStore::new(store.database())))
        }
    }
}
