//! Shared fixtures for integration tests.

use std::sync::Arc;

use sea_orm::ConnectOptions;

use user_crud::infra::{Database, SqlUserStore, UserRepository};

/// Fresh in-memory SQLite store with the users migration applied.
///
/// A single pooled connection keeps the in-memory database alive and shared.
pub async fn sqlite_repository() -> Arc<dyn UserRepository> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect_with(options)
        .await
        .expect("in-memory SQLite should connect and migrate");

    Arc::new(SqlUserStore::new(db.get_connection()))
}
