//! Repository layer - Data access abstraction
//!
//! One `UserRepository` contract with an adapter per storage engine.

pub mod entities;
mod mongo_user_store;
mod sql_user_store;
mod user_repository;

pub use mongo_user_store::MongoUserStore;
pub use sql_user_store::SqlUserStore;
pub use user_repository::UserRepository;

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
