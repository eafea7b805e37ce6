//! User CRUD API - user management over a relational or document store.
//!
//! The request pipeline is Controller → Service → Repository, with the
//! storage adapter chosen at startup.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: The `User` entity and its input shapes
//! - **services**: Use cases (existence enforcement)
//! - **infra**: Storage adapters, connections and migrations
//! - **api**: HTTP handlers, extractors and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server against PostgreSQL
//! cargo run -- serve
//!
//! # Start the server against MongoDB
//! cargo run -- serve --storage mongo
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::{Config, StorageBackend};
pub use domain::{CreateUser, UpdateUser, User};
pub use errors::{AppError, AppResult};
