//! Application services layer - Use cases and business logic.
//!
//! Services sit between the HTTP handlers and the repository adapters
//! and depend only on the `UserRepository` trait.

mod user_service;

pub use user_service::{UserManager, UserService};
