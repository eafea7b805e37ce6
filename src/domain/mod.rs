//! Domain layer - Core business entities
//!
//! Contains the `User` entity and the input shapes accepted for it.
//! Storage adapters convert their own models into these types.

pub mod user;

pub use user::{CreateUser, UpdateUser, User};
