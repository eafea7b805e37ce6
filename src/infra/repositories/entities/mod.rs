//! Storage entity definitions
//!
//! These are database-specific entities separate from domain models:
//! a SeaORM table model and a MongoDB document model.

pub mod user;
pub mod user_document;
