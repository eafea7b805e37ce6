//! User domain entity and related types.
//!
//! These types are the single declaration of the user shape: validation
//! rules, JSON layout and OpenAPI schema all derive from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Identifier generated by the storage adapter
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: String,
    /// User display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// Unique email address
    #[schema(example = "john@example.com")]
    pub email: String,
    /// Creation timestamp, never changes
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful mutation
    pub updated_at: DateTime<Utc>,
}

/// User creation data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    /// User display name
    #[validate(length(min = 1, message = "name should not be empty"))]
    #[schema(example = "John Doe")]
    pub name: String,
    /// User email address
    #[validate(email(message = "email must be an email"))]
    #[schema(example = "john@example.com")]
    pub email: String,
}

impl CreateUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Partial user update; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    /// New display name
    #[validate(length(min = 1, message = "name should not be empty"))]
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    /// New email address
    #[validate(email(message = "email must be an email"))]
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
}

impl UpdateUser {
    /// Check whether the update carries no field changes
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}
