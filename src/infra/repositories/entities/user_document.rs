//! User document stored in the MongoDB `users` collection.

use chrono::{DateTime, Utc};
use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    pub created_at: BsonDateTime,
    pub updated_at: BsonDateTime,
}

impl UserDocument {
    /// Build a fresh document with a new ObjectId and equal timestamps
    pub fn new(name: String, email: String) -> Self {
        let now = BsonDateTime::now();
        Self {
            id: ObjectId::new(),
            name,
            email,
            created_at: now,
            updated_at: now,
        }
    }
}

/// BSON dates carry millisecond precision
fn to_utc(value: BsonDateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

/// Convert stored document to domain entity
impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        User {
            id: doc.id.to_hex(),
            name: doc.name,
            email: doc.email,
            created_at: to_utc(doc.created_at),
            updated_at: to_utc(doc.updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_has_equal_timestamps() {
        let doc = UserDocument::new("John Doe".to_string(), "john@example.com".to_string());
        assert_eq!(doc.created_at, doc.updated_at);
    }

    #[test]
    fn test_into_user_uses_hex_id() {
        let doc = UserDocument::new("John Doe".to_string(), "john@example.com".to_string());
        let hex = doc.id.to_hex();
        let millis = doc.created_at.timestamp_millis();

        let user = User::from(doc);
        assert_eq!(user.id, hex);
        assert_eq!(user.id.len(), 24);
        assert_eq!(user.created_at.timestamp_millis(), millis);
    }

    #[test]
    fn test_document_field_names() {
        let doc = UserDocument::new("John Doe".to_string(), "john@example.com".to_string());
        let bson = mongodb::bson::to_document(&doc).unwrap();
        assert!(bson.contains_key("_id"));
        assert!(bson.contains_key("createdAt"));
        assert!(bson.contains_key("updatedAt"));
        assert!(bson.get_datetime("createdAt").is_ok());
    }
}
