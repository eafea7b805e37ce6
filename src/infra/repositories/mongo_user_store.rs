//! Document-store user repository backed by MongoDB.
//!
//! Every operation is a single round-trip: updates and deletes use the
//! find-and-modify commands so the returned document is the one the server
//! actually wrote or removed.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime as BsonDateTime, Document},
    options::ReturnDocument,
    Collection, Database,
};

use super::entities::user_document::UserDocument;
use super::user_repository::UserRepository;
use crate::config::USERS_COLLECTION;
use crate::domain::{CreateUser, UpdateUser, User};
use crate::errors::AppResult;

/// Concrete implementation of UserRepository over a MongoDB collection
pub struct MongoUserStore {
    collection: Collection<UserDocument>,
}

impl MongoUserStore {
    /// Create new repository instance on the `users` collection
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<UserDocument>(USERS_COLLECTION),
        }
    }

    /// Filter matching `id`, or `None` when it is not an ObjectId
    fn id_filter(id: &str) -> Option<Document> {
        ObjectId::parse_str(id).ok().map(|oid| doc! { "_id": oid })
    }

    /// Build the `$set` update for a partial merge
    fn build_update(input: UpdateUser, now: BsonDateTime) -> Document {
        let mut set = doc! { "updatedAt": now };

        if let Some(name) = input.name {
            set.insert("name", name);
        }
        if let Some(email) = input.email {
            set.insert("email", email);
        }

        doc! { "$set": set }
    }
}

#[async_trait]
impl UserRepository for MongoUserStore {
    async fn create(&self, input: CreateUser) -> AppResult<User> {
        let document = UserDocument::new(input.name, input.email);

        self.collection.insert_one(&document).await?;
        tracing::info!(user_id = %document.id, "User created");

        Ok(User::from(document))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let cursor = self.collection.find(doc! {}).sort(doc! { "_id": 1 }).await?;
        let documents: Vec<UserDocument> = cursor.try_collect().await?;

        Ok(documents.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Some(filter) = Self::id_filter(id) else {
            return Ok(None);
        };

        let document = self.collection.find_one(filter).await?;
        Ok(document.map(User::from))
    }

    async fn update(&self, id: &str, input: UpdateUser) -> AppResult<Option<User>> {
        let Some(filter) = Self::id_filter(id) else {
            return Ok(None);
        };

        let update = Self::build_update(input, BsonDateTime::now());
        let document = self
            .collection
            .find_one_and_update(filter, update)
            .return_document(ReturnDocument::After)
            .await?;

        Ok(document.map(User::from))
    }

    async fn delete(&self, id: &str) -> AppResult<Option<User>> {
        let Some(filter) = Self::id_filter(id) else {
            return Ok(None);
        };

        let document = self.collection.find_one_and_delete(filter).await?;
        if let Some(ref removed) = document {
            tracing::info!(user_id = %removed.id, "User deleted");
        }

        Ok(document.map(User::from))
    }
}
