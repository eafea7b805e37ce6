//! MongoDB connection and collection bootstrap.

use mongodb::{
    bson::doc,
    options::IndexOptions,
    Client, Database as MongoDatabase, IndexModel,
};

use crate::config::{EMAIL_UNIQUE_INDEX, USERS_COLLECTION};
use crate::errors::AppResult;

use super::repositories::entities::user_document::UserDocument;

/// Document store wrapper for connection management
#[derive(Clone)]
pub struct DocumentStore {
    database: MongoDatabase,
}

impl DocumentStore {
    /// Connect, verify the server answers and ensure the users indexes exist.
    pub async fn connect(url: &str, database: &str) -> AppResult<Self> {
        let client = Client::with_uri_str(url).await?;
        let database = client.database(database);

        database.run_command(doc! { "ping": 1 }).await?;

        let store = Self { database };
        store.ensure_indexes().await?;
        tracing::info!("Document store connected and indexes ensured");

        Ok(store)
    }

    /// Get a reference to the database handle.
    pub fn database(&self) -> &MongoDatabase {
        &self.database
    }

    /// Create the unique email index; a no-op when it already exists.
    async fn ensure_indexes(&self) -> AppResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .name(EMAIL_UNIQUE_INDEX.to_string())
                    .unique(true)
                    .build(),
            )
            .build();

        self.database
            .collection::<UserDocument>(USERS_COLLECTION)
            .create_index(index)
            .await?;

        Ok(())
    }
}
