use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Client, Collection,
};

use super::text_models::TextRecord;
use crate::error::StoreError;

/// Persistence gateway for reviewed text.
#[async_trait]
pub trait TextRepository: Send + Sync {
    /// Inserts a new record and returns its generated id as a hex string.
    async fn store(&self, storedtext: &str, reviewedtext: &str) -> Result<String, StoreError>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<TextRecord>, StoreError>;

    async fn close(&self) {}
}

pub struct MongoTextRepository {
    client: Client,
    collection: Collection<TextRecord>,
}

impl MongoTextRepository {
    pub fn new(client: Client, database: &str, collection: &str) -> Self {
        let collection = client.database(database).collection::<TextRecord>(collection);
        Self { client, collection }
    }

    /// Builds the client. The driver opens connections on first use.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self::new(client, database, collection))
    }
}

#[async_trait]
impl TextRepository for MongoTextRepository {
    async fn store(&self, storedtext: &str, reviewedtext: &str) -> Result<String, StoreError> {
        let record = TextRecord::new(storedtext, reviewedtext);
        let result = self.collection.insert_one(record).await?;

        match result.inserted_id.as_object_id() {
            Some(oid) => Ok(oid.to_hex()),
            None => Err(StoreError::UnexpectedId(result.inserted_id.to_string())),
        }
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<TextRecord>, StoreError> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
        tracing::info!("MongoDB client shut down");
    }
}
