use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use super::{
    text_models::TextOutput, text_repository::TextRepository, text_transformer::Transformation,
};
use crate::error::StoreError;

#[derive(Clone)]
pub struct TextService {
    repository: Arc<dyn TextRepository>,
}

impl TextService {
    pub fn new(repository: Arc<dyn TextRepository>) -> Self {
        Self { repository }
    }

    /// Applies `transformation`, persists both texts and returns the new record.
    pub async fn review(
        &self,
        transformation: Transformation,
        text: String,
    ) -> Result<TextOutput, StoreError> {
        tracing::info!("Received text for {}: {}", transformation, text);
        let reviewedtext = transformation.apply(&text);
        tracing::info!("Converted text: {}", reviewedtext);

        let id = self.repository.store(&text, &reviewedtext).await?;

        Ok(TextOutput {
            id,
            reviewedtext,
            storedtext: text,
        })
    }

    pub async fn find(&self, id: ObjectId) -> Result<Option<TextOutput>, StoreError> {
        let record = self.repository.find_by_id(id).await?;
        Ok(record.map(|record| record.into_output(id.to_hex())))
    }

    pub async fn close(&self) {
        self.repository.close().await;
    }
}
