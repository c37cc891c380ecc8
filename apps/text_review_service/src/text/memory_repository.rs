use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::{text_models::TextRecord, text_repository::TextRepository};
use crate::error::StoreError;

/// Process-local store. Records live as long as the process.
#[derive(Default)]
pub struct InMemoryTextRepository {
    records: RwLock<HashMap<ObjectId, TextRecord>>,
}

impl InMemoryTextRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    pub async fn records(&self) -> Vec<TextRecord> {
        self.records.read().await.values().cloned().collect()
    }
}

#[async_trait]
impl TextRepository for InMemoryTextRepository {
    async fn store(&self, storedtext: &str, reviewedtext: &str) -> Result<String, StoreError> {
        let id = ObjectId::new();
        let record = TextRecord {
            id: Some(id),
            ..TextRecord::new(storedtext, reviewedtext)
        };
        self.records.write().await.insert(id, record);
        Ok(id.to_hex())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<TextRecord>, StoreError> {
        Ok(self.records.read().await.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn store_assigns_fresh_ids() {
        let repo = InMemoryTextRepository::new();
        let first = repo.store("abc", "cba").await.unwrap();
        let second = repo.store("abc", "cba").await.unwrap();

        assert_ne!(first, second);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn find_by_id_returns_stored_record() {
        let repo = InMemoryTextRepository::new();
        let id = repo.store("HeLLo", "HELLO").await.unwrap();
        let oid = ObjectId::parse_str(&id).unwrap();

        let record = repo.find_by_id(oid).await.unwrap().unwrap();
        assert_eq!(record.id, Some(oid));
        assert_eq!(record.storedtext, "HeLLo");
        assert_eq!(record.reviewedtext, "HELLO");
    }

    #[tokio::test]
    async fn find_by_id_misses_unknown_id() {
        let repo = InMemoryTextRepository::new();
        assert!(repo.find_by_id(ObjectId::new()).await.unwrap().is_none());
        assert!(repo.is_empty().await);
    }
}
