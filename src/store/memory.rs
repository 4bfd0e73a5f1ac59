//! In-process document store backend
//!
//! Resolves deferred timestamps at write time, which makes every write
//! contract observable in tests without a live store. Also usable as the
//! `memory` backend for local development.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::{VisitorDocument, VisitorRecord, VisitorUpdate},
};

use super::{generate_document_id, DocumentStore};

#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    docs: RwLock<HashMap<String, VisitorRecord>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.docs.read().expect("store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    fn new_document_id(&self) -> String {
        generate_document_id()
    }

    async fn create(&self, doc: &VisitorDocument) -> AppResult<String> {
        let id = generate_document_id();
        let record = doc.clone().into_record(Utc::now());
        self.docs
            .write()
            .expect("store lock poisoned")
            .insert(id.clone(), record);
        Ok(id)
    }

    async fn put(&self, id: &str, doc: &VisitorDocument) -> AppResult<()> {
        let record = doc.clone().into_record(Utc::now());
        self.docs
            .write()
            .expect("store lock poisoned")
            .insert(id.to_string(), record);
        Ok(())
    }

    async fn update(&self, id: &str, update: &VisitorUpdate) -> AppResult<()> {
        let mut docs = self.docs.write().expect("store lock poisoned");
        let record = docs
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Visitor {} not found", id)))?;
        update.apply(record, Utc::now());
        Ok(())
    }

    async fn get(&self, id: &str) -> AppResult<Option<VisitorRecord>> {
        Ok(self.docs.read().expect("store lock poisoned").get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{VisitorStatus, VisitorType};
    use crate::store::types::{DocRef, SchoolId, WriteTime};

    fn sample_doc() -> VisitorDocument {
        let school = SchoolId::new("cihir4BLjVvYNTVBdmqF");
        VisitorDocument {
            visitor_id: None,
            visitor_name: "ragul".to_string(),
            mobile_number: "8939243996".to_string(),
            email: String::new(),
            visit_purpose: "parent".to_string(),
            host_person: "vishal".to_string(),
            host_department: String::new(),
            status: VisitorStatus::Pending,
            visitor_type: VisitorType::New,
            check_in_time: None,
            check_out_time: None,
            created_at: WriteTime::ServerTime,
            school_id: DocRef::school(&school),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let store = MemoryDocumentStore::new();
        let id = store.create(&sample_doc()).await.unwrap();
        assert_eq!(id.len(), 20);

        let record = store.get(&id).await.unwrap().unwrap();
        assert_eq!(record.visitor_name, "ragul");
        assert_eq!(record.status, VisitorStatus::Pending);
        // Deferred timestamp was resolved at write time
        assert!(record.created_at <= Utc::now());
    }

    #[tokio::test]
    async fn test_put_uses_explicit_id() {
        let store = MemoryDocumentStore::new();
        store.put("fixed-id", &sample_doc()).await.unwrap();
        assert!(store.get("fixed-id").await.unwrap().is_some());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_update_applies_fields() {
        let store = MemoryDocumentStore::new();
        let id = store.create(&sample_doc()).await.unwrap();

        let update = VisitorUpdate {
            status: Some(VisitorStatus::CheckedIn),
            check_in_time: Some(WriteTime::ServerTime),
            ..VisitorUpdate::default()
        };
        store.update(&id, &update).await.unwrap();

        let record = store.get(&id).await.unwrap().unwrap();
        assert_eq!(record.status, VisitorStatus::CheckedIn);
        assert!(record.check_in_time.is_some());
        assert_eq!(record.visitor_name, "ragul");
    }

    #[tokio::test]
    async fn test_update_missing_document() {
        let store = MemoryDocumentStore::new();
        let err = store
            .update("nope", &VisitorUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let store = MemoryDocumentStore::new();
        assert!(store.get("nope").await.unwrap().is_none());
    }
}
