//! HTTP document store backend
//!
//! Client for the hosted store's REST surface:
//!
//! - `POST {base}/{collection}` creates with a store-generated id and
//!   returns `{"id": "..."}`
//! - `PUT {base}/{collection}/{id}` creates or overwrites at an explicit id
//! - `PATCH {base}/{collection}/{id}` applies a field-level update
//! - `GET {base}/{collection}/{id}` fetches a document (404 when absent)
//!
//! Deferred timestamps travel as the `{"$serverTimestamp": true}` sentinel
//! and are resolved server-side.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::{
    config::StoreConfig,
    error::AppResult,
    models::{VisitorDocument, VisitorRecord, VisitorUpdate},
};

use super::{generate_document_id, DocumentStore};

pub struct HttpDocumentStore {
    client: reqwest::Client,
    base_url: String,
    collection: String,
}

#[derive(Deserialize)]
struct CreateResponse {
    id: String,
}

impl HttpDocumentStore {
    pub fn new(config: &StoreConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            collection: config.collection.clone(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, self.collection)
    }

    fn document_url(&self, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.collection, id)
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    fn new_document_id(&self) -> String {
        // Identifiers are minted client-side, like the hosted store's SDK does
        generate_document_id()
    }

    async fn create(&self, doc: &VisitorDocument) -> AppResult<String> {
        let response = self
            .client
            .post(self.collection_url())
            .json(doc)
            .send()
            .await?
            .error_for_status()?;
        let created: CreateResponse = response.json().await?;
        Ok(created.id)
    }

    async fn put(&self, id: &str, doc: &VisitorDocument) -> AppResult<()> {
        self.client
            .put(self.document_url(id))
            .json(doc)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn update(&self, id: &str, update: &VisitorUpdate) -> AppResult<()> {
        self.client
            .patch(self.document_url(id))
            .json(update)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn get(&self, id: &str) -> AppResult<Option<VisitorRecord>> {
        let response = self.client.get(self.document_url(id)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let record: VisitorRecord = response.error_for_status()?.json().await?;
        Ok(Some(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_strip_trailing_slash() {
        let config = StoreConfig {
            base_url: "http://store.local/".to_string(),
            ..StoreConfig::default()
        };
        let store = HttpDocumentStore::new(&config).unwrap();
        assert_eq!(store.collection_url(), "http://store.local/visitors");
        assert_eq!(store.document_url("abc"), "http://store.local/visitors/abc");
    }
}
