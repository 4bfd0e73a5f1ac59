//! Document store abstraction for visitor records
//!
//! The hosted store is an external collaborator; this layer owns only the
//! wire contract (see [`types`]) and the four operations the kiosk uses.

pub mod http;
pub mod memory;
pub mod types;

use async_trait::async_trait;
use rand::{distributions::Alphanumeric, Rng};

use crate::{
    error::AppResult,
    models::{VisitorDocument, VisitorRecord, VisitorUpdate},
};

pub use http::HttpDocumentStore;
pub use memory::MemoryDocumentStore;

/// Length of store-generated document identifiers
const DOCUMENT_ID_LEN: usize = 20;

/// Remote CRUD store of visitor documents, keyed by generated identifiers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Mint a fresh document identifier without writing anything
    fn new_document_id(&self) -> String;

    /// Create a document with a store-generated id, returning the id
    async fn create(&self, doc: &VisitorDocument) -> AppResult<String>;

    /// Create or overwrite the document at an explicit id
    async fn put(&self, id: &str, doc: &VisitorDocument) -> AppResult<()>;

    /// Field-level update of an existing document
    async fn update(&self, id: &str, update: &VisitorUpdate) -> AppResult<()>;

    /// Fetch a document by id
    async fn get(&self, id: &str) -> AppResult<Option<VisitorRecord>>;
}

/// Generate an opaque 20-character alphanumeric document identifier
pub fn generate_document_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(DOCUMENT_ID_LEN)
        .map(char::from)
        .collect()
}
