//! Document store trait definition.
//!
//! This module defines the abstract interface for document store operations,
//! allowing for different backend implementations (OpenSearch, mocks, etc.).

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::StoreError;
use doc_store_shared::{
    BulkOperation, BulkSummary, RefreshPolicy, SearchHit, SearchRequest, WriteReceipt,
};

/// Abstracts the underlying document store implementation.
///
/// This trait defines the operations required to manage indices and documents
/// in a remote store. Implementations are injected into `DocStoreClient` to
/// enable dependency injection and easy testing with mock implementations.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow a single shared handle
/// across async tasks. The trait imposes no additional locking; concurrent
/// use is delegated to the underlying transport.
///
/// # Error Handling
///
/// All methods return `Result<T, StoreError>`. Timeouts are advisory and
/// bound the request only, never local work.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Create an index with default settings.
    ///
    /// Not idempotent: creating an index that already exists fails with
    /// `StoreError::Server`.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The engine acknowledged the creation
    /// * `Err(StoreError)` - If the creation fails
    async fn create_index(&self, index: &str) -> Result<bool, StoreError>;

    /// Create an index with caller-provided settings and mappings.
    ///
    /// # Arguments
    ///
    /// * `index` - The index name
    /// * `body` - Settings/mappings body forwarded to the engine unchanged
    async fn create_index_with_body(&self, index: &str, body: &Value) -> Result<bool, StoreError>;

    /// Check whether an index exists. No side effect.
    async fn index_exists(&self, index: &str) -> Result<bool, StoreError>;

    /// Delete an index.
    ///
    /// Fails with `StoreError::Server` if the index is absent.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The engine acknowledged the deletion
    /// * `Err(StoreError)` - If the deletion fails
    async fn delete_index(&self, index: &str) -> Result<bool, StoreError>;

    /// Store a document under the given id.
    ///
    /// Replace semantics: an existing document under the same id is
    /// overwritten silently.
    ///
    /// # Arguments
    ///
    /// * `index` - The index to write to
    /// * `id` - The externally assigned document id
    /// * `body` - The document body (a JSON object)
    /// * `timeout` - Advisory bound on the request
    async fn index_document(
        &self,
        index: &str,
        id: &str,
        body: &Value,
        timeout: Option<Duration>,
    ) -> Result<WriteReceipt, StoreError>;

    /// Fetch a document body by id.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(body))` - The stored document
    /// * `Ok(None)` - No document exists under the id (not an error)
    /// * `Err(StoreError)` - If the fetch fails
    async fn get_document(&self, index: &str, id: &str) -> Result<Option<Value>, StoreError>;

    /// Check whether a document exists, skipping the source fetch.
    async fn document_exists(&self, index: &str, id: &str) -> Result<bool, StoreError>;

    /// Partially update an existing document.
    ///
    /// Merge semantics: only the fields present in `body` are written;
    /// unspecified fields retain their prior values. The document must
    /// already exist.
    ///
    /// # Arguments
    ///
    /// * `index` - The index containing the document
    /// * `id` - The document id
    /// * `body` - The partial body to merge
    /// * `refresh` - When the write becomes visible to subsequent reads
    /// * `timeout` - Advisory bound on the request
    ///
    /// # Returns
    ///
    /// * `Ok(WriteReceipt)` - The engine's classification of the write
    /// * `Err(StoreError::Server)` - If the document is absent
    async fn update_document(
        &self,
        index: &str,
        id: &str,
        body: &Value,
        refresh: RefreshPolicy,
        timeout: Option<Duration>,
    ) -> Result<WriteReceipt, StoreError>;

    /// Delete a document by id.
    ///
    /// Fails with `StoreError::Server` if no document exists under the id.
    async fn delete_document(
        &self,
        index: &str,
        id: &str,
        timeout: Option<Duration>,
    ) -> Result<WriteReceipt, StoreError>;

    /// Submit an ordered batch of write sub-requests in one round trip.
    ///
    /// The batch is not atomic: individual items may fail while the rest
    /// persist. Callers inspect the returned summary for per-item outcomes.
    async fn bulk_write(
        &self,
        index: &str,
        operations: &[BulkOperation],
        timeout: Option<Duration>,
    ) -> Result<BulkSummary, StoreError>;

    /// Execute a search and return matching documents.
    ///
    /// Ordering and pagination are defined by the engine, not by this
    /// interface.
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, StoreError>;

    /// Check that the engine is reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The engine answered
    /// * `Ok(false)` - The engine answered with a non-success status
    /// * `Err(StoreError)` - If the check could not be executed
    async fn ping(&self) -> Result<bool, StoreError>;
}
