//! Document store client facade.
//!
//! This module provides the main client for interacting with the document
//! store. Application code uses this to manage indices, write and read
//! documents, and run searches.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::{ConnectionConfig, StoreConfig};
use crate::errors::StoreError;
use crate::interfaces::DocumentStore;
use crate::opensearch::OpenSearchStore;
use doc_store_shared::{
    BulkOperation, BulkSummary, RefreshPolicy, SearchHit, SearchRequest, WriteReceipt,
};

/// The main client for interacting with the document store.
///
/// Wraps a backend implementation behind the `DocumentStore` trait,
/// validating inputs and serializing document bodies before delegating.
/// Backends are passed in explicitly (constructor injection); `connect` is
/// the factory for the OpenSearch-backed production setup.
pub struct DocStoreClient {
    store: Box<dyn DocumentStore>,
    config: StoreConfig,
}

impl DocStoreClient {
    /// Create a new client over the given backend with default configuration.
    pub fn new(store: Box<dyn DocumentStore>) -> Self {
        Self {
            store,
            config: StoreConfig::default(),
        }
    }

    /// Create a new client over the given backend with custom configuration.
    pub fn with_config(store: Box<dyn DocumentStore>, config: StoreConfig) -> Self {
        Self { store, config }
    }

    /// Build a client backed by OpenSearch at the configured endpoint.
    pub fn connect(connection: ConnectionConfig) -> Result<Self, StoreError> {
        let store = OpenSearchStore::connect(&connection)?;
        Ok(Self::new(Box::new(store)))
    }

    /// Build an OpenSearch-backed client with custom facade configuration.
    pub fn connect_with_config(
        connection: ConnectionConfig,
        config: StoreConfig,
    ) -> Result<Self, StoreError> {
        let store = OpenSearchStore::connect(&connection)?;
        Ok(Self::with_config(Box::new(store), config))
    }

    fn validate_index(index: &str) -> Result<(), StoreError> {
        if index.trim().is_empty() {
            return Err(StoreError::validation("index name is required"));
        }
        Ok(())
    }

    fn validate_id(id: &str) -> Result<(), StoreError> {
        if id.trim().is_empty() {
            return Err(StoreError::validation("document id is required"));
        }
        Ok(())
    }

    /// Check if a bulk batch exceeds the configured limit.
    fn validate_bulk_size(&self, size: usize) -> Result<(), StoreError> {
        if let Some(max) = self.config.max_bulk_size {
            if size > max {
                return Err(StoreError::validation(format!(
                    "bulk batch of {} exceeds maximum {}",
                    size, max
                )));
            }
        }
        Ok(())
    }

    /// Serialize a document body, requiring a JSON object.
    fn to_document<T: Serialize>(doc: &T) -> Result<Value, StoreError> {
        let value =
            serde_json::to_value(doc).map_err(|e| StoreError::serialization(e.to_string()))?;
        if !value.is_object() {
            return Err(StoreError::serialization(
                "document body must be a JSON object",
            ));
        }
        Ok(value)
    }

    /// Create an index with default settings.
    ///
    /// Not idempotent: repeating on an existing index fails with
    /// `StoreError::Server`.
    pub async fn create_index(&self, index: &str) -> Result<bool, StoreError> {
        Self::validate_index(index)?;
        self.store.create_index(index).await
    }

    /// Create an index with caller-provided settings and mappings.
    pub async fn create_index_with_body(
        &self,
        index: &str,
        body: &Value,
    ) -> Result<bool, StoreError> {
        Self::validate_index(index)?;
        self.store.create_index_with_body(index, body).await
    }

    /// Check whether an index exists.
    pub async fn index_exists(&self, index: &str) -> Result<bool, StoreError> {
        Self::validate_index(index)?;
        self.store.index_exists(index).await
    }

    /// Delete an index. Fails with `StoreError::Server` if it is absent.
    pub async fn delete_index(&self, index: &str) -> Result<bool, StoreError> {
        Self::validate_index(index)?;
        self.store.delete_index(index).await
    }

    /// Store a document under the given id, replacing any existing one.
    ///
    /// Input: any `Serialize` value encoding to a JSON object.
    /// Output: `Result<WriteReceipt, StoreError>`.
    pub async fn index_document<T: Serialize>(
        &self,
        index: &str,
        id: &str,
        doc: &T,
        timeout: Option<Duration>,
    ) -> Result<WriteReceipt, StoreError> {
        Self::validate_index(index)?;
        Self::validate_id(id)?;
        let body = Self::to_document(doc)?;
        self.store.index_document(index, id, &body, timeout).await
    }

    /// Fetch a document body by id; `None` when absent.
    pub async fn get_document(&self, index: &str, id: &str) -> Result<Option<Value>, StoreError> {
        Self::validate_index(index)?;
        Self::validate_id(id)?;
        self.store.get_document(index, id).await
    }

    /// Fetch and decode a document by id; `None` when absent.
    ///
    /// Fails with `StoreError::Parse` if the stored body does not decode
    /// into `T`.
    pub async fn get_document_as<T: DeserializeOwned>(
        &self,
        index: &str,
        id: &str,
    ) -> Result<Option<T>, StoreError> {
        let body = self.get_document(index, id).await?;
        match body {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| StoreError::parse(e.to_string())),
            None => Ok(None),
        }
    }

    /// Check whether a document exists without fetching its body.
    pub async fn document_exists(&self, index: &str, id: &str) -> Result<bool, StoreError> {
        Self::validate_index(index)?;
        Self::validate_id(id)?;
        self.store.document_exists(index, id).await
    }

    /// Partially update an existing document.
    ///
    /// Only the fields present in `partial` are written; unspecified fields
    /// retain their prior values. With `RefreshPolicy::Immediate` the write
    /// is visible to reads before this call returns.
    pub async fn update_document<T: Serialize>(
        &self,
        index: &str,
        id: &str,
        partial: &T,
        refresh: RefreshPolicy,
        timeout: Option<Duration>,
    ) -> Result<WriteReceipt, StoreError> {
        Self::validate_index(index)?;
        Self::validate_id(id)?;
        let body = Self::to_document(partial)?;
        self.store
            .update_document(index, id, &body, refresh, timeout)
            .await
    }

    /// Delete a document by id. Fails with `StoreError::Server` if absent.
    pub async fn delete_document(
        &self,
        index: &str,
        id: &str,
        timeout: Option<Duration>,
    ) -> Result<WriteReceipt, StoreError> {
        Self::validate_index(index)?;
        Self::validate_id(id)?;
        self.store.delete_document(index, id, timeout).await
    }

    /// Submit an ordered batch of write sub-requests.
    ///
    /// The batch is not atomic: some items may succeed while others fail.
    /// Callers inspect the summary's `errors` flag and per-item results.
    /// The batch size is bounded by the configured `max_bulk_size`.
    pub async fn bulk_write(
        &self,
        index: &str,
        operations: Vec<BulkOperation>,
        timeout: Option<Duration>,
    ) -> Result<BulkSummary, StoreError> {
        Self::validate_index(index)?;
        if operations.is_empty() {
            return Ok(BulkSummary::default());
        }
        self.validate_bulk_size(operations.len())?;
        for operation in &operations {
            Self::validate_id(operation.id())?;
        }
        self.store.bulk_write(index, &operations, timeout).await
    }

    /// Like `bulk_write`, but a partially failed batch is returned as
    /// `StoreError::PartialFailure` instead of a summary.
    pub async fn bulk_write_strict(
        &self,
        index: &str,
        operations: Vec<BulkOperation>,
        timeout: Option<Duration>,
    ) -> Result<BulkSummary, StoreError> {
        let summary = self.bulk_write(index, operations, timeout).await?;
        if let Some(message) = summary.failure_message() {
            return Err(StoreError::partial_failure(message));
        }
        Ok(summary)
    }

    /// Execute a search and return matching documents, engine-ordered.
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, StoreError> {
        Self::validate_index(&request.index)?;
        self.store.search(request).await
    }

    /// Check that the engine is reachable.
    pub async fn ping(&self) -> Result<bool, StoreError> {
        self.store.ping().await
    }
}
