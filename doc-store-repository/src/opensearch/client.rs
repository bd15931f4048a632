//! OpenSearch document store implementation.
//!
//! This module provides the concrete implementation of `DocumentStore`
//! using the OpenSearch Rust client.

use std::time::Duration;

use async_trait::async_trait;
use opensearch::http::request::JsonBody;
use opensearch::http::response::Response;
use opensearch::http::transport::{SingleNodeConnectionPool, TransportBuilder};
use opensearch::indices::{IndicesCreateParts, IndicesDeleteParts, IndicesExistsParts};
use opensearch::params::Refresh;
use opensearch::{
    BulkParts, DeleteParts, ExistsParts, GetParts, IndexParts, OpenSearch, SearchParts,
    UpdateParts,
};
use serde_json::{json, Value};
use tracing::{debug, error, info};
use url::Url;

use crate::config::ConnectionConfig;
use crate::errors::StoreError;
use crate::interfaces::DocumentStore;
use crate::opensearch::index_settings::default_index_settings;
use crate::opensearch::queries::build_search_body;
use doc_store_shared::{
    BulkItemResult, BulkOperation, BulkSummary, RefreshPolicy, SearchHit, SearchRequest,
    WriteOutcome, WriteReceipt,
};

/// OpenSearch-backed document store.
///
/// A single long-lived handle bound to one endpoint. The underlying
/// transport pools connections and is safe for concurrent use; this wrapper
/// adds no locking or queuing of its own.
///
/// # Example
///
/// ```ignore
/// use doc_store_repository::{ConnectionConfig, OpenSearchStore};
///
/// let config = ConnectionConfig::new("localhost", 9200);
/// let store = OpenSearchStore::connect(&config)?;
/// let created = store.create_index("users").await?;
/// ```
pub struct OpenSearchStore {
    client: OpenSearch,
}

impl OpenSearchStore {
    /// Create a new store handle bound to the configured endpoint.
    ///
    /// Construction only assembles the transport; no request is issued until
    /// an operation is called, so an unreachable host is reported by the
    /// first operation rather than here.
    ///
    /// # Arguments
    ///
    /// * `config` - Host and port of the engine's REST endpoint
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchStore)` - A new store handle
    /// * `Err(StoreError::Connection)` - If the endpoint cannot be assembled
    ///   into a valid transport target
    pub fn connect(config: &ConnectionConfig) -> Result<Self, StoreError> {
        let url =
            Url::parse(&config.endpoint()).map_err(|e| StoreError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| StoreError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(
            host = %config.host,
            port = config.port,
            "Created document store client"
        );

        Ok(Self { client })
    }

    /// Render a timeout in the engine's time-units format.
    fn time_units(timeout: Duration) -> String {
        format!("{}ms", timeout.as_millis())
    }

    /// Drain a non-success response into a `Server` error.
    async fn reject(op: &str, response: Response) -> StoreError {
        let status = response.status_code().as_u16();
        let reason = response.text().await.unwrap_or_default();
        error!(op = %op, status, body = %reason, "Request failed");
        StoreError::server(status, reason)
    }

    /// Read an acknowledgement flag out of an index-level response.
    async fn read_acknowledged(op: &str, response: Response) -> Result<bool, StoreError> {
        if !response.status_code().is_success() {
            return Err(Self::reject(op, response).await);
        }
        let body: Value = response
            .json()
            .await
            .map_err(|e| StoreError::parse(e.to_string()))?;
        Ok(body["acknowledged"].as_bool().unwrap_or(false))
    }

    /// Read a write receipt out of a document-level write response.
    async fn read_receipt(op: &str, id: &str, response: Response) -> Result<WriteReceipt, StoreError> {
        if !response.status_code().is_success() {
            return Err(Self::reject(op, response).await);
        }
        let body: Value = response
            .json()
            .await
            .map_err(|e| StoreError::parse(e.to_string()))?;
        let outcome = match body["result"].as_str() {
            Some("created") => WriteOutcome::Created,
            Some("updated") => WriteOutcome::Updated,
            Some("deleted") => WriteOutcome::Deleted,
            Some("noop") => WriteOutcome::NoOp,
            other => {
                return Err(StoreError::parse(format!(
                    "unexpected write result: {:?}",
                    other
                )))
            }
        };
        debug!(op = %op, id = %id, outcome = ?outcome, "Write applied");
        Ok(WriteReceipt::new(id, outcome))
    }

    /// Parse a single search hit into a `SearchHit`.
    ///
    /// Returns `None` for hits missing an id.
    fn parse_hit(hit: &Value) -> Option<SearchHit> {
        let id = hit["_id"].as_str()?.to_string();
        let score = hit["_score"].as_f64();
        let source = hit.get("_source").cloned().unwrap_or(Value::Null);
        Some(SearchHit { id, score, source })
    }

    /// Parse a bulk response body into a per-item summary.
    fn parse_bulk_summary(body: &Value) -> Result<BulkSummary, StoreError> {
        let errors = body["errors"].as_bool().unwrap_or(false);
        let raw_items = body["items"]
            .as_array()
            .ok_or_else(|| StoreError::parse("bulk response missing items"))?;

        let mut items = Vec::with_capacity(raw_items.len());
        for raw in raw_items {
            // Each item is a single-key object keyed by the action type.
            let detail = raw
                .as_object()
                .and_then(|object| object.values().next())
                .ok_or_else(|| StoreError::parse("malformed bulk response item"))?;

            let id = detail["_id"].as_str().unwrap_or_default().to_string();
            let status = detail["status"].as_u64().unwrap_or(0) as u16;
            let error = detail.get("error").map(|reason| {
                reason["reason"]
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| reason.to_string())
            });

            items.push(BulkItemResult { id, status, error });
        }

        Ok(BulkSummary { errors, items })
    }
}

#[async_trait]
impl DocumentStore for OpenSearchStore {
    async fn create_index(&self, index: &str) -> Result<bool, StoreError> {
        DocumentStore::create_index_with_body(self, index, &default_index_settings()).await
    }

    async fn create_index_with_body(&self, index: &str, body: &Value) -> Result<bool, StoreError> {
        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(index))
            .body(body)
            .send()
            .await
            .map_err(|e| StoreError::transport(e.to_string()))?;

        let acknowledged = Self::read_acknowledged("create_index", response).await?;
        debug!(index = %index, acknowledged, "Created index");
        Ok(acknowledged)
    }

    async fn index_exists(&self, index: &str) -> Result<bool, StoreError> {
        let indices = [index];
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&indices))
            .send()
            .await
            .map_err(|e| StoreError::transport(e.to_string()))?;

        let status = response.status_code();
        if status.is_success() {
            return Ok(true);
        }
        if status.as_u16() == 404 {
            return Ok(false);
        }
        Err(Self::reject("index_exists", response).await)
    }

    async fn delete_index(&self, index: &str) -> Result<bool, StoreError> {
        let indices = [index];
        let response = self
            .client
            .indices()
            .delete(IndicesDeleteParts::Index(&indices))
            .send()
            .await
            .map_err(|e| StoreError::transport(e.to_string()))?;

        let acknowledged = Self::read_acknowledged("delete_index", response).await?;
        debug!(index = %index, acknowledged, "Deleted index");
        Ok(acknowledged)
    }

    async fn index_document(
        &self,
        index: &str,
        id: &str,
        body: &Value,
        timeout: Option<Duration>,
    ) -> Result<WriteReceipt, StoreError> {
        let timeout = timeout.map(Self::time_units);
        let mut request = self.client.index(IndexParts::IndexId(index, id)).body(body);
        if let Some(ref t) = timeout {
            request = request.timeout(t);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::transport(e.to_string()))?;

        Self::read_receipt("index_document", id, response).await
    }

    async fn get_document(&self, index: &str, id: &str) -> Result<Option<Value>, StoreError> {
        let response = self
            .client
            .get(GetParts::IndexId(index, id))
            .send()
            .await
            .map_err(|e| StoreError::transport(e.to_string()))?;

        let status = response.status_code();
        // A missing document (or missing index) is a normal read outcome.
        if status.as_u16() == 404 {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Self::reject("get_document", response).await);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| StoreError::parse(e.to_string()))?;
        if !body["found"].as_bool().unwrap_or(false) {
            return Ok(None);
        }
        Ok(body.get("_source").cloned())
    }

    async fn document_exists(&self, index: &str, id: &str) -> Result<bool, StoreError> {
        let response = self
            .client
            .exists(ExistsParts::IndexId(index, id))
            .send()
            .await
            .map_err(|e| StoreError::transport(e.to_string()))?;

        let status = response.status_code();
        if status.is_success() {
            return Ok(true);
        }
        if status.as_u16() == 404 {
            return Ok(false);
        }
        Err(Self::reject("document_exists", response).await)
    }

    async fn update_document(
        &self,
        index: &str,
        id: &str,
        body: &Value,
        refresh: RefreshPolicy,
        timeout: Option<Duration>,
    ) -> Result<WriteReceipt, StoreError> {
        let timeout = timeout.map(Self::time_units);
        let mut request = self
            .client
            .update(UpdateParts::IndexId(index, id))
            .body(json!({ "doc": body }));
        if let RefreshPolicy::Immediate = refresh {
            request = request.refresh(Refresh::True);
        }
        if let Some(ref t) = timeout {
            request = request.timeout(t);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::transport(e.to_string()))?;

        Self::read_receipt("update_document", id, response).await
    }

    async fn delete_document(
        &self,
        index: &str,
        id: &str,
        timeout: Option<Duration>,
    ) -> Result<WriteReceipt, StoreError> {
        let timeout = timeout.map(Self::time_units);
        let mut request = self.client.delete(DeleteParts::IndexId(index, id));
        if let Some(ref t) = timeout {
            request = request.timeout(t);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::transport(e.to_string()))?;

        Self::read_receipt("delete_document", id, response).await
    }

    async fn bulk_write(
        &self,
        index: &str,
        operations: &[BulkOperation],
        timeout: Option<Duration>,
    ) -> Result<BulkSummary, StoreError> {
        if operations.is_empty() {
            return Ok(BulkSummary::default());
        }

        // Action line, then (for writes) a source line, per sub-request.
        let mut body: Vec<JsonBody<Value>> = Vec::with_capacity(operations.len() * 2);
        for operation in operations {
            match operation {
                BulkOperation::Index { id, body: doc } => {
                    body.push(json!({ "index": { "_id": id } }).into());
                    body.push(doc.clone().into());
                }
                BulkOperation::Update { id, body: doc } => {
                    body.push(json!({ "update": { "_id": id } }).into());
                    body.push(json!({ "doc": doc }).into());
                }
                BulkOperation::Delete { id } => {
                    body.push(json!({ "delete": { "_id": id } }).into());
                }
            }
        }

        let timeout = timeout.map(Self::time_units);
        let mut request = self.client.bulk(BulkParts::Index(index)).body(body);
        if let Some(ref t) = timeout {
            request = request.timeout(t);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::transport(e.to_string()))?;

        if !response.status_code().is_success() {
            return Err(Self::reject("bulk_write", response).await);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| StoreError::parse(e.to_string()))?;
        let summary = Self::parse_bulk_summary(&body)?;

        debug!(
            index = %index,
            total = summary.items.len(),
            failed = summary.failed(),
            "Bulk write completed"
        );
        Ok(summary)
    }

    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, StoreError> {
        let body = build_search_body(request);
        let indices = [request.index.as_str()];

        let response = self
            .client
            .search(SearchParts::Index(&indices))
            .body(body)
            .send()
            .await
            .map_err(|e| StoreError::transport(e.to_string()))?;

        if !response.status_code().is_success() {
            return Err(Self::reject("search", response).await);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| StoreError::parse(e.to_string()))?;
        let hits = body["hits"]["hits"]
            .as_array()
            .ok_or_else(|| StoreError::parse("search response missing hits"))?;

        Ok(hits.iter().filter_map(Self::parse_hit).collect())
    }

    async fn ping(&self) -> Result<bool, StoreError> {
        let response = self
            .client
            .ping()
            .send()
            .await
            .map_err(|e| StoreError::transport(e.to_string()))?;

        Ok(response.status_code().is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_units() {
        assert_eq!(OpenSearchStore::time_units(Duration::from_secs(1)), "1000ms");
        assert_eq!(
            OpenSearchStore::time_units(Duration::from_millis(1500)),
            "1500ms"
        );
    }

    #[test]
    fn test_parse_hit() {
        let hit = json!({
            "_id": "1",
            "_score": 1.5,
            "_source": {
                "name": "BY",
                "age": 25
            }
        });

        let result = OpenSearchStore::parse_hit(&hit).unwrap();

        assert_eq!(result.id, "1");
        assert_eq!(result.score, Some(1.5));
        assert_eq!(result.source["name"], "BY");
        assert_eq!(result.source["age"], 25);
    }

    #[test]
    fn test_parse_hit_no_score() {
        let hit = json!({
            "_id": "2",
            "_score": null,
            "_source": { "name": "BY" }
        });

        let result = OpenSearchStore::parse_hit(&hit).unwrap();

        assert_eq!(result.id, "2");
        assert!(result.score.is_none());
    }

    #[test]
    fn test_parse_hit_missing_id() {
        let hit = json!({
            "_score": 0.5,
            "_source": { "name": "BY" }
        });

        assert!(OpenSearchStore::parse_hit(&hit).is_none());
    }

    #[test]
    fn test_parse_bulk_summary_all_success() {
        let body = json!({
            "took": 11,
            "errors": false,
            "items": [
                { "index": { "_index": "users", "_id": "1", "status": 201 } },
                { "index": { "_index": "users", "_id": "2", "status": 201 } }
            ]
        });

        let summary = OpenSearchStore::parse_bulk_summary(&body).unwrap();

        assert!(!summary.errors);
        assert_eq!(summary.items.len(), 2);
        assert_eq!(summary.succeeded(), 2);
        assert!(summary.failure_message().is_none());
    }

    #[test]
    fn test_parse_bulk_summary_partial_failure() {
        let body = json!({
            "took": 9,
            "errors": true,
            "items": [
                { "index": { "_index": "users", "_id": "1", "status": 201 } },
                {
                    "index": {
                        "_index": "users",
                        "_id": "2",
                        "status": 400,
                        "error": {
                            "type": "mapper_parsing_exception",
                            "reason": "failed to parse field [age]"
                        }
                    }
                }
            ]
        });

        let summary = OpenSearchStore::parse_bulk_summary(&body).unwrap();

        assert!(summary.errors);
        assert_eq!(summary.succeeded(), 1);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.items[1].status, 400);

        let message = summary.failure_message().unwrap();
        assert!(message.contains("failed to parse field [age]"));
    }

    #[test]
    fn test_parse_bulk_summary_missing_items() {
        let body = json!({ "errors": false });

        assert!(OpenSearchStore::parse_bulk_summary(&body).is_err());
    }
}
