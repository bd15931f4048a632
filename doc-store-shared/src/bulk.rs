//! Bulk write types.
//!
//! A bulk write submits an ordered batch of sub-requests in one round trip.
//! The batch is not atomic: individual items may fail while the rest
//! persist, so callers inspect the summary rather than a single flag.

use serde_json::Value;

/// A single write sub-request within a bulk batch.
#[derive(Debug, Clone, PartialEq)]
pub enum BulkOperation {
    /// Store (create or replace) a document under the given id.
    Index { id: String, body: Value },
    /// Partially update an existing document; unspecified fields keep their values.
    Update { id: String, body: Value },
    /// Remove the document with the given id.
    Delete { id: String },
}

impl BulkOperation {
    /// Index (create or replace) sub-request.
    pub fn index(id: impl Into<String>, body: Value) -> Self {
        Self::Index {
            id: id.into(),
            body,
        }
    }

    /// Partial-update sub-request.
    pub fn update(id: impl Into<String>, body: Value) -> Self {
        Self::Update {
            id: id.into(),
            body,
        }
    }

    /// Delete sub-request.
    pub fn delete(id: impl Into<String>) -> Self {
        Self::Delete { id: id.into() }
    }

    /// The document id this sub-request applies to.
    pub fn id(&self) -> &str {
        match self {
            Self::Index { id, .. } | Self::Update { id, .. } | Self::Delete { id } => id,
        }
    }
}

/// Outcome of one bulk sub-request.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkItemResult {
    /// The document id the sub-request applied to.
    pub id: String,
    /// HTTP status the engine reported for this item.
    pub status: u16,
    /// Failure reason; `None` when the item succeeded.
    pub error: Option<String>,
}

impl BulkItemResult {
    /// Whether this item succeeded.
    pub fn success(&self) -> bool {
        self.error.is_none()
    }
}

/// Summary of a completed bulk write.
#[derive(Debug, Clone, Default)]
pub struct BulkSummary {
    /// True when at least one item failed.
    pub errors: bool,
    /// Per-item results, in submission order.
    pub items: Vec<BulkItemResult>,
}

impl BulkSummary {
    /// Number of items that succeeded.
    pub fn succeeded(&self) -> usize {
        self.items.iter().filter(|item| item.success()).count()
    }

    /// Number of items that failed.
    pub fn failed(&self) -> usize {
        self.items.len() - self.succeeded()
    }

    /// Aggregate failure message over all failed items.
    ///
    /// Returns `None` when every item succeeded.
    pub fn failure_message(&self) -> Option<String> {
        if !self.errors {
            return None;
        }
        let parts: Vec<String> = self
            .items
            .iter()
            .filter_map(|item| {
                item.error
                    .as_ref()
                    .map(|reason| format!("[{}] status {}: {}", item.id, item.status, reason))
            })
            .collect();
        Some(parts.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ok_item(id: &str) -> BulkItemResult {
        BulkItemResult {
            id: id.to_string(),
            status: 201,
            error: None,
        }
    }

    fn failed_item(id: &str, reason: &str) -> BulkItemResult {
        BulkItemResult {
            id: id.to_string(),
            status: 400,
            error: Some(reason.to_string()),
        }
    }

    #[test]
    fn test_operation_id() {
        assert_eq!(BulkOperation::index("1", json!({"name": "BY"})).id(), "1");
        assert_eq!(BulkOperation::update("2", json!({"age": 18})).id(), "2");
        assert_eq!(BulkOperation::delete("3").id(), "3");
    }

    #[test]
    fn test_summary_all_success() {
        let summary = BulkSummary {
            errors: false,
            items: vec![ok_item("1"), ok_item("2")],
        };

        assert_eq!(summary.succeeded(), 2);
        assert_eq!(summary.failed(), 0);
        assert!(summary.failure_message().is_none());
    }

    #[test]
    fn test_summary_partial_failure() {
        let summary = BulkSummary {
            errors: true,
            items: vec![
                ok_item("1"),
                failed_item("2", "mapper_parsing_exception"),
                ok_item("3"),
            ],
        };

        assert_eq!(summary.succeeded(), 2);
        assert_eq!(summary.failed(), 1);

        let message = summary.failure_message().unwrap();
        assert!(message.contains("[2]"));
        assert!(message.contains("mapper_parsing_exception"));
    }
}
