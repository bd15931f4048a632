//! Search query types.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

/// A predicate selecting documents within an index.
///
/// This is deliberately a small subset of the engine's query DSL: the facade
/// builds the wire representation, the engine defines matching and relevance
/// ordering.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryPredicate {
    /// Match every document in the index.
    MatchAll,
    /// Exact match on a field value.
    Term { field: String, value: Value },
    /// Analyzed full-text match on a field.
    Match { field: String, value: Value },
}

impl QueryPredicate {
    /// Predicate matching every document.
    pub fn match_all() -> Self {
        Self::MatchAll
    }

    /// Exact-match predicate for the given field and value.
    pub fn term(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Term {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Analyzed-match predicate for the given field and value.
    pub fn match_on(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Match {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// A search request against a single index.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// The index to search.
    pub index: String,
    /// The predicate documents must satisfy.
    pub predicate: QueryPredicate,
    /// Maximum number of hits to return; the engine's default applies when unset.
    pub limit: Option<usize>,
    /// Advisory bound on the request; does not guarantee server-side abort.
    pub timeout: Option<Duration>,
}

impl SearchRequest {
    /// Create a search request for the given index and predicate.
    pub fn new(index: impl Into<String>, predicate: QueryPredicate) -> Self {
        Self {
            index: index.into(),
            predicate,
            limit: None,
            timeout: None,
        }
    }

    /// Cap the number of returned hits.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Bound the request with an advisory timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// A single matching document returned from a search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    /// The document id.
    pub id: String,
    /// Relevance score assigned by the engine; absent for unscored results.
    pub score: Option<f64>,
    /// The stored document body.
    pub source: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request_builder() {
        let request = SearchRequest::new("users", QueryPredicate::term("name", "qinjiang1"))
            .with_limit(10)
            .with_timeout(Duration::from_secs(60));

        assert_eq!(request.index, "users");
        assert_eq!(request.limit, Some(10));
        assert_eq!(request.timeout, Some(Duration::from_secs(60)));
        assert_eq!(
            request.predicate,
            QueryPredicate::Term {
                field: "name".to_string(),
                value: Value::String("qinjiang1".to_string()),
            }
        );
    }

    #[test]
    fn test_search_request_defaults() {
        let request = SearchRequest::new("users", QueryPredicate::match_all());

        assert!(request.limit.is_none());
        assert!(request.timeout.is_none());
        assert_eq!(request.predicate, QueryPredicate::MatchAll);
    }
}
