//! OpenSearch request body builders.
//!
//! This module provides functions to build search request bodies from a
//! `SearchRequest`. Relevance ordering is the engine's concern; these
//! builders only shape the wire representation.

use serde_json::{json, Map, Value};

use doc_store_shared::{QueryPredicate, SearchRequest};

/// Build a search request body from a `SearchRequest`.
///
/// The body carries the query clause, an optional `size` cap, and an
/// optional advisory `timeout` in milliseconds.
pub fn build_search_body(request: &SearchRequest) -> Value {
    let mut body = Map::new();
    body.insert("query".to_string(), build_predicate(&request.predicate));
    if let Some(limit) = request.limit {
        body.insert("size".to_string(), json!(limit));
    }
    if let Some(timeout) = request.timeout {
        body.insert("timeout".to_string(), json!(format!("{}ms", timeout.as_millis())));
    }
    Value::Object(body)
}

/// Build the query clause for a predicate.
fn build_predicate(predicate: &QueryPredicate) -> Value {
    match predicate {
        QueryPredicate::MatchAll => json!({ "match_all": {} }),
        QueryPredicate::Term { field, value } => field_clause("term", field, value),
        QueryPredicate::Match { field, value } => field_clause("match", field, value),
    }
}

/// Build a single-field clause like `{"term": {"name": "qinjiang1"}}`.
fn field_clause(kind: &str, field: &str, value: &Value) -> Value {
    let mut inner = Map::new();
    inner.insert(field.to_string(), value.clone());
    let mut outer = Map::new();
    outer.insert(kind.to_string(), Value::Object(inner));
    Value::Object(outer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_term_query_body() {
        let request = SearchRequest::new("users", QueryPredicate::term("name", "qinjiang1"));
        let body = build_search_body(&request);

        assert_eq!(body["query"]["term"]["name"], "qinjiang1");
        assert!(body.get("size").is_none());
        assert!(body.get("timeout").is_none());
    }

    #[test]
    fn test_match_all_body_with_limit_and_timeout() {
        let request = SearchRequest::new("users", QueryPredicate::match_all())
            .with_limit(20)
            .with_timeout(Duration::from_secs(60));
        let body = build_search_body(&request);

        assert!(body["query"]["match_all"].is_object());
        assert_eq!(body["size"], 20);
        assert_eq!(body["timeout"], "60000ms");
    }

    #[test]
    fn test_match_query_body() {
        let request = SearchRequest::new("users", QueryPredicate::match_on("name", "BY"));
        let body = build_search_body(&request);

        assert_eq!(body["query"]["match"]["name"], "BY");
    }

    #[test]
    fn test_non_string_term_value() {
        let request = SearchRequest::new("users", QueryPredicate::term("age", 25));
        let body = build_search_body(&request);

        assert_eq!(body["query"]["term"]["age"], 25);
    }
}
