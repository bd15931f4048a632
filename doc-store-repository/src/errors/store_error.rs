//! Document store error types.
//!
//! This module defines the error taxonomy for document store operations.
//! Every operation surfaces its error to the caller; nothing is swallowed.

use thiserror::Error;

/// Errors that can occur during document store operations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The endpoint could not be assembled into a valid transport target.
    #[error("Connection error: {0}")]
    Connection(String),

    /// I/O failure while a request was in flight.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The engine rejected the request with a non-success status.
    #[error("Server error (status {status}): {reason}")]
    Server { status: u16, reason: String },

    /// A bulk write completed with one or more failed items.
    #[error("Partial failure: {0}")]
    PartialFailure(String),

    /// Validation error (e.g., empty index name or document id).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Failed to serialize a document body.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Failed to parse a response from the engine.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl StoreError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a server error from a response status and reason.
    pub fn server(status: u16, reason: impl Into<String>) -> Self {
        Self::Server {
            status,
            reason: reason.into(),
        }
    }

    /// Create a partial failure error.
    pub fn partial_failure(msg: impl Into<String>) -> Self {
        Self::PartialFailure(msg.into())
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// True when the engine answered with a 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Server { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_display() {
        let err = StoreError::server(404, "index_not_found_exception");
        assert_eq!(
            err.to_string(),
            "Server error (status 404): index_not_found_exception"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_is_not_found_only_matches_404() {
        assert!(!StoreError::server(500, "boom").is_not_found());
        assert!(!StoreError::transport("connection reset").is_not_found());
    }
}
