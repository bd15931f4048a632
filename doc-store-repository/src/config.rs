//! Configuration types for the document store client.

use std::env;

use crate::errors::StoreError;

/// Default endpoint host.
const DEFAULT_HOST: &str = "localhost";

/// Default REST port of the engine.
const DEFAULT_PORT: u16 = 9200;

/// Connection settings for the document store endpoint.
///
/// Immutable once constructed; built at startup and passed by value into the
/// provider constructor. The wire protocol is plain HTTP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Host name or address of the engine's REST endpoint.
    pub host: String,
    /// TCP port of the REST endpoint.
    pub port: u16,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ConnectionConfig {
    /// Create a config for the given host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Load connection settings from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `DOC_STORE_HOST`: endpoint host (default: localhost)
    /// - `DOC_STORE_PORT`: endpoint port (default: 9200)
    pub fn from_env() -> Result<Self, StoreError> {
        let host = env::var("DOC_STORE_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("DOC_STORE_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|e| StoreError::validation(format!("Invalid DOC_STORE_PORT: {}", e)))?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    /// Render the endpoint URL.
    pub fn endpoint(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Facade-level limits for the `DocStoreClient`.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Maximum number of sub-requests allowed in a single bulk write.
    /// Set to None to disable the limit (not recommended for production).
    pub max_bulk_size: Option<usize>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_bulk_size: Some(1000),
        }
    }
}

impl StoreConfig {
    /// Create a config with no bulk size limit (use with caution).
    pub fn unlimited() -> Self {
        Self {
            max_bulk_size: None,
        }
    }

    /// Create a config with a custom bulk size limit.
    pub fn with_max_bulk_size(max_bulk_size: usize) -> Self {
        Self {
            max_bulk_size: Some(max_bulk_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = ConnectionConfig::default();
        assert_eq!(config.endpoint(), "http://localhost:9200");
    }

    #[test]
    fn test_explicit_endpoint() {
        let config = ConnectionConfig::new("search.internal", 9201);
        assert_eq!(config.endpoint(), "http://search.internal:9201");
    }

    #[test]
    fn test_store_config_limits() {
        assert_eq!(StoreConfig::default().max_bulk_size, Some(1000));
        assert_eq!(StoreConfig::unlimited().max_bulk_size, None);
        assert_eq!(StoreConfig::with_max_bulk_size(5).max_bulk_size, Some(5));
    }
}
