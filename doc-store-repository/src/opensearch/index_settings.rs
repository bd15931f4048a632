//! Index settings applied when the client creates an index.

use serde_json::{json, Value};

/// Settings body sent with index creation.
///
/// Field mappings are left to the engine's dynamic mapping; callers that
/// need explicit mappings go through `create_index_with_body`.
pub fn default_index_settings() -> Value {
    json!({
        "settings": {
            "number_of_shards": 1,
            "number_of_replicas": 1
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_settings_structure() {
        let settings = default_index_settings();

        assert!(settings["settings"]["number_of_shards"].is_number());
        assert!(settings["settings"]["number_of_replicas"].is_number());

        // No mappings block: dynamic mapping is the contract here.
        assert!(settings.get("mappings").is_none());
    }
}
