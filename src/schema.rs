//! Serializable snapshot of a registry.
//!
//! Handlers themselves cannot be serialized; the snapshot lists the
//! registered protocol identifiers only.
//!
//! # Example
//!
//! ```
//! use protocol_registry::handler::HandlerRegistry;
//!
//! let mut registry = HandlerRegistry::new();
//! registry.register("http", |_: &str| {});
//!
//! let json = registry.build_schema().to_json().unwrap();
//! assert_eq!(json, r#"{"protocols":["http"],"count":1}"#);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Registered protocols at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySchema {
    /// Protocol identifiers, sorted.
    pub protocols: Vec<String>,
    /// Number of registered protocols.
    pub count: usize,
}

impl RegistrySchema {
    /// Create a schema from a list of protocol identifiers.
    ///
    /// The list is sorted and deduplicated.
    pub fn new(mut protocols: Vec<String>) -> Self {
        protocols.sort();
        protocols.dedup();
        let count = protocols.len();
        Self { protocols, count }
    }

    /// Check whether `protocol` is listed.
    pub fn contains(&self, protocol: &str) -> bool {
        self.protocols
            .binary_search_by(|p| p.as_str().cmp(protocol))
            .is_ok()
    }

    /// Check if no protocol is listed.
    pub fn is_empty(&self) -> bool {
        self.protocols.is_empty()
    }

    /// Serialize to a single-line JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sorts_and_counts() {
        let schema = RegistrySchema::new(vec!["ws".into(), "ftp".into(), "ws".into()]);

        assert_eq!(schema.protocols, vec!["ftp", "ws"]);
        assert_eq!(schema.count, 2);
        assert!(schema.contains("ftp"));
        assert!(!schema.contains("http"));
    }

    #[test]
    fn test_empty_schema_json() {
        let schema = RegistrySchema::default();
        assert!(schema.is_empty());

        let parsed: serde_json::Value = serde_json::from_str(&schema.to_json().unwrap()).unwrap();
        assert!(parsed["protocols"].as_array().unwrap().is_empty());
        assert_eq!(parsed["count"], 0);
    }

    #[test]
    fn test_schema_json_fields() {
        let schema = RegistrySchema::new(vec!["http".into(), "".into()]);

        let parsed: serde_json::Value = serde_json::from_str(&schema.to_json().unwrap()).unwrap();
        assert_eq!(parsed["protocols"][0], "");
        assert_eq!(parsed["protocols"][1], "http");
        assert_eq!(parsed["count"], 2);
    }
}
