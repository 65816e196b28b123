//! Error types for protocol-registry.

use thiserror::Error;

/// Main error type for registry operations.
///
/// Registration and presence checks never fail; only dispatch and
/// schema serialization produce errors.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No handler registered for the given protocol.
    #[error("No handler registered for protocol: {0:?}")]
    UnknownProtocol(String),

    /// JSON serialization/deserialization error (schema snapshots).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using RegistryError.
pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_protocol_message() {
        let err = RegistryError::UnknownProtocol("gopher".to_string());
        assert_eq!(
            err.to_string(),
            "No handler registered for protocol: \"gopher\""
        );
    }

    #[test]
    fn test_json_error_from() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: RegistryError = json_err.into();
        assert!(matches!(err, RegistryError::Json(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
