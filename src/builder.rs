//! Fluent builder for populating a registry.
//!
//! # Example
//!
//! ```
//! use protocol_registry::RegistryBuilder;
//!
//! let registry = RegistryBuilder::new()
//!     .handle("http", |_: &str| {})
//!     .handle("ftp", |_: &str| {})
//!     .build();
//!
//! assert_eq!(registry.protocols(), vec!["ftp", "http"]);
//! ```

use std::sync::Arc;

use crate::handler::{global, Handler, HandlerRegistry};

/// Builder for configuring a [`HandlerRegistry`].
///
/// Registrations apply in call order, so a later `handle` for the same
/// protocol replaces an earlier one.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: HandlerRegistry,
}

impl RegistryBuilder {
    /// Create a new builder with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler function for a protocol.
    pub fn handle<F>(mut self, protocol: &str, handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.registry.register(protocol, handler);
        self
    }

    /// Register an already type-erased handler for a protocol.
    pub fn handle_shared(mut self, protocol: &str, handler: Arc<dyn Handler>) -> Self {
        self.registry.register_handler(protocol, handler);
        self
    }

    /// Finish and return the registry.
    pub fn build(self) -> HandlerRegistry {
        self.registry
    }

    /// Merge the configured handlers into the global registry.
    pub fn install_global(self) {
        tracing::debug!(
            "Installing {} handler(s) into the global registry",
            self.registry.len()
        );
        global::install(&self.registry);
    }
}
