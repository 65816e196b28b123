//! Handler registry mapping protocol identifiers to handlers.
//!
//! Keys are compared by content and any string is accepted, including the
//! empty string. Registering an existing key replaces its handler (last
//! write wins).
//!
//! # Example
//!
//! ```
//! use protocol_registry::handler::HandlerRegistry;
//!
//! let mut registry = HandlerRegistry::new();
//!
//! registry.register("http", |protocol: &str| {
//!     tracing::info!("handling {}", protocol);
//! });
//!
//! assert!(registry.contains("http"));
//! assert!(!registry.contains("ftp"));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{RegistryError, Result};
use crate::schema::RegistrySchema;

/// Trait for protocol handlers.
///
/// A handler is invoked with the protocol identifier it was registered
/// under and returns nothing.
pub trait Handler: Send + Sync + 'static {
    /// Handle the given protocol.
    fn call(&self, protocol: &str);
}

/// Wrapper that adapts a function or closure into a [`Handler`].
pub struct FnHandler<F>
where
    F: Fn(&str) + Send + Sync + 'static,
{
    handler: F,
}

impl<F> FnHandler<F>
where
    F: Fn(&str) + Send + Sync + 'static,
{
    /// Create a new function handler.
    pub fn new(handler: F) -> Self {
        Self { handler }
    }
}

impl<F> Handler for FnHandler<F>
where
    F: Fn(&str) + Send + Sync + 'static,
{
    #[inline]
    fn call(&self, protocol: &str) {
        (self.handler)(protocol)
    }
}

/// Registry mapping protocol identifiers to handlers.
///
/// Handlers are stored behind [`Arc`], so a handler returned by
/// [`get_handler`](Self::get_handler) stays usable after the entry is
/// replaced or removed.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    /// Handlers by protocol identifier.
    handlers: HashMap<String, Arc<dyn Handler>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler function for a protocol.
    ///
    /// Replaces any handler already registered under `protocol` and returns
    /// the replaced one.
    pub fn register<F>(&mut self, protocol: &str, handler: F) -> Option<Arc<dyn Handler>>
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.register_handler(protocol, Arc::new(FnHandler::new(handler)))
    }

    /// Register an already type-erased handler for a protocol.
    pub fn register_handler(
        &mut self,
        protocol: &str,
        handler: Arc<dyn Handler>,
    ) -> Option<Arc<dyn Handler>> {
        let previous = self.handlers.insert(protocol.to_string(), handler);
        if previous.is_some() {
            tracing::debug!("Replaced handler for protocol {:?}", protocol);
        } else {
            tracing::debug!("Registered handler for protocol {:?}", protocol);
        }
        previous
    }

    /// Remove the handler for a protocol, returning it if present.
    pub fn unregister(&mut self, protocol: &str) -> Option<Arc<dyn Handler>> {
        let removed = self.handlers.remove(protocol);
        if removed.is_some() {
            tracing::debug!("Unregistered handler for protocol {:?}", protocol);
        }
        removed
    }

    /// Check whether a handler is registered for `protocol`.
    #[inline]
    pub fn contains(&self, protocol: &str) -> bool {
        self.handlers.contains_key(protocol)
    }

    /// Get the handler currently registered for `protocol`.
    pub fn get_handler(&self, protocol: &str) -> Option<Arc<dyn Handler>> {
        self.handlers.get(protocol).cloned()
    }

    /// Invoke the handler registered for `protocol`.
    ///
    /// The handler receives `protocol` as its argument.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownProtocol`] if nothing is registered.
    pub fn dispatch(&self, protocol: &str) -> Result<()> {
        let handler = self.get_handler(protocol).ok_or_else(|| {
            tracing::warn!("No handler registered for protocol {:?}", protocol);
            RegistryError::UnknownProtocol(protocol.to_string())
        })?;

        handler.call(protocol);
        Ok(())
    }

    /// Registered protocol identifiers, sorted.
    pub fn protocols(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered protocols.
    #[inline]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if no protocol is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Build a serializable snapshot of the registered protocols.
    pub fn build_schema(&self) -> RegistrySchema {
        RegistrySchema::new(self.protocols())
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("protocols", &self.protocols())
            .finish()
    }
}
