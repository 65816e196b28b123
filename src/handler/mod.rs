//! Handler module - protocol handlers and their registries.
//!
//! Provides:
//! - [`Handler`] - anything invoked with a protocol identifier
//! - [`HandlerRegistry`] - maps protocol identifiers to handlers
//! - [`global`] - the process-wide registry instance
//!
//! # Example
//!
//! ```
//! use protocol_registry::handler::{global, HandlerRegistry};
//!
//! // Injected registry
//! let mut registry = HandlerRegistry::new();
//! registry.register("http", |_protocol: &str| {});
//! assert!(registry.contains("http"));
//!
//! // Process-wide registry
//! global::register_handler("doc-example", |_protocol: &str| {});
//! assert!(global::contains("doc-example"));
//! ```

pub mod global;
mod registry;

pub use registry::{FnHandler, Handler, HandlerRegistry};
