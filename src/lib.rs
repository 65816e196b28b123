//! # protocol-registry
//!
//! Registry mapping protocol identifiers (such as `"http"`) to handlers.
//!
//! A handler is any callable invoked with the protocol identifier it was
//! registered under. Registering an identifier twice keeps the most recent
//! handler.
//!
//! ## Registries
//!
//! - [`HandlerRegistry`] - a plain value, passed to whoever needs it
//! - [`handler::global`] - one process-wide instance behind a lock
//!
//! ## Example
//!
//! ```
//! use protocol_registry::check::{check_protocol, CheckOutcome};
//! use protocol_registry::RegistryBuilder;
//!
//! let registry = RegistryBuilder::new()
//!     .handle("http", |protocol: &str| {
//!         tracing::info!("serving {}", protocol);
//!     })
//!     .build();
//!
//! assert_eq!(check_protocol(&registry, "http"), CheckOutcome::Present);
//! registry.dispatch("http").unwrap();
//! ```

pub mod check;
pub mod error;
pub mod handler;
pub mod schema;

mod builder;

pub use builder::RegistryBuilder;
pub use check::CheckOutcome;
pub use error::RegistryError;
pub use handler::{Handler, HandlerRegistry};
