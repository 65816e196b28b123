//! Dispatch - an injected registry with several protocols.
//!
//! This example demonstrates:
//! - Building a registry with the fluent API
//! - Replacing a handler (last registration wins)
//! - Dispatching by protocol name and handling an unknown protocol

use std::sync::Arc;

use protocol_registry::{Handler, RegistryBuilder, RegistryError};

/// Handler implemented on a type rather than a closure.
struct Banner {
    text: &'static str,
}

impl Handler for Banner {
    fn call(&self, protocol: &str) {
        tracing::info!("[{}] {}", protocol, self.text);
    }
}

fn main() -> Result<(), RegistryError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let registry = RegistryBuilder::new()
        .handle("http", |p: &str| tracing::info!("old {} handler", p))
        .handle_shared("http", Arc::new(Banner { text: "plain text transfer" }))
        .handle("ftp", |p: &str| tracing::info!("{} handler", p))
        .build();

    tracing::info!("registry: {}", registry.build_schema().to_json()?);

    registry.dispatch("http")?;
    registry.dispatch("ftp")?;

    if let Err(e) = registry.dispatch("gopher") {
        tracing::warn!("{}", e);
    }

    Ok(())
}
