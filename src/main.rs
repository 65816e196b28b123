//! `protocol-check` - exits `0` when an `"http"` handler is registered in
//! the global registry, `1` otherwise.
//!
//! Arguments are ignored and nothing is written to stdout. Logs go to
//! stderr, filtered by `RUST_LOG` (default `warn`).

use std::process::ExitCode;

use protocol_registry::check::{check_global, DEFAULT_PROTOCOL};
use protocol_registry::handler::global;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Another subscriber may already be installed; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    init_logging();

    let outcome = check_global(DEFAULT_PROTOCOL);
    if !outcome.is_present() {
        match global::snapshot().to_json() {
            Ok(json) => tracing::debug!("No handler for {:?}; registry: {}", DEFAULT_PROTOCOL, json),
            Err(e) => tracing::error!("Failed to serialize registry snapshot: {}", e),
        }
    }

    outcome.into()
}
