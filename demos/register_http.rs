//! Register HTTP - a collaborator wiring itself in before the check.
//!
//! This example demonstrates:
//! - Registering an `"http"` handler in the global registry
//! - Running the same presence check as the `protocol-check` binary
//! - Returning the check outcome as the process exit code
//!
//! ```text
//! $ cargo run --example register_http; echo $?
//! 0
//! ```

use std::process::ExitCode;

use protocol_registry::check::{check_global, DEFAULT_PROTOCOL};
use protocol_registry::handler::global;

/// Handler for the "http" protocol.
fn http_handler(protocol: &str) {
    tracing::info!("{} handler invoked", protocol);
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    // Register before the check runs
    global::register_handler(DEFAULT_PROTOCOL, http_handler);

    check_global(DEFAULT_PROTOCOL).into()
}
