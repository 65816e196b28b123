//! Process-wide handler registry.
//!
//! A single [`HandlerRegistry`] created lazily on first access and kept for
//! the lifetime of the process. Collaborators register here before the
//! presence check runs.
//!
//! Readers share the lock; registration takes it exclusively. Handlers are
//! invoked after the lock is released, so a handler may register further
//! handlers.

use std::sync::{Arc, LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{Handler, HandlerRegistry};
use crate::error::{RegistryError, Result};
use crate::schema::RegistrySchema;

static GLOBAL_REGISTRY: LazyLock<RwLock<HandlerRegistry>> =
    LazyLock::new(|| RwLock::new(HandlerRegistry::new()));

// A panicking handler never runs under the lock, and map updates are a
// single insert/remove, so a poisoned guard still holds a consistent map.
fn read() -> RwLockReadGuard<'static, HandlerRegistry> {
    GLOBAL_REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, HandlerRegistry> {
    GLOBAL_REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Register a handler function for a protocol in the global registry.
///
/// Returns the handler it replaced, if any.
pub fn register_handler<F>(protocol: &str, handler: F) -> Option<Arc<dyn Handler>>
where
    F: Fn(&str) + Send + Sync + 'static,
{
    write().register(protocol, handler)
}

/// Register an already type-erased handler in the global registry.
pub fn register_shared(protocol: &str, handler: Arc<dyn Handler>) -> Option<Arc<dyn Handler>> {
    write().register_handler(protocol, handler)
}

/// Remove a protocol from the global registry.
pub fn unregister(protocol: &str) -> Option<Arc<dyn Handler>> {
    write().unregister(protocol)
}

/// Check whether the global registry has a handler for `protocol`.
pub fn contains(protocol: &str) -> bool {
    read().contains(protocol)
}

/// Get the handler the global registry holds for `protocol`.
pub fn get_handler(protocol: &str) -> Option<Arc<dyn Handler>> {
    read().get_handler(protocol)
}

/// Invoke the globally registered handler for `protocol`.
///
/// # Errors
///
/// Returns [`RegistryError::UnknownProtocol`] if nothing is registered.
pub fn dispatch(protocol: &str) -> Result<()> {
    let handler = get_handler(protocol).ok_or_else(|| {
        tracing::warn!("No global handler registered for protocol {:?}", protocol);
        RegistryError::UnknownProtocol(protocol.to_string())
    })?;

    handler.call(protocol);
    Ok(())
}

/// Protocols registered globally, sorted.
pub fn protocols() -> Vec<String> {
    read().protocols()
}

/// Snapshot of the global registry.
pub fn snapshot() -> RegistrySchema {
    read().build_schema()
}

/// Run `f` with shared access to the global registry.
///
/// The read lock is held for the duration of `f`; do not register from
/// inside it.
pub fn with_registry<R>(f: impl FnOnce(&HandlerRegistry) -> R) -> R {
    f(&read())
}

/// Merge every entry of `registry` into the global registry.
///
/// Entries already present globally are replaced.
pub fn install(registry: &HandlerRegistry) {
    let mut global = write();
    for protocol in registry.protocols() {
        if let Some(handler) = registry.get_handler(&protocol) {
            global.register_handler(&protocol, handler);
        }
    }
}
