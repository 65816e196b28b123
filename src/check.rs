//! Presence check used by the `protocol-check` binary.
//!
//! The check answers one question: is a handler registered for a given
//! protocol right now. The answer maps to a process exit code, `0` when
//! present and `1` when absent.
//!
//! # Example
//!
//! ```
//! use protocol_registry::check::{check_protocol, CheckOutcome, DEFAULT_PROTOCOL};
//! use protocol_registry::handler::HandlerRegistry;
//!
//! let mut registry = HandlerRegistry::new();
//! assert_eq!(check_protocol(&registry, DEFAULT_PROTOCOL), CheckOutcome::Absent);
//!
//! registry.register(DEFAULT_PROTOCOL, |_: &str| {});
//! assert_eq!(check_protocol(&registry, DEFAULT_PROTOCOL).exit_code(), 0);
//! ```

use std::process::ExitCode;

use crate::handler::{global, HandlerRegistry};

/// Protocol the binary checks for.
pub const DEFAULT_PROTOCOL: &str = "http";

/// Result of a presence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// A handler is registered.
    Present,
    /// No handler is registered.
    Absent,
}

impl CheckOutcome {
    #[inline]
    fn from_present(present: bool) -> Self {
        if present {
            CheckOutcome::Present
        } else {
            CheckOutcome::Absent
        }
    }

    /// Whether the protocol was found.
    #[inline]
    pub fn is_present(self) -> bool {
        self == CheckOutcome::Present
    }

    /// Process exit code for this outcome.
    #[inline]
    pub fn exit_code(self) -> u8 {
        match self {
            CheckOutcome::Present => 0,
            CheckOutcome::Absent => 1,
        }
    }
}

impl From<CheckOutcome> for ExitCode {
    fn from(outcome: CheckOutcome) -> Self {
        ExitCode::from(outcome.exit_code())
    }
}

/// Check `registry` for a handler registered under `protocol`.
pub fn check_protocol(registry: &HandlerRegistry, protocol: &str) -> CheckOutcome {
    let outcome = CheckOutcome::from_present(registry.contains(protocol));
    tracing::debug!("Presence check for {:?}: {:?}", protocol, outcome);
    outcome
}

/// Check the global registry for a handler registered under `protocol`.
pub fn check_global(protocol: &str) -> CheckOutcome {
    global::with_registry(|registry| check_protocol(registry, protocol))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CheckOutcome::Present.exit_code(), 0);
        assert_eq!(CheckOutcome::Absent.exit_code(), 1);
        assert!(CheckOutcome::Present.is_present());
        assert!(!CheckOutcome::Absent.is_present());
    }

    #[test]
    fn test_empty_registry_is_absent() {
        let registry = HandlerRegistry::new();
        assert_eq!(
            check_protocol(&registry, DEFAULT_PROTOCOL),
            CheckOutcome::Absent
        );
    }

    #[test]
    fn test_other_protocol_does_not_satisfy_check() {
        let mut registry = HandlerRegistry::new();
        registry.register("ftp", |_: &str| {});

        assert_eq!(
            check_protocol(&registry, DEFAULT_PROTOCOL),
            CheckOutcome::Absent
        );
        assert_eq!(check_protocol(&registry, "ftp"), CheckOutcome::Present);
    }

    #[test]
    fn test_check_global() {
        assert_eq!(check_global("check-test-global"), CheckOutcome::Absent);
        global::register_handler("check-test-global", |_: &str| {});
        assert_eq!(check_global("check-test-global"), CheckOutcome::Present);
    }
}
