//! Canonical error types for coordinator operations.
//!
//! Every structural error propagates to the external transaction manager;
//! nothing here is retried or swallowed. Listener failures carry the
//! listener's own error as their source.

use crate::types::CompletionPhase;
use thiserror::Error;

/// Boxed error type surfaced by listener callbacks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// All coordinator errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A registration or completion notification arrived with no open
    /// transaction on the calling thread.
    #[error("no open transaction on this thread")]
    StackUnderflow,

    /// A successful completion was delivered on a thread where
    /// before-completion never ran.
    #[error("before-completion was never called")]
    PairingViolation,

    /// A registered listener failed during dispatch.
    #[error("synchronization failed during {phase}-completion")]
    Listener {
        /// Which dispatch pass the listener failed in.
        phase: CompletionPhase,
        /// The listener's own error.
        #[source]
        source: BoxError,
    },
}

/// Result type for coordinator operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error reports a caller protocol violation.
    ///
    /// Protocol violations indicate a bug in the transaction manager or the
    /// application, not in a registered listener.
    pub fn is_protocol_violation(&self) -> bool {
        matches!(self, Error::StackUnderflow | Error::PairingViolation)
    }

    /// Check if this error carries a listener failure.
    pub fn is_listener_failure(&self) -> bool {
        matches!(self, Error::Listener { .. })
    }

    /// Wrap a listener error for the given dispatch phase.
    pub fn listener(phase: CompletionPhase, source: BoxError) -> Self {
        Error::Listener { phase, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_stable() {
        assert_eq!(
            Error::StackUnderflow.to_string(),
            "no open transaction on this thread"
        );
        assert_eq!(
            Error::PairingViolation.to_string(),
            "before-completion was never called"
        );
    }

    #[test]
    fn listener_error_names_the_phase() {
        let err = Error::listener(CompletionPhase::Before, "boom".into());
        assert_eq!(
            err.to_string(),
            "synchronization failed during before-completion"
        );
        let err = Error::listener(CompletionPhase::After, "boom".into());
        assert_eq!(
            err.to_string(),
            "synchronization failed during after-completion"
        );
    }

    #[test]
    fn classification_helpers() {
        assert!(Error::StackUnderflow.is_protocol_violation());
        assert!(Error::PairingViolation.is_protocol_violation());
        let err = Error::listener(CompletionPhase::After, "boom".into());
        assert!(err.is_listener_failure());
        assert!(!err.is_protocol_violation());
    }

    #[test]
    fn listener_error_exposes_its_source() {
        use std::error::Error as _;
        let err = Error::listener(CompletionPhase::Before, "db gone".into());
        let source = err.source().expect("source");
        assert_eq!(source.to_string(), "db gone");
    }
}
