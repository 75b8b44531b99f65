//! Thread-confined pairing of begin/before/after notifications
//!
//! Some containers re-deliver lifecycle callbacks, effectively registering a
//! duplicate notification stream for the same logical transaction. The
//! coordinator keeps two structures per thread to recover correct pairing
//! from that stream:
//!
//! ```text
//! after_begin()          push new registry        -> pending (LIFO)
//! before_completion()    pop pending top, dispatch, append -> committing (FIFO)
//! after_completion(s)    pop committing front, dispatch(s)
//!                        rollback with nothing committing: pop pending top,
//!                        dispatch(false) directly
//! ```
//!
//! Pending pairing is LIFO: under stacked begins without intervening
//! completions, the most recently begun transaction is the innermost and
//! finalizes first. Committing pairing is FIFO: registries resolve in the
//! order their before-completion ran, keeping each registry's before/after
//! correspondence consistent across accumulated duplicates.

use crate::registry::SynchronizationRegistry;
use std::collections::VecDeque;
use syncpoint_core::{Error, Result, Synchronization, TransactionLifecycle};
use tracing::debug;

/// Pairs completion notifications with the registries they belong to.
///
/// A coordinator is owned by exactly one thread; every method takes
/// `&mut self`, so confinement is enforced by ownership rather than locks.
/// Sequences on different threads are fully independent.
///
/// # Lifecycle
///
/// Each registry moves `Pending → Committing → Completed`, or directly
/// `Pending → Completed` when a rollback arrives with an empty committing
/// queue (the duplicate-delivery recovery path).
pub struct Coordinator {
    /// Registries awaiting before-completion, most recent begin at the back.
    pending: Vec<SynchronizationRegistry>,
    /// Registries past before-completion, in the order it ran for them.
    committing: VecDeque<SynchronizationRegistry>,
}

impl Coordinator {
    /// Create a coordinator with no transaction in flight.
    pub fn new() -> Self {
        Coordinator {
            pending: Vec::new(),
            committing: VecDeque::new(),
        }
    }

    /// Notification that a transaction has begun on this thread.
    ///
    /// Opens a fresh registry at the top of the pending stack.
    pub fn after_begin(&mut self) {
        debug!(pending = self.pending.len(), "after_begin");
        self.pending.push(SynchronizationRegistry::new());
    }

    /// Register `listener` with the currently open transaction.
    ///
    /// Fails with [`Error::StackUnderflow`] when no transaction is open on
    /// this thread.
    pub fn register_synchronization(&mut self, listener: Box<dyn Synchronization>) -> Result<()> {
        let registry = self.pending.last_mut().ok_or(Error::StackUnderflow)?;
        registry.register(listener);
        Ok(())
    }

    /// Notification that the open transaction is about to complete.
    ///
    /// Pops the most recently begun registry, runs its before-completion
    /// pass, and appends it to the committing queue. Fails with
    /// [`Error::StackUnderflow`] when no transaction is open. A listener
    /// failure propagates and the registry is dropped without entering the
    /// committing queue, so its after-completion will never run.
    pub fn before_completion(&mut self) -> Result<()> {
        debug!(pending = self.pending.len(), "before_completion");
        let mut registry = self.pending.pop().ok_or(Error::StackUnderflow)?;
        registry.run_before_completion()?;
        self.committing.push_back(registry);
        Ok(())
    }

    /// Notification that a transaction completed, with its outcome.
    ///
    /// The registry whose before-completion ran first resolves first. When a
    /// rollback arrives with nothing committing, the most recently begun
    /// pending registry completes directly, skipping before-completion.
    /// A commit outcome with nothing committing fails with
    /// [`Error::PairingViolation`]; the rollback recovery path fails with
    /// [`Error::StackUnderflow`] when the pending stack is empty too.
    pub fn after_completion(&mut self, success: bool) -> Result<()> {
        debug!(
            success,
            committing = self.committing.len(),
            "after_completion"
        );
        if let Some(mut registry) = self.committing.pop_front() {
            return registry.run_after_completion(success);
        }
        if success {
            return Err(Error::PairingViolation);
        }
        // Rollback delivered without a matching before-completion on this
        // call chain: complete the most recently begun registry directly.
        let mut registry = self.pending.pop().ok_or(Error::StackUnderflow)?;
        registry.run_after_completion(false)
    }

    /// Number of registries awaiting before-completion.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Number of registries awaiting after-completion.
    pub fn committing_len(&self) -> usize {
        self.committing.len()
    }

    /// Check if no transaction is in flight on this thread.
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty() && self.committing.is_empty()
    }
}

impl TransactionLifecycle for Coordinator {
    fn after_begin(&mut self) {
        Coordinator::after_begin(self);
    }

    fn register_synchronization(&mut self, listener: Box<dyn Synchronization>) -> Result<()> {
        Coordinator::register_synchronization(self, listener)
    }

    fn before_completion(&mut self) -> Result<()> {
        Coordinator::before_completion(self)
    }

    fn after_completion(&mut self, success: bool) -> Result<()> {
        Coordinator::after_completion(self, success)
    }
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Coordinator {
    fn drop(&mut self) {
        // A coordinator retired with unfinished transactions means the
        // manager leaked or mis-paired a sequence.
        if !self.is_idle() {
            tracing::warn!(
                pending = self.pending.len(),
                committing = self.committing.len(),
                "coordinator dropped with unfinished transactions"
            );
        }
    }
}

impl std::fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coordinator")
            .field("pending", &self.pending.len())
            .field("committing", &self.committing.len())
            .finish()
    }
}
