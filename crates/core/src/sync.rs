//! Listener and lifecycle seam traits.
//!
//! ## Design
//!
//! Listener dispatch uses dynamic dispatch over a two-method capability
//! trait: any type exposing `before_completion` and `after_completion` can be
//! registered, no hierarchy required. Listeners are thread-confined along
//! with the registry that owns them, so no `Send` bound is imposed.

use crate::error::{BoxError, Result};

/// Result type surfaced by listener callbacks.
///
/// Listeners may fail with any error type; the coordinator wraps the failure
/// into [`crate::Error::Listener`] with the dispatch phase attached.
pub type ListenerResult = std::result::Result<(), BoxError>;

/// A completion listener for one transaction instance.
///
/// Each registered listener receives `before_completion` once and then
/// `after_completion` once, in registration order, for the transaction it was
/// registered with. The one exception is the rollback-recovery path, where a
/// listener set may receive `after_completion(false)` without a preceding
/// `before_completion`.
pub trait Synchronization {
    /// Called before the transaction completes, while work may still be done
    /// in the transaction's context.
    fn before_completion(&mut self) -> ListenerResult;

    /// Called after the transaction completed. `success` is true for a
    /// commit, false for a rollback.
    fn after_completion(&mut self, success: bool) -> ListenerResult;
}

/// Lifecycle entry points driven by the external transaction manager.
///
/// Calls belonging to one logical transaction must all arrive on the same
/// thread. Implementations keep their mutable state confined to that thread.
pub trait TransactionLifecycle {
    /// Notification that a transaction has begun on the calling thread.
    fn after_begin(&mut self);

    /// Register `listener` with the currently open transaction.
    fn register_synchronization(&mut self, listener: Box<dyn Synchronization>) -> Result<()>;

    /// Notification that the open transaction is about to complete.
    fn before_completion(&mut self) -> Result<()>;

    /// Notification that a transaction completed, with its outcome.
    fn after_completion(&mut self, success: bool) -> Result<()>;
}
