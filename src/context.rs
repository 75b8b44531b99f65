//! Thread-local execution context for the coordinator.
//!
//! The external transaction manager sees one logical coordinator shared by
//! every thread, while all mutable state stays confined to the thread the
//! notifications arrive on. [`Context`] is that surface: a zero-sized handle
//! whose lifecycle methods dispatch to a per-thread [`Coordinator`], created
//! lazily on first use and torn down with [`Context::destroy`].
//!
//! Every handle on one thread observes the same per-thread transaction
//! sequence. Handles on different threads never interact; there is no shared
//! mutable state and no locking.

use std::cell::RefCell;
use syncpoint_coordinator::Coordinator;
use syncpoint_core::{Result, Synchronization, TransactionLifecycle};
use tracing::debug;

thread_local! {
    static COORDINATOR: RefCell<Option<Coordinator>> = const { RefCell::new(None) };
}

fn with_coordinator<T>(f: impl FnOnce(&mut Coordinator) -> T) -> T {
    COORDINATOR.with(|cell| f(cell.borrow_mut().get_or_insert_with(Coordinator::new)))
}

/// Handle to the calling thread's transaction coordinator.
///
/// The per-thread state persists for the life of the thread, so pooled
/// threads reuse their coordinator across many transactions. Call
/// [`Context::destroy`] when an execution context is being retired.
#[derive(Debug, Clone, Copy, Default)]
pub struct Context;

impl Context {
    /// Create a handle.
    ///
    /// Cheap and stateless; the coordinator itself materializes on the first
    /// lifecycle call on each thread.
    pub fn new() -> Self {
        Context
    }

    /// Notification that a transaction has begun on the calling thread.
    pub fn after_begin(&self) {
        with_coordinator(|coordinator| coordinator.after_begin());
    }

    /// Register `listener` with the transaction currently open on the
    /// calling thread.
    ///
    /// Fails with [`Error::StackUnderflow`](syncpoint_core::Error) when no
    /// transaction is open.
    pub fn register_synchronization(&self, listener: Box<dyn Synchronization>) -> Result<()> {
        with_coordinator(|coordinator| coordinator.register_synchronization(listener))
    }

    /// Notification that the open transaction is about to complete.
    pub fn before_completion(&self) -> Result<()> {
        with_coordinator(|coordinator| coordinator.before_completion())
    }

    /// Notification that a transaction completed, with its outcome.
    pub fn after_completion(&self, success: bool) -> Result<()> {
        with_coordinator(|coordinator| coordinator.after_completion(success))
    }

    /// Release the calling thread's coordinator state.
    ///
    /// Safe to call with no transaction open. Unfinished transactions are
    /// dropped; the coordinator logs a warning when that happens.
    pub fn destroy(&self) {
        debug!("destroy");
        COORDINATOR.with(|cell| {
            cell.borrow_mut().take();
        });
    }

    /// Check if the calling thread has no transaction in flight.
    pub fn is_idle(&self) -> bool {
        COORDINATOR.with(|cell| cell.borrow().as_ref().map_or(true, Coordinator::is_idle))
    }
}

impl TransactionLifecycle for Context {
    fn after_begin(&mut self) {
        Context::after_begin(self);
    }

    fn register_synchronization(&mut self, listener: Box<dyn Synchronization>) -> Result<()> {
        Context::register_synchronization(self, listener)
    }

    fn before_completion(&mut self) -> Result<()> {
        Context::before_completion(self)
    }

    fn after_completion(&mut self, success: bool) -> Result<()> {
        Context::after_completion(self, success)
    }
}
