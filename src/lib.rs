//! # Syncpoint
//!
//! Transaction-completion synchronization coordinator.
//!
//! Syncpoint receives coarse-grained transaction lifecycle notifications
//! (begin, before-completion, after-completion) from an external transaction
//! manager and fans each one out, in a well-defined order, to the listeners
//! that registered interest in that transaction instance. The notification
//! stream is not assumed to be well-behaved: some containers re-deliver
//! lifecycle callbacks, and the coordinator reconstructs correct
//! before/after pairing from the duplicated stream using only thread-confined
//! state, with no locks.
//!
//! ## Quick Start
//!
//! ```
//! use syncpoint::prelude::*;
//!
//! struct CacheFlush;
//!
//! impl Synchronization for CacheFlush {
//!     fn before_completion(&mut self) -> ListenerResult {
//!         // flush pending work into the transaction
//!         Ok(())
//!     }
//!     fn after_completion(&mut self, success: bool) -> ListenerResult {
//!         if !success {
//!             // discard what the rollback invalidated
//!         }
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> syncpoint::Result<()> {
//! let ctx = Context::new();
//! ctx.after_begin();
//! ctx.register_synchronization(Box::new(CacheFlush))?;
//! ctx.before_completion()?;
//! ctx.after_completion(true)?;
//! ctx.destroy();
//! # Ok(())
//! # }
//! ```
//!
//! ## Layers
//!
//! - [`Context`] - thread-local facade; one logical coordinator shared by
//!   every thread, all mutable state confined to the calling thread
//! - [`Coordinator`] - the explicit per-thread pairing engine, for callers
//!   that manage their own execution contexts
//! - [`Synchronization`] - the listener capability trait
//! - [`TransactionLifecycle`] - the entry-point seam the transaction manager
//!   drives

#![warn(missing_docs)]

mod context;

pub mod prelude;

// Re-export main entry points
pub use context::Context;

// Error handling
pub use syncpoint_core::{BoxError, Error, ListenerResult, Result};

// Traits and lifecycle types
pub use syncpoint_core::{CompletionPhase, RegistryState, Synchronization, TransactionLifecycle};

// Pairing engine
pub use syncpoint_coordinator::{Coordinator, SynchronizationRegistry};
