//! Pairing engine for transaction-completion notifications
//!
//! This crate implements the thread-confined half of syncpoint:
//! - SynchronizationRegistry: ordered listener callbacks for one transaction
//! - Coordinator: the pending-stack / committing-queue pairing algorithm
//!
//! The split between a LIFO pending stack and a FIFO committing queue is the
//! contract that lets the coordinator tolerate duplicated lifecycle
//! delivery from a misbehaving caller; see the module docs in
//! [`coordinator`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod coordinator;
pub mod registry;

pub use coordinator::Coordinator;
pub use registry::SynchronizationRegistry;

// Re-export the seam traits from core for convenience
pub use syncpoint_core::{Synchronization, TransactionLifecycle};
