//! Core vocabulary for the syncpoint coordinator
//!
//! This crate defines the types shared by every other member:
//! - `Synchronization`: the listener capability trait
//! - `TransactionLifecycle`: the entry-point seam driven by the external
//!   transaction manager
//! - `CompletionPhase` / `RegistryState`: lifecycle enums
//! - `Error` / `Result`: the canonical error types

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod sync;
pub mod types;

pub use error::{BoxError, Error, Result};
pub use sync::{ListenerResult, Synchronization, TransactionLifecycle};
pub use types::{CompletionPhase, RegistryState};
