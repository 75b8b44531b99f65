//! Convenient imports for syncpoint.
//!
//! This module re-exports the most commonly used types so you can get
//! started with a single import:
//!
//! ```ignore
//! use syncpoint::prelude::*;
//!
//! let ctx = Context::new();
//! ctx.after_begin();
//! ```

// Main entry points
pub use crate::{Context, Coordinator};

// Error handling
pub use crate::{Error, Result};

// Listener seam
pub use crate::{ListenerResult, Synchronization, TransactionLifecycle};

// Lifecycle types
pub use crate::{CompletionPhase, RegistryState};
