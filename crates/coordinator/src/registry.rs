//! Synchronization registry: the listener set for one transaction instance
//!
//! ## Design
//!
//! A registry owns its listeners in registration order. Duplicates are
//! allowed and nothing is ever reordered or deduplicated: a listener
//! registered twice is notified twice.
//!
//! Failure policy: **immediate-abort**. The first listener error stops the
//! dispatch pass and propagates with the phase attached; listeners that
//! already ran are not revisited and listeners after the failing one are not
//! invoked.

use syncpoint_core::{CompletionPhase, Error, RegistryState, Result, Synchronization};

/// Ordered collection of listener callbacks for one transaction instance.
///
/// Created when a transaction begins, fed registrations while the
/// transaction is open, and consumed by the two dispatch passes. A registry
/// is owned by exactly one thread and moves between the coordinator's
/// structures by value.
pub struct SynchronizationRegistry {
    /// Listeners in registration order.
    listeners: Vec<Box<dyn Synchronization>>,
    state: RegistryState,
}

impl SynchronizationRegistry {
    /// Create an empty registry in the `Pending` state.
    pub fn new() -> Self {
        SynchronizationRegistry {
            listeners: Vec::new(),
            state: RegistryState::Pending,
        }
    }

    /// Append `listener` to the registration order.
    pub fn register(&mut self, listener: Box<dyn Synchronization>) {
        self.listeners.push(listener);
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Check if no listeners are registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RegistryState {
        self.state
    }

    /// Invoke every listener's `before_completion` in registration order.
    ///
    /// On success the registry moves to `Committing`. On a listener failure
    /// the error propagates immediately and the registry stays `Pending`.
    pub fn run_before_completion(&mut self) -> Result<()> {
        for listener in &mut self.listeners {
            listener
                .before_completion()
                .map_err(|source| Error::listener(CompletionPhase::Before, source))?;
        }
        self.state = RegistryState::Committing;
        Ok(())
    }

    /// Invoke every listener's `after_completion` in registration order,
    /// passing the transaction outcome through.
    ///
    /// On success the registry moves to `Completed`. On a listener failure
    /// the error propagates immediately.
    pub fn run_after_completion(&mut self, success: bool) -> Result<()> {
        for listener in &mut self.listeners {
            listener
                .after_completion(success)
                .map_err(|source| Error::listener(CompletionPhase::After, source))?;
        }
        self.state = RegistryState::Completed;
        Ok(())
    }
}

impl Default for SynchronizationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SynchronizationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SynchronizationRegistry")
            .field("listeners", &self.listeners.len())
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use syncpoint_core::ListenerResult;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Call {
        Before(usize),
        After(usize, bool),
    }

    struct Recorder {
        id: usize,
        log: Rc<RefCell<Vec<Call>>>,
        fail_before: bool,
    }

    impl Recorder {
        fn new(id: usize, log: &Rc<RefCell<Vec<Call>>>) -> Box<Self> {
            Box::new(Recorder {
                id,
                log: Rc::clone(log),
                fail_before: false,
            })
        }

        fn failing_before(id: usize, log: &Rc<RefCell<Vec<Call>>>) -> Box<Self> {
            Box::new(Recorder {
                id,
                log: Rc::clone(log),
                fail_before: true,
            })
        }
    }

    impl Synchronization for Recorder {
        fn before_completion(&mut self) -> ListenerResult {
            self.log.borrow_mut().push(Call::Before(self.id));
            if self.fail_before {
                return Err(format!("listener {} refused", self.id).into());
            }
            Ok(())
        }

        fn after_completion(&mut self, success: bool) -> ListenerResult {
            self.log.borrow_mut().push(Call::After(self.id, success));
            Ok(())
        }
    }

    // ===== Registration Tests =====

    #[test]
    fn new_registry_is_empty_and_pending() {
        let registry = SynchronizationRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.state().is_pending());
    }

    #[test]
    fn registration_preserves_order_and_duplicates() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = SynchronizationRegistry::new();
        registry.register(Recorder::new(0, &log));
        registry.register(Recorder::new(1, &log));
        registry.register(Recorder::new(0, &log));
        assert_eq!(registry.len(), 3);

        registry.run_before_completion().unwrap();
        assert_eq!(
            *log.borrow(),
            vec![Call::Before(0), Call::Before(1), Call::Before(0)]
        );
    }

    // ===== Dispatch Tests =====

    #[test]
    fn before_completion_moves_to_committing() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = SynchronizationRegistry::new();
        registry.register(Recorder::new(7, &log));

        registry.run_before_completion().unwrap();
        assert!(registry.state().is_committing());
    }

    #[test]
    fn after_completion_passes_outcome_and_completes() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = SynchronizationRegistry::new();
        registry.register(Recorder::new(1, &log));
        registry.register(Recorder::new(2, &log));

        registry.run_after_completion(false).unwrap();
        assert_eq!(
            *log.borrow(),
            vec![Call::After(1, false), Call::After(2, false)]
        );
        assert!(registry.state().is_completed());
    }

    #[test]
    fn first_failure_aborts_dispatch() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = SynchronizationRegistry::new();
        registry.register(Recorder::new(0, &log));
        registry.register(Recorder::failing_before(1, &log));
        registry.register(Recorder::new(2, &log));

        let err = registry.run_before_completion().unwrap_err();
        assert!(err.is_listener_failure());
        // listener 2 never ran, and the registry never left Pending
        assert_eq!(*log.borrow(), vec![Call::Before(0), Call::Before(1)]);
        assert!(registry.state().is_pending());
    }

    #[test]
    fn empty_registry_dispatch_is_a_noop() {
        let mut registry = SynchronizationRegistry::new();
        registry.run_before_completion().unwrap();
        registry.run_after_completion(true).unwrap();
        assert!(registry.state().is_completed());
    }
}
