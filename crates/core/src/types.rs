//! Lifecycle enums for registries and listener dispatch.

/// Which listener dispatch pass an operation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionPhase {
    /// The before-completion pass, run while the transaction may still abort.
    Before,
    /// The after-completion pass, run once the outcome is known.
    After,
}

impl CompletionPhase {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionPhase::Before => "before",
            CompletionPhase::After => "after",
        }
    }
}

impl std::fmt::Display for CompletionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle state of a synchronization registry.
///
/// A registry normally moves `Pending → Committing → Completed`. The direct
/// `Pending → Completed` edge is taken only when a rollback arrives with an
/// empty committing queue, in which case before-completion is skipped for
/// that registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryState {
    /// On the pending stack; before-completion has not run yet.
    Pending,
    /// On the committing queue; before-completion ran, awaiting the outcome.
    Committing,
    /// After-completion ran; the registry is finished.
    Completed,
}

impl RegistryState {
    /// Check if the registry still accepts registrations
    pub fn is_pending(&self) -> bool {
        matches!(self, RegistryState::Pending)
    }

    /// Check if before-completion has run
    pub fn is_committing(&self) -> bool {
        matches!(self, RegistryState::Committing)
    }

    /// Check if the registry is finished
    pub fn is_completed(&self) -> bool {
        matches!(self, RegistryState::Completed)
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistryState::Pending => "Pending",
            RegistryState::Committing => "Committing",
            RegistryState::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for RegistryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
