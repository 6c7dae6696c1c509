//! Builder for creating and configuring WorkoutStore instances.

use super::{MissingTarget, WorkoutStore};

/// Builder for creating and configuring WorkoutStore instances.
#[derive(Debug, Clone, Default)]
pub struct StoreBuilder {
    missing_target: MissingTarget,
}

impl StoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how operations on absent IDs are reported.
    ///
    /// Defaults to [`MissingTarget::Strict`].
    pub fn missing_target(mut self, policy: MissingTarget) -> Self {
        self.missing_target = policy;
        self
    }

    /// Builds an empty store.
    pub fn build(self) -> WorkoutStore {
        WorkoutStore::new(self.missing_target)
    }
}
