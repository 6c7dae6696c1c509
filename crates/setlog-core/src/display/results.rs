//! Result wrappers for displaying the outcome of store operations.
//!
//! Every wrapper works for any of the four entity kinds, and the first line
//! names the kind and ID of the affected entity.

use std::{fmt, sync::Arc};

use crate::models::{Circuit, Exercise, Identified, Set, Workout};

/// Entities that result wrappers know how to describe.
pub trait Resource: Identified + fmt::Display {
    /// Lowercase kind, as in "Created workout".
    const KIND: &'static str;

    /// Human name used in deletion confirmations.
    fn label(&self) -> String;
}

impl Resource for Workout {
    const KIND: &'static str = "workout";

    fn label(&self) -> String {
        format!("'{}'", self.name)
    }
}

impl Resource for Circuit {
    const KIND: &'static str = "circuit";

    fn label(&self) -> String {
        format!("'{}'", self.name)
    }
}

impl Resource for Exercise {
    const KIND: &'static str = "exercise";

    fn label(&self) -> String {
        format!("'{}'", self.name)
    }
}

impl Resource for Set {
    const KIND: &'static str = "set";

    fn label(&self) -> String {
        format!("#{}", self.order)
    }
}

/// Outcome of an add or create operation.
///
/// # Examples
///
/// ```rust
/// use setlog_core::{display::CreateResult, store::StoreBuilder};
///
/// let mut store = StoreBuilder::new().build();
/// let workout = store.add_workout("Push");
/// let bench = store.add_exercise(workout.id, "Bench Press").unwrap().unwrap();
///
/// let output = CreateResult::new(bench).to_string();
/// assert!(output.starts_with("Created exercise with ID:"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Resource> fmt::Display for CreateResult<Arc<T>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created {} with ID: {}", T::KIND, self.resource.id())?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Outcome of an update, listing the change lines the patch produced.
///
/// The change lines come from the `changes` field of the matching
/// `*Updated` store event.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl<T: Resource> fmt::Display for UpdateResult<Arc<T>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated {} with ID: {}", T::KIND, self.resource.id())?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Outcome of a remove operation.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Resource> fmt::Display for DeleteResult<Arc<T>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted {} {} (ID: {})",
            T::KIND,
            self.resource.label(),
            self.resource.id()
        )
    }
}
