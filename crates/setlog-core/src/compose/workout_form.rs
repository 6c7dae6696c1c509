//! First step of workout creation: name and tags.

use log::debug;

use super::validation::validate_workout_name;
use crate::{error::Result, models::DraftHeader, store::WorkoutStore};

/// Form state for naming a new workout and choosing its tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutForm {
    pub name: String,
    pub tags: Vec<String>,
}

impl WorkoutForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `tag` if it is not selected, otherwise deselect it. Returns
    /// whether the tag is selected afterwards.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if let Some(position) = self.tags.iter().position(|selected| selected == tag) {
            self.tags.remove(position);
            false
        } else {
            self.tags.push(tag.to_string());
            true
        }
    }

    /// Validate and write the name and tags into the store's draft slot,
    /// replacing any earlier draft. The form is reset on success and left
    /// untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns `WorkoutError::Validation` when the name is blank.
    pub fn submit(&mut self, store: &mut WorkoutStore) -> Result<()> {
        validate_workout_name(&self.name).into_result()?;

        let Self { name, tags } = std::mem::take(self);
        debug!("Starting draft '{name}' with {} tags", tags.len());
        store.set_draft_workout(DraftHeader { name, tags });
        Ok(())
    }
}
