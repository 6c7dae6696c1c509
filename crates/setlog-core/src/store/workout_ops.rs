//! Draft slot and workout-level operations.

use std::sync::Arc;

use jiff::Timestamp;
use log::{debug, info};
use uuid::Uuid;

use super::{path, promote, StoreEvent, WorkoutStore};
use crate::{
    error::Result,
    models::{normalize_tags, CreateWorkout, DraftHeader, Workout, WorkoutPatch},
};

impl WorkoutStore {
    /// Start a new draft from a name and tags.
    ///
    /// Any previous draft is discarded; nothing from it carries over.
    pub fn set_draft_workout(&mut self, header: DraftHeader) {
        let DraftHeader { name, tags } = header;
        if self.draft.is_some() {
            debug!("Replacing uncommitted draft with '{name}'");
        }
        self.draft = Some(CreateWorkout {
            name,
            tags: normalize_tags(tags),
            ..Default::default()
        });
        self.commit(StoreEvent::DraftSet);
    }

    /// Empty the draft slot.
    pub fn clear_draft(&mut self) {
        if self.take_draft().is_none() {
            debug!("No draft to clear");
        }
    }

    /// Empty the draft slot, returning what it held.
    pub fn take_draft(&mut self) -> Option<CreateWorkout> {
        let draft = self.draft.take();
        if draft.is_some() {
            self.commit(StoreEvent::DraftCleared);
        }
        draft
    }

    /// Append a new, empty workout.
    pub fn add_workout(&mut self, name: impl Into<String>) -> Arc<Workout> {
        let now = Timestamp::now();
        let workout = Arc::new(Workout {
            id: Uuid::new_v4(),
            name: name.into(),
            notes: None,
            tags: Vec::new(),
            duration: None,
            exercises: Vec::new(),
            circuits: Vec::new(),
            completed: false,
            status: None,
            created_at: now,
            updated_at: now,
        });

        self.workouts = path::appended(&self.workouts, Arc::clone(&workout));
        self.commit(StoreEvent::WorkoutAdded {
            workout_id: workout.id,
        });
        workout
    }

    /// Promote a fully composed draft into a finalized workout.
    ///
    /// Every entity in the tree receives a fresh ID, its owner references and
    /// a 1-based order, and all share one creation timestamp. The draft slot
    /// is left as it is; call [`Self::clear_draft`] once the flow is done.
    pub fn create_workout(&mut self, draft: CreateWorkout) -> Arc<Workout> {
        let workout = Arc::new(promote::workout(draft, Timestamp::now()));
        info!(
            "Created workout '{}' with {} exercises and {} circuits",
            workout.name,
            workout.exercises.len(),
            workout.circuits.len()
        );

        self.workouts = path::appended(&self.workouts, Arc::clone(&workout));
        self.commit(StoreEvent::WorkoutCreated {
            workout_id: workout.id,
        });
        workout
    }

    /// Delete a workout. Returns the removed workout.
    pub fn remove_workout(&mut self, id: Uuid) -> Result<Option<Arc<Workout>>> {
        let wi = match self.locate_workout(id) {
            Ok(wi) => wi,
            Err(error) => return self.missing(error),
        };

        let (workouts, removed) = path::removed(&self.workouts, wi);
        self.workouts = workouts;
        self.commit(StoreEvent::WorkoutRemoved { workout_id: id });
        Ok(Some(removed))
    }

    /// Merge `patch` into a workout and refresh its `updated_at`.
    pub fn update_workout(&mut self, id: Uuid, patch: WorkoutPatch) -> Result<Option<Arc<Workout>>> {
        let wi = match self.locate_workout(id) {
            Ok(wi) => wi,
            Err(error) => return self.missing(error),
        };

        let mut changes = Vec::new();
        let workout = self.rewrite_workout(wi, |workout| {
            changes = patch.apply(workout);
            workout.updated_at = Timestamp::now();
        });
        self.commit(StoreEvent::WorkoutUpdated {
            workout_id: id,
            changes,
        });
        Ok(Some(workout))
    }
}
