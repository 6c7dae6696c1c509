//! Set operations, two levels below the workout.

use std::sync::Arc;

use jiff::Timestamp;
use uuid::Uuid;

use super::{path, StoreEvent, WorkoutStore};
use crate::{
    error::Result,
    models::{count, Set, SetPatch},
};

impl WorkoutStore {
    /// Append a set to an exercise.
    ///
    /// `reps` and `weight` default to 0 and `completed` to false; any field
    /// present in `fields` overrides its default, including `order`.
    pub fn add_set(
        &mut self,
        workout_id: Uuid,
        exercise_id: Uuid,
        fields: SetPatch,
    ) -> Result<Option<Arc<Set>>> {
        let (wi, ei) = match self.locate_exercise(workout_id, exercise_id) {
            Ok(location) => location,
            Err(error) => return self.missing(error),
        };

        let now = Timestamp::now();
        let mut set = Set {
            id: Uuid::new_v4(),
            exercise_id,
            order: count(self.workouts[wi].exercises[ei].sets.len()).saturating_add(1),
            reps: Some(0),
            target_reps: None,
            duration: None,
            weight: Some(0.0),
            rest_time: None,
            notes: None,
            comments: None,
            completed: false,
            status: None,
            created_at: now,
            updated_at: now,
        };
        fields.apply(&mut set);
        let set = Arc::new(set);

        let added = Arc::clone(&set);
        self.rewrite_exercise(wi, ei, |exercise| {
            exercise.sets = path::appended(&exercise.sets, added);
        });
        self.commit(StoreEvent::SetAdded {
            workout_id,
            exercise_id,
            set_id: set.id,
        });
        Ok(Some(set))
    }

    /// Remove a set. Remaining sets keep their `order` values.
    pub fn remove_set(
        &mut self,
        workout_id: Uuid,
        exercise_id: Uuid,
        set_id: Uuid,
    ) -> Result<Option<Arc<Set>>> {
        let (wi, ei, si) = match self.locate_set(workout_id, exercise_id, set_id) {
            Ok(location) => location,
            Err(error) => return self.missing(error),
        };

        let (sets, removed) = path::removed(&self.workouts[wi].exercises[ei].sets, si);
        self.rewrite_exercise(wi, ei, |exercise| exercise.sets = sets);
        self.commit(StoreEvent::SetRemoved {
            workout_id,
            exercise_id,
            set_id,
        });
        Ok(Some(removed))
    }

    /// Merge `patch` into a set and refresh its `updated_at`. The owning
    /// exercise's `updated_at` is left alone.
    pub fn update_set(
        &mut self,
        workout_id: Uuid,
        exercise_id: Uuid,
        set_id: Uuid,
        patch: SetPatch,
    ) -> Result<Option<Arc<Set>>> {
        let (wi, ei, si) = match self.locate_set(workout_id, exercise_id, set_id) {
            Ok(location) => location,
            Err(error) => return self.missing(error),
        };

        let mut changes = Vec::new();
        let set = self.rewrite_set(wi, ei, si, |set| {
            changes = patch.apply(set);
            set.updated_at = Timestamp::now();
        });
        self.commit(StoreEvent::SetUpdated {
            workout_id,
            exercise_id,
            set_id,
            changes,
        });
        Ok(Some(set))
    }
}
