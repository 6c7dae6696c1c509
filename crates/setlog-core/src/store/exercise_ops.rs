//! Exercise operations, scoped to a workout's top-level exercise list.

use std::sync::Arc;

use jiff::Timestamp;
use uuid::Uuid;

use super::{path, StoreEvent, WorkoutStore};
use crate::{
    error::Result,
    models::{count, Exercise, ExercisePatch, ExerciseType, Phase},
};

impl WorkoutStore {
    /// Append a new exercise to a workout.
    ///
    /// The exercise starts in the main phase as a strength exercise with no
    /// sets. Its `order` is the workout's exercise count plus one.
    pub fn add_exercise(
        &mut self,
        workout_id: Uuid,
        name: impl Into<String>,
    ) -> Result<Option<Arc<Exercise>>> {
        let wi = match self.locate_workout(workout_id) {
            Ok(wi) => wi,
            Err(error) => return self.missing(error),
        };

        let now = Timestamp::now();
        let exercise = Arc::new(Exercise {
            id: Uuid::new_v4(),
            workout_id,
            circuit_id: None,
            name: name.into(),
            phase: Phase::Main,
            order: count(self.workouts[wi].exercises.len()).saturating_add(1),
            exercise_type: ExerciseType::Strength,
            muscle_groups: Vec::new(),
            equipment: Vec::new(),
            is_bodyweight: None,
            weight_unit: None,
            instructions: None,
            video_url: None,
            notes: None,
            comments: None,
            sets: Vec::new(),
            completed: false,
            status: None,
            created_at: now,
            updated_at: now,
        });

        let added = Arc::clone(&exercise);
        self.rewrite_workout(wi, |workout| {
            workout.exercises = path::appended(&workout.exercises, added);
        });
        self.commit(StoreEvent::ExerciseAdded {
            workout_id,
            exercise_id: exercise.id,
        });
        Ok(Some(exercise))
    }

    /// Remove an exercise from a workout. Remaining exercises keep their
    /// `order` values.
    pub fn remove_exercise(
        &mut self,
        workout_id: Uuid,
        exercise_id: Uuid,
    ) -> Result<Option<Arc<Exercise>>> {
        let (wi, ei) = match self.locate_exercise(workout_id, exercise_id) {
            Ok(location) => location,
            Err(error) => return self.missing(error),
        };

        let (exercises, removed) = path::removed(&self.workouts[wi].exercises, ei);
        self.rewrite_workout(wi, |workout| workout.exercises = exercises);
        self.commit(StoreEvent::ExerciseRemoved {
            workout_id,
            exercise_id,
        });
        Ok(Some(removed))
    }

    /// Merge `patch` into an exercise and refresh its `updated_at`.
    pub fn update_exercise(
        &mut self,
        workout_id: Uuid,
        exercise_id: Uuid,
        patch: ExercisePatch,
    ) -> Result<Option<Arc<Exercise>>> {
        let (wi, ei) = match self.locate_exercise(workout_id, exercise_id) {
            Ok(location) => location,
            Err(error) => return self.missing(error),
        };

        let mut changes = Vec::new();
        let exercise = self.rewrite_exercise(wi, ei, |exercise| {
            changes = patch.apply(exercise);
            exercise.updated_at = Timestamp::now();
        });
        self.commit(StoreEvent::ExerciseUpdated {
            workout_id,
            exercise_id,
            changes,
        });
        Ok(Some(exercise))
    }
}
