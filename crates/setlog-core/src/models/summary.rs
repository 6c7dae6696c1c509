//! Workout summary types and functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{count, Workout};

/// Summary information about a workout with exercise and set statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutSummary {
    /// Workout ID
    pub id: Uuid,
    /// Name of the workout
    pub name: String,
    /// Workout tags
    pub tags: Vec<String>,
    /// Number of exercises, including circuit members
    pub total_exercises: u32,
    /// Number of circuits
    pub total_circuits: u32,
    /// Number of sets across every exercise
    pub total_sets: u32,
    /// Number of completed sets
    pub completed_sets: u32,
    /// Whether the workout itself is marked completed
    pub completed: bool,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Last update timestamp
    pub updated_at: Timestamp,
}

impl From<&Workout> for WorkoutSummary {
    fn from(workout: &Workout) -> Self {
        let (total_exercises, total_sets, completed_sets) = workout.all_exercises().fold(
            (0u32, 0u32, 0u32),
            |(exercises, sets, completed), exercise| {
                (
                    exercises.saturating_add(1),
                    sets.saturating_add(count(exercise.sets.len())),
                    completed.saturating_add(count(exercise.completed_sets())),
                )
            },
        );

        Self {
            id: workout.id,
            name: workout.name.clone(),
            tags: workout.tags.clone(),
            total_exercises,
            total_circuits: count(workout.circuits.len()),
            total_sets,
            completed_sets,
            completed: workout.completed,
            created_at: workout.created_at,
            updated_at: workout.updated_at,
        }
    }
}
