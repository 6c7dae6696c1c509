//! Exercise model definition and related functionality.

use std::sync::Arc;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ExerciseType, Identified, Phase, Set, Status, WeightUnit};

/// An exercise performed within a workout, optionally as part of a circuit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    /// Unique identifier for the exercise
    pub id: Uuid,

    /// ID of the owning workout
    pub workout_id: Uuid,

    /// ID of the circuit the exercise belongs to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circuit_id: Option<Uuid>,

    pub name: String,

    pub phase: Phase,

    /// Position among its siblings (1-based at insertion)
    pub order: u32,

    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,

    /// Targeted muscle groups, e.g. `chest`, `triceps`
    #[serde(default)]
    pub muscle_groups: Vec<String>,

    /// Equipment needed, e.g. `dumbbell`, `barbell`
    #[serde(default)]
    pub equipment: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_bodyweight: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<WeightUnit>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,

    /// Sets in intended order
    #[serde(default)]
    pub sets: Vec<Arc<Set>>,

    pub completed: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,

    /// Timestamp when the exercise was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the exercise was last updated (UTC)
    pub updated_at: Timestamp,
}

impl Exercise {
    /// Look up one of this exercise's sets by ID.
    pub fn set(&self, id: Uuid) -> Option<&Arc<Set>> {
        self.sets.iter().find(|set| set.id == id)
    }

    /// Number of sets marked completed.
    pub fn completed_sets(&self) -> usize {
        self.sets.iter().filter(|set| set.completed).count()
    }
}

impl Identified for Exercise {
    fn id(&self) -> Uuid {
        self.id
    }
}
