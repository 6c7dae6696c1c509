//! Partial-field updates for finalized entities.
//!
//! A patch sets every field it carries and leaves the rest untouched.
//! Identity, back-references, creation time and child collections are not
//! patchable.

use serde::{Deserialize, Serialize};

use super::{
    normalize_tags, Circuit, Exercise, ExerciseType, Phase, Seconds, Set, Status, Workout,
    WeightUnit,
};

/// Assign every `Some` field of a patch onto the target, recording a change
/// line for each.
macro_rules! apply_fields {
    ($patch:ident, $target:ident, $changes:ident; $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = value;
                $changes.push(concat!("Updated ", stringify!($field)).to_string());
            }
        )+
    };
}

/// Same as `apply_fields!`, for target fields that are themselves optional.
macro_rules! apply_optional_fields {
    ($patch:ident, $target:ident, $changes:ident; $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = Some(value);
                $changes.push(concat!("Updated ", stringify!($field)).to_string());
            }
        )+
    };
}

/// Orders are 1-based.
fn first_position(order: u32) -> u32 {
    order.max(1)
}

/// Partial update of a workout's direct fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WorkoutPatch {
    pub name: Option<String>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
    pub duration: Option<Seconds>,
    pub completed: Option<bool>,
    pub status: Option<Status>,
}

impl WorkoutPatch {
    /// Shorthand for a patch that only renames.
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Merge into `workout`, returning a description of each change.
    pub(crate) fn apply(self, workout: &mut Workout) -> Vec<String> {
        let mut changes = Vec::new();
        let patch = Self {
            tags: self.tags.map(normalize_tags),
            ..self
        };
        apply_fields!(patch, workout, changes; name, tags, completed);
        apply_optional_fields!(patch, workout, changes; notes, duration, status);
        changes
    }
}

/// Partial update of an exercise's direct fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExercisePatch {
    pub name: Option<String>,
    pub phase: Option<Phase>,
    pub order: Option<u32>,
    #[serde(rename = "type")]
    pub exercise_type: Option<ExerciseType>,
    pub muscle_groups: Option<Vec<String>>,
    pub equipment: Option<Vec<String>>,
    pub is_bodyweight: Option<bool>,
    pub weight_unit: Option<WeightUnit>,
    pub instructions: Option<String>,
    pub video_url: Option<String>,
    pub notes: Option<String>,
    pub comments: Option<String>,
    pub completed: Option<bool>,
    pub status: Option<Status>,
}

impl ExercisePatch {
    /// Merge into `exercise`. An `order` of zero is raised to one.
    pub(crate) fn apply(self, exercise: &mut Exercise) -> Vec<String> {
        let mut changes = Vec::new();
        let patch = Self {
            order: self.order.map(first_position),
            ..self
        };
        apply_fields!(patch, exercise, changes;
            name, phase, order, exercise_type, muscle_groups, equipment, completed);
        apply_optional_fields!(patch, exercise, changes;
            is_bodyweight, weight_unit, instructions, video_url, notes, comments, status);
        changes
    }
}

/// Partial update of a circuit's direct fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CircuitPatch {
    pub name: Option<String>,
    pub phase: Option<Phase>,
    pub order: Option<u32>,
    pub rounds: Option<u32>,
    pub rest_between_exercises: Option<Seconds>,
    pub rest_between_rounds: Option<Seconds>,
    pub notes: Option<String>,
    pub comments: Option<String>,
    pub completed: Option<bool>,
    pub status: Option<Status>,
}

impl CircuitPatch {
    pub(crate) fn apply(self, circuit: &mut Circuit) -> Vec<String> {
        let mut changes = Vec::new();
        let patch = Self {
            order: self.order.map(first_position),
            ..self
        };
        apply_fields!(patch, circuit, changes; name, phase, order, rounds, completed);
        apply_optional_fields!(patch, circuit, changes;
            rest_between_exercises, rest_between_rounds, notes, comments, status);
        changes
    }
}

/// Partial update of a set's direct fields. Also the partial-fields argument
/// of [`crate::store::WorkoutStore::add_set`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SetPatch {
    pub order: Option<u32>,
    pub reps: Option<u32>,
    pub target_reps: Option<u32>,
    pub duration: Option<Seconds>,
    pub weight: Option<f64>,
    pub rest_time: Option<Seconds>,
    pub notes: Option<String>,
    pub comments: Option<String>,
    pub completed: Option<bool>,
    pub status: Option<Status>,
}

impl SetPatch {
    pub(crate) fn apply(self, set: &mut Set) -> Vec<String> {
        let mut changes = Vec::new();
        let patch = Self {
            order: self.order.map(first_position),
            ..self
        };
        apply_fields!(patch, set, changes; order, completed);
        apply_optional_fields!(patch, set, changes;
            reps, target_reps, duration, weight, rest_time, notes, comments, status);
        changes
    }
}
