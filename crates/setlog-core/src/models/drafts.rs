//! Draft (unpersisted) counterparts of the finalized entities.
//!
//! Drafts carry no identity, no back-references, no timestamps and no
//! completion state. Every draft field maps onto the finalized field of the
//! same name, so promotion is a field copy plus identity and timestamp
//! assignment (see [`crate::store::WorkoutStore::create_workout`]).

use serde::{Deserialize, Serialize};

use super::{ExerciseType, Phase, Seconds, WeightUnit};
use crate::error::Result;

/// A set being authored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CreateSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_reps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Seconds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_time: Option<Seconds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// An exercise being authored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CreateExercise {
    pub name: String,
    #[serde(default)]
    pub phase: Phase,
    #[serde(rename = "type", default)]
    pub exercise_type: ExerciseType,
    #[serde(default)]
    pub muscle_groups: Vec<String>,
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
    #[serde(default)]
    pub sets: Vec<CreateSet>,
}

impl CreateExercise {
    /// The entry appended when the user starts a new exercise: main phase,
    /// strength, pounds, not bodyweight, and a single blank set.
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            phase: Phase::Main,
            exercise_type: ExerciseType::Strength,
            is_bodyweight: Some(false),
            weight_unit: Some(WeightUnit::Lbs),
            sets: vec![CreateSet::default()],
            ..Default::default()
        }
    }
}

fn default_rounds() -> u32 {
    1
}

/// A circuit being authored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateCircuit {
    pub name: String,
    #[serde(default)]
    pub phase: Phase,
    #[serde(default = "default_rounds")]
    pub rounds: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_between_exercises: Option<Seconds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_between_rounds: Option<Seconds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub exercises: Vec<CreateExercise>,
}

impl Default for CreateCircuit {
    fn default() -> Self {
        Self {
            name: String::new(),
            phase: Phase::Main,
            rounds: default_rounds(),
            rest_between_exercises: None,
            rest_between_rounds: None,
            notes: None,
            exercises: Vec::new(),
        }
    }
}

/// A workout being authored. This is also what the store's draft slot holds.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CreateWorkout {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Seconds>,
    #[serde(default)]
    pub exercises: Vec<CreateExercise>,
    #[serde(default)]
    pub circuits: Vec<CreateCircuit>,
}

impl CreateWorkout {
    /// Parse a workout definition document. Missing optional fields take
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Returns `WorkoutError::Serialization` when the text is not a valid
    /// definition.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Name and tags captured by the first step of workout creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DraftHeader {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl DraftHeader {
    pub fn new<I, S>(name: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}
