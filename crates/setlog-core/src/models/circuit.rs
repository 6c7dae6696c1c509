//! Circuit model definition.

use std::sync::Arc;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Exercise, Identified, Phase, Seconds, Status};

/// A group of exercises performed back to back for a number of rounds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Circuit {
    /// Unique identifier for the circuit
    pub id: Uuid,

    /// ID of the owning workout
    pub workout_id: Uuid,

    pub name: String,

    pub phase: Phase,

    /// Position among the workout's circuits (1-based at insertion)
    pub order: u32,

    /// Exercises of the circuit. These never also appear in the workout's
    /// top-level exercise list.
    #[serde(default)]
    pub exercises: Vec<Arc<Exercise>>,

    /// How many times the circuit is repeated (at least 1)
    pub rounds: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_between_exercises: Option<Seconds>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_between_rounds: Option<Seconds>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,

    pub completed: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,

    /// Timestamp when the circuit was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the circuit was last updated (UTC)
    pub updated_at: Timestamp,
}

impl Circuit {
    /// Look up one of the circuit's exercises by ID.
    pub fn exercise(&self, id: Uuid) -> Option<&Arc<Exercise>> {
        self.exercises.iter().find(|exercise| exercise.id == id)
    }
}

impl Identified for Circuit {
    fn id(&self) -> Uuid {
        self.id
    }
}
