//! Workout model definition and tag normalization.

use std::sync::Arc;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Circuit, Exercise, Identified, Seconds, Status};

/// Top-level aggregate: a named workout with its exercises and circuits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workout {
    /// Unique identifier for the workout
    pub id: Uuid,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Free-text tags, deduplicated
    #[serde(default)]
    pub tags: Vec<String>,

    /// Total planned duration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Seconds>,

    /// Exercises that are not part of any circuit
    #[serde(default)]
    pub exercises: Vec<Arc<Exercise>>,

    #[serde(default)]
    pub circuits: Vec<Arc<Circuit>>,

    pub completed: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,

    /// Timestamp when the workout was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the workout was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Workout {
    /// Look up a top-level exercise by ID.
    pub fn exercise(&self, id: Uuid) -> Option<&Arc<Exercise>> {
        self.exercises.iter().find(|exercise| exercise.id == id)
    }

    /// Look up a circuit by ID.
    pub fn circuit(&self, id: Uuid) -> Option<&Arc<Circuit>> {
        self.circuits.iter().find(|circuit| circuit.id == id)
    }

    /// Every exercise of the workout, top-level ones first, then circuit
    /// members in circuit order.
    pub fn all_exercises(&self) -> impl Iterator<Item = &Arc<Exercise>> {
        self.exercises.iter().chain(
            self.circuits
                .iter()
                .flat_map(|circuit| circuit.exercises.iter()),
        )
    }
}

impl Identified for Workout {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Normalize free-text tags: trim, drop empties, and drop duplicates keeping
/// the first occurrence.
///
/// # Examples
///
/// ```rust
/// use setlog_core::models::normalize_tags;
///
/// let tags = normalize_tags(["legs", " strength ", "", "legs"]);
/// assert_eq!(tags, vec!["legs".to_string(), "strength".to_string()]);
/// ```
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim();
        if !tag.is_empty() && !normalized.iter().any(|existing| existing == tag) {
            normalized.push(tag.to_string());
        }
    }
    normalized
}
