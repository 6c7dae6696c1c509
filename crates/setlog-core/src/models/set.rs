//! Set model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Identified, Seconds, Status};

/// A single recorded set of an exercise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Set {
    /// Unique identifier for the set
    pub id: Uuid,

    /// ID of the owning exercise
    pub exercise_id: Uuid,

    /// Intended position within the exercise (1-based). Not re-packed when
    /// sibling sets are removed.
    pub order: u32,

    /// Repetitions actually performed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,

    /// Repetitions planned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_reps: Option<u32>,

    /// Time under work, for timed sets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Seconds>,

    /// Load, in the owning exercise's weight unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Rest taken after the set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_time: Option<Seconds>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,

    pub completed: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,

    /// Timestamp when the set was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the set was last updated (UTC)
    pub updated_at: Timestamp,
}

impl Identified for Set {
    fn id(&self) -> Uuid {
        self.id
    }
}
