//! Data models for workouts, circuits, exercises and sets.
//!
//! Finalized entities ([`Workout`], [`Circuit`], [`Exercise`], [`Set`]) carry
//! identity, owner back-references and audit timestamps. Their draft
//! counterparts ([`CreateWorkout`], [`CreateCircuit`], [`CreateExercise`],
//! [`CreateSet`]) carry none of these and are what the composition flow edits.
//! Patches ([`WorkoutPatch`] and friends) describe partial updates.
//!
//! Nested children are held behind [`std::sync::Arc`]. The store replaces
//! only the `Arc`s on the path to a change, so an untouched child keeps its
//! pointer identity from one store state to the next.
//!
//! Display implementations for these models live in
//! [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use setlog_core::models::{CreateExercise, CreateSet, ExerciseType, Phase};
//!
//! let squat = CreateExercise {
//!     name: "Squat".to_string(),
//!     phase: Phase::Main,
//!     exercise_type: ExerciseType::Strength,
//!     sets: vec![CreateSet {
//!         target_reps: Some(8),
//!         weight: Some(135.0),
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//! assert_eq!(squat.sets.len(), 1);
//! ```

use uuid::Uuid;

pub mod circuit;
pub mod drafts;
pub mod exercise;
pub mod patches;
pub mod set;
pub mod status;
pub mod summary;
pub mod workout;

#[cfg(test)]
mod tests;

pub use circuit::Circuit;
pub use drafts::{CreateCircuit, CreateExercise, CreateSet, CreateWorkout, DraftHeader};
pub use exercise::Exercise;
pub use patches::{CircuitPatch, ExercisePatch, SetPatch, WorkoutPatch};
pub use set::Set;
pub use status::{ExerciseType, Phase, Status, WeightUnit};
pub use summary::WorkoutSummary;
pub use workout::{normalize_tags, Workout};

/// Durations and rest times, in whole seconds.
pub type Seconds = u32;

/// Entities addressable by a unique ID.
pub trait Identified {
    fn id(&self) -> Uuid;
}

/// Convert a collection length to a `u32` count, saturating at `u32::MAX`.
pub(crate) fn count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
