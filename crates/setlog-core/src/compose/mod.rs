//! Multi-step workout authoring.
//!
//! Composition runs in three stages:
//!
//! 1. [`WorkoutForm`] captures a name and tags and, once valid, writes them
//!    into the store's draft slot.
//! 2. [`ExerciseComposer`] is seeded from that draft and keeps its own,
//!    unsaved list of exercises. Exactly one entry may be open for editing
//!    at a time.
//! 3. [`ExerciseComposer::finish`] hands back the composed
//!    [`CreateWorkout`](crate::models::CreateWorkout), which
//!    [`WorkoutStore::create_workout`](crate::store::WorkoutStore::create_workout)
//!    promotes into a finalized workout.
//!
//! Nothing in the composer reaches the store until it is promoted; dropping
//! the composer discards it.
//!
//! # Per-exercise editor
//!
//! ```text
//!            start_exercise
//!                 │
//!                 ▼
//!   Viewing ──edit──▶ Editing ──remove──▶ (gone)
//!      ▲                 │
//!      └── save (valid) ─┤
//!      └── cancel ───────┘
//! ```

pub mod exercise_composer;
pub mod tags;
pub mod validation;
pub mod workout_form;

#[cfg(test)]
mod tests;

pub use exercise_composer::{ComposerOptions, EditorState, ExerciseComposer};
pub use tags::{filter_tags, TagOption, TAG_OPTIONS};
pub use validation::{validate_circuits, validate_exercise, validate_workout_name};
pub use workout_form::WorkoutForm;
