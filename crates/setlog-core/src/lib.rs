//! Core library for the Setlog workout tracker.
//!
//! This crate holds the workout domain: the entity model, an observable
//! in-memory store with structural sharing, the multi-step flow used to
//! author new workouts, and markdown display for all of it.
//!
//! - [`models`]: Workouts, circuits, exercises, sets, drafts and patches
//! - [`store`]: [`WorkoutStore`] with id-keyed CRUD and change events
//! - [`compose`]: [`WorkoutForm`] and [`ExerciseComposer`]
//! - [`display`]: Display wrappers for results and collections
//!
//! # Quick Start
//!
//! ```rust
//! use setlog_core::{ExerciseComposer, StoreBuilder, WorkoutForm};
//!
//! # fn example() -> setlog_core::Result<()> {
//! let mut store = StoreBuilder::new().build();
//!
//! // Step 1: name and tags go into the draft slot
//! let mut form = WorkoutForm::new();
//! form.name = "Leg Day".to_string();
//! form.toggle_tag("legs");
//! form.submit(&mut store)?;
//!
//! // Step 2: author exercises locally
//! let mut composer = ExerciseComposer::from_store(&store).expect("draft was just set");
//! let index = composer.start_exercise();
//! let squat = composer.exercise_mut(index)?;
//! squat.name = "Squat".to_string();
//! squat.sets[0].target_reps = Some(8);
//! squat.sets[0].weight = Some(135.0);
//! composer.save(index)?;
//!
//! // Step 3: promote into a finalized workout
//! let workout = store.create_workout(composer.finish()?);
//! println!("{workout}");
//! assert_eq!(workout.exercises[0].sets[0].order, 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod compose;
pub mod display;
pub mod error;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use compose::{ComposerOptions, EditorState, ExerciseComposer, WorkoutForm};
pub use display::{CreateResult, DeleteResult, LocalDateTime, UpdateResult, WorkoutSummaries};
pub use error::{FieldError, Result, ValidationErrors, WorkoutError};
pub use models::{
    Circuit, CreateCircuit, CreateExercise, CreateSet, CreateWorkout, Exercise, Set, Status,
    Workout, WorkoutSummary,
};
pub use store::{MissingTarget, StoreBuilder, StoreEvent, SubscriptionId, WorkoutStore};
