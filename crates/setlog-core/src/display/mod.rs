//! Display formatting for workouts and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly and render as
//! markdown, so the same text works for plain terminals and for a markdown
//! renderer. Collections and operation results get newtype wrappers.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Wrappers and   │    │    Markdown     │
//! │ (Workout, Set)  │───▶│  Entry Cards    │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`card`]: View-mode summary of an exercise being composed
//! - [`collections`]: Collection wrapper types (WorkoutSummaries)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! # Examples
//!
//! ```rust
//! use setlog_core::{display::CreateResult, store::StoreBuilder};
//!
//! let mut store = StoreBuilder::new().build();
//! let workout = store.add_workout("Leg Day");
//!
//! let output = CreateResult::new(workout).to_string();
//! assert!(output.starts_with("Created workout with ID:"));
//! assert!(output.contains("# Leg Day"));
//! ```

pub mod card;
pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use card::ExerciseCard;
pub use collections::WorkoutSummaries;
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};

/// `"1 set"`, `"3 sets"`.
pub(crate) fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
