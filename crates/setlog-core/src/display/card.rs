//! View-mode card for an exercise entry in the composer.

use std::fmt;

use super::{models::SetLine, plural};
use crate::models::CreateExercise;

/// Read-only summary of a composed exercise, shown for every entry that is
/// not being edited.
///
/// # Examples
///
/// ```rust
/// use setlog_core::{display::ExerciseCard, models::CreateExercise};
///
/// let mut squat = CreateExercise::blank();
/// squat.name = "Squat".to_string();
///
/// let card = ExerciseCard::new(&squat);
/// assert_eq!(card.title(), "Squat");
/// assert_eq!(card.subtitle(), "strength • 1 set");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ExerciseCard<'a> {
    exercise: &'a CreateExercise,
}

impl<'a> ExerciseCard<'a> {
    pub fn new(exercise: &'a CreateExercise) -> Self {
        Self { exercise }
    }

    /// The exercise name, or a placeholder while it is still empty.
    pub fn title(&self) -> &'a str {
        let name = self.exercise.name.trim();
        if name.is_empty() {
            "Untitled exercise"
        } else {
            name
        }
    }

    /// Type and set count, e.g. `strength • 3 sets`.
    pub fn subtitle(&self) -> String {
        format!(
            "{} • {}",
            self.exercise.exercise_type,
            plural(self.exercise.sets.len(), "set")
        )
    }

    pub fn notes(&self) -> Option<&'a str> {
        self.exercise.notes.as_deref()
    }
}

impl fmt::Display for ExerciseCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**{}**", self.title())?;
        writeln!(f, "{}", self.subtitle())?;

        let unit = self.exercise.weight_unit.unwrap_or_default();
        for (i, set) in self.exercise.sets.iter().enumerate() {
            let line = SetLine {
                reps: set.reps,
                target_reps: set.target_reps,
                duration: set.duration,
                weight: set.weight,
                unit,
            };
            writeln!(f, "{}. {line}", i + 1)?;
        }
        if let Some(notes) = self.notes() {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }
        Ok(())
    }
}
