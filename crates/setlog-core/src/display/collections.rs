//! Collection wrapper types for displaying groups of workouts.

use std::{fmt, ops::Index};

use crate::models::WorkoutSummary;

/// Newtype wrapper for displaying a list of workout summaries.
///
/// # Examples
///
/// ```rust
/// use setlog_core::{display::WorkoutSummaries, store::StoreBuilder};
///
/// let mut store = StoreBuilder::new().build();
/// store.add_workout("Leg Day");
///
/// let summaries = WorkoutSummaries(store.summaries());
/// assert!(summaries.to_string().contains("## Leg Day"));
/// ```
pub struct WorkoutSummaries(pub Vec<WorkoutSummary>);

impl WorkoutSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&WorkoutSummary> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WorkoutSummary> {
        self.0.iter()
    }
}

impl Index<usize> for WorkoutSummaries {
    type Output = WorkoutSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a WorkoutSummaries {
    type Item = &'a WorkoutSummary;
    type IntoIter = std::slice::Iter<'a, WorkoutSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for WorkoutSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No workouts found.")
        } else {
            for summary in &self.0 {
                write!(f, "{summary}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{CreateExercise, CreateSet, CreateWorkout},
        store::StoreBuilder,
    };

    #[test]
    fn test_empty_summaries() {
        let summaries = WorkoutSummaries(Vec::new());
        assert!(summaries.is_empty());
        assert_eq!(summaries.to_string(), "No workouts found.\n");
    }

    #[test]
    fn test_summaries_show_progress() {
        let mut store = StoreBuilder::new().build();
        store.create_workout(CreateWorkout {
            name: "Leg Day".to_string(),
            tags: vec!["legs".into()],
            exercises: vec![CreateExercise {
                name: "Squat".to_string(),
                sets: vec![CreateSet::default(), CreateSet::default()],
                ..Default::default()
            }],
            ..Default::default()
        });
        store.add_workout("Rest Day");

        let summaries = WorkoutSummaries(store.summaries());
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].total_sets, 2);

        let output = summaries.to_string();
        assert!(output.contains("(0/2 sets)"));
        assert!(output.contains("- **Tags**: legs"));
        assert!(output.contains("- **Contents**: 1 exercise, 0 circuits"));
        assert!(output.contains("## Rest Day"));
    }
}
