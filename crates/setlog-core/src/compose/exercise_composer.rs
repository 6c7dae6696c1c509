//! Second step of workout creation: authoring exercises and their sets.

use log::debug;

use super::validation::{validate_exercise, validate_workout_name};
use crate::{
    display::ExerciseCard,
    error::{Result, WorkoutError},
    models::{CreateExercise, CreateSet, CreateWorkout},
    store::WorkoutStore,
};

/// Behavior switches for [`ExerciseComposer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComposerOptions {
    /// Restore an entry to its state from when editing began whenever its
    /// editor is cancelled or abandoned. Off by default, in which case edits
    /// typed into an entry survive Cancel.
    pub revert_on_cancel: bool,
}

/// Editor state of a single exercise entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Viewing,
    Editing,
}

/// Local, unsaved list of exercises for the workout being created.
#[derive(Debug, Clone)]
pub struct ExerciseComposer {
    name: String,
    tags: Vec<String>,
    exercises: Vec<CreateExercise>,
    editing: Option<usize>,
    snapshot: Option<CreateExercise>,
    options: ComposerOptions,
}

impl ExerciseComposer {
    /// Start composing a workout with the given name and tags.
    pub fn new(name: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            name: name.into(),
            tags,
            exercises: Vec::new(),
            editing: None,
            snapshot: None,
            options: ComposerOptions::default(),
        }
    }

    /// Seed from a draft's name and tags. The draft itself is not modified
    /// and its exercises are not carried over.
    pub fn from_draft(draft: &CreateWorkout) -> Self {
        Self::new(draft.name.clone(), draft.tags.clone())
    }

    /// Seed from the store's draft slot, if a draft has been started.
    pub fn from_store(store: &WorkoutStore) -> Option<Self> {
        store.draft_workout().map(Self::from_draft)
    }

    pub fn with_options(mut self, options: ComposerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn exercises(&self) -> &[CreateExercise] {
        &self.exercises
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Index of the entry currently open for editing.
    pub fn editing_index(&self) -> Option<usize> {
        self.editing
    }

    /// Whether the "add exercise" action is offered, which is only while no
    /// entry is being edited.
    pub fn can_add_exercise(&self) -> bool {
        self.editing.is_none()
    }

    pub fn state(&self, index: usize) -> Result<EditorState> {
        self.check_index(index)?;
        Ok(if self.editing == Some(index) {
            EditorState::Editing
        } else {
            EditorState::Viewing
        })
    }

    pub fn exercise(&self, index: usize) -> Result<&CreateExercise> {
        self.check_index(index)?;
        Ok(&self.exercises[index])
    }

    /// Mutable access to an entry's fields, as a form input would edit them.
    pub fn exercise_mut(&mut self, index: usize) -> Result<&mut CreateExercise> {
        self.check_index(index)?;
        Ok(&mut self.exercises[index])
    }

    /// View-mode summary of an entry.
    pub fn card(&self, index: usize) -> Result<ExerciseCard<'_>> {
        Ok(ExerciseCard::new(self.exercise(index)?))
    }

    /// Append a blank exercise and open it for editing. Any other open
    /// editor is closed without saving. Returns the new entry's index.
    pub fn start_exercise(&mut self) -> usize {
        self.close_editor();
        self.exercises.push(CreateExercise::blank());
        let index = self.exercises.len() - 1;
        self.open_editor(index);
        debug!("Started exercise entry {index}");
        index
    }

    /// Open an entry for editing, closing any other open editor without
    /// saving it.
    pub fn edit(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        if self.editing != Some(index) {
            self.close_editor();
            self.open_editor(index);
        }
        Ok(())
    }

    /// Validate the entry being edited and return it to view mode.
    ///
    /// # Errors
    ///
    /// Returns `WorkoutError::Validation` (leaving the entry open) when a
    /// required field is missing, or `WorkoutError::InvalidInput` when the
    /// entry is not the one being edited.
    pub fn save(&mut self, index: usize) -> Result<()> {
        self.check_editing(index)?;
        validate_exercise(index, &self.exercises[index]).into_result()?;
        self.editing = None;
        self.snapshot = None;
        Ok(())
    }

    /// Return the entry being edited to view mode without validating.
    pub fn cancel(&mut self, index: usize) -> Result<()> {
        self.check_editing(index)?;
        self.close_editor();
        Ok(())
    }

    /// Delete an entry. Leaves edit mode whichever entry was open.
    pub fn remove(&mut self, index: usize) -> Result<CreateExercise> {
        self.check_index(index)?;
        if self.editing != Some(index) {
            self.close_editor();
        }
        self.editing = None;
        self.snapshot = None;
        Ok(self.exercises.remove(index))
    }

    /// Append a blank set to an entry. Returns the new set's index, which is
    /// where input focus belongs next.
    pub fn add_set(&mut self, index: usize) -> Result<usize> {
        let sets = &mut self.exercise_mut(index)?.sets;
        sets.push(CreateSet::default());
        Ok(sets.len() - 1)
    }

    /// Insert a copy of a set directly after it. Returns the copy's index.
    pub fn duplicate_set(&mut self, index: usize, set_index: usize) -> Result<usize> {
        let sets = &mut self.exercise_mut(index)?.sets;
        let copy = sets
            .get(set_index)
            .cloned()
            .ok_or_else(|| set_out_of_range(set_index, sets.len()))?;
        sets.insert(set_index + 1, copy);
        Ok(set_index + 1)
    }

    /// Delete a set from an entry.
    pub fn remove_set(&mut self, index: usize, set_index: usize) -> Result<CreateSet> {
        let sets = &mut self.exercise_mut(index)?.sets;
        if set_index >= sets.len() {
            return Err(set_out_of_range(set_index, sets.len()));
        }
        Ok(sets.remove(set_index))
    }

    /// Validate everything and produce the composed workout draft.
    ///
    /// # Errors
    ///
    /// Returns `WorkoutError::Validation` listing every failing field.
    pub fn finish(mut self) -> Result<CreateWorkout> {
        self.close_editor();

        let mut errors = validate_workout_name(&self.name);
        for (index, exercise) in self.exercises.iter().enumerate() {
            errors.0.extend(validate_exercise(index, exercise).0);
        }
        errors.into_result()?;

        Ok(CreateWorkout {
            name: self.name,
            tags: self.tags,
            exercises: self.exercises,
            ..Default::default()
        })
    }

    fn open_editor(&mut self, index: usize) {
        self.editing = Some(index);
        self.snapshot = self
            .options
            .revert_on_cancel
            .then(|| self.exercises[index].clone());
    }

    /// Leave edit mode, restoring the snapshot when reverting is enabled.
    fn close_editor(&mut self) {
        if let (Some(index), Some(snapshot)) = (self.editing.take(), self.snapshot.take()) {
            debug!("Reverting unsaved edits to exercise entry {index}");
            self.exercises[index] = snapshot;
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.exercises.len() {
            Ok(())
        } else {
            Err(WorkoutError::invalid_input("index").with_reason(format!(
                "Exercise {index} is out of range. There are {} exercises",
                self.exercises.len()
            )))
        }
    }

    fn check_editing(&self, index: usize) -> Result<()> {
        self.check_index(index)?;
        if self.editing == Some(index) {
            Ok(())
        } else {
            Err(WorkoutError::invalid_input("index")
                .with_reason(format!("Exercise {index} is not being edited")))
        }
    }
}

fn set_out_of_range(set_index: usize, len: usize) -> WorkoutError {
    WorkoutError::invalid_input("set_index").with_reason(format!(
        "Set {set_index} is out of range. The exercise has {len} sets"
    ))
}
