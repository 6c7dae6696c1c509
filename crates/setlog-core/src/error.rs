//! Error types for the workout library.

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// Comprehensive error type for all store and composition operations.
#[derive(Error, Debug)]
pub enum WorkoutError {
    /// Workout not found for the given ID
    #[error("Workout with ID {id} not found")]
    WorkoutNotFound { id: Uuid },
    /// Exercise not found within the given workout
    #[error("Exercise with ID {id} not found in workout {workout_id}")]
    ExerciseNotFound { workout_id: Uuid, id: Uuid },
    /// Circuit not found within the given workout
    #[error("Circuit with ID {id} not found in workout {workout_id}")]
    CircuitNotFound { workout_id: Uuid, id: Uuid },
    /// Set not found within the given exercise
    #[error("Set with ID {id} not found in exercise {exercise_id}")]
    SetNotFound { exercise_id: Uuid, id: Uuid },
    /// One or more user-correctable form fields failed validation
    #[error("Validation failed: {errors}")]
    Validation { errors: ValidationErrors },
    /// Invalid input supplied by the caller
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// A single field-scoped validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form path of the offending field, e.g. `exercises.0.sets.1.target_reps`
    pub field: String,
    /// Message shown inline next to the field
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every validation failure found in one pass over a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    /// Record a failure for `field`.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Look up the message recorded for a field path, if any.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Turn the collected failures into a result: `Ok` when nothing failed.
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(WorkoutError::Validation { errors: self })
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WorkoutError {
        WorkoutError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl WorkoutError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether this error reports an id-keyed target that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            WorkoutError::WorkoutNotFound { .. }
                | WorkoutError::ExerciseNotFound { .. }
                | WorkoutError::CircuitNotFound { .. }
                | WorkoutError::SetNotFound { .. }
        )
    }

    /// Field-scoped failures carried by a validation error.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            WorkoutError::Validation { errors } => Some(errors),
            _ => None,
        }
    }
}

/// Result type alias for workout operations
pub type Result<T> = std::result::Result<T, WorkoutError>;
