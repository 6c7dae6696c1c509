//! Field-level validation for the authoring forms.
//!
//! Field paths mirror the form layout (`exercises.{i}.sets.{s}.target_reps`,
//! `circuits.{c}.exercises.{i}.name`) so a front end can place each message
//! next to its input.

use crate::{
    error::ValidationErrors,
    models::{CreateCircuit, CreateExercise},
};

pub const WORKOUT_NAME_REQUIRED: &str = "Workout name is required";
pub const EXERCISE_NAME_REQUIRED: &str = "Exercise name is required";
pub const REPS_REQUIRED: &str = "reps are required";

/// Check the name captured by the first creation step.
pub fn validate_workout_name(name: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    if name.trim().is_empty() {
        errors.push("name", WORKOUT_NAME_REQUIRED);
    }
    errors
}

/// Check one exercise entry at position `index` of the composer.
pub fn validate_exercise(index: usize, exercise: &CreateExercise) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    check_exercise(&format!("exercises.{index}"), exercise, &mut errors);
    errors
}

/// Check every exercise inside a workout's circuits, under
/// `circuits.{c}.exercises.{i}`.
pub fn validate_circuits(circuits: &[CreateCircuit]) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for (circuit_index, circuit) in circuits.iter().enumerate() {
        for (index, exercise) in circuit.exercises.iter().enumerate() {
            check_exercise(
                &format!("circuits.{circuit_index}.exercises.{index}"),
                exercise,
                &mut errors,
            );
        }
    }
    errors
}

fn check_exercise(prefix: &str, exercise: &CreateExercise, errors: &mut ValidationErrors) {
    if exercise.name.trim().is_empty() {
        errors.push(format!("{prefix}.name"), EXERCISE_NAME_REQUIRED);
    }
    for (set_index, set) in exercise.sets.iter().enumerate() {
        if set.target_reps.is_none() {
            errors.push(
                format!("{prefix}.sets.{set_index}.target_reps"),
                REPS_REQUIRED,
            );
        }
    }
}
