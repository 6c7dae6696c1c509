//! Promotion of drafts into finalized entities.
//!
//! Each function is a field-for-field copy plus identity, owner references,
//! 1-based order and the shared creation timestamp.

use std::sync::Arc;

use jiff::Timestamp;
use uuid::Uuid;

use crate::models::{
    count, normalize_tags, Circuit, CreateCircuit, CreateExercise, CreateSet, CreateWorkout,
    Exercise, Set, Workout,
};

pub(super) fn workout(draft: CreateWorkout, now: Timestamp) -> Workout {
    let id = Uuid::new_v4();
    let CreateWorkout {
        name,
        notes,
        tags,
        duration,
        exercises,
        circuits,
    } = draft;

    Workout {
        id,
        name,
        notes,
        tags: normalize_tags(tags),
        duration,
        exercises: exercises
            .into_iter()
            .enumerate()
            .map(|(i, draft)| Arc::new(exercise(draft, id, None, order_of(i), now)))
            .collect(),
        circuits: circuits
            .into_iter()
            .enumerate()
            .map(|(i, draft)| Arc::new(circuit(draft, id, order_of(i), now)))
            .collect(),
        completed: false,
        status: None,
        created_at: now,
        updated_at: now,
    }
}

fn circuit(draft: CreateCircuit, workout_id: Uuid, order: u32, now: Timestamp) -> Circuit {
    let id = Uuid::new_v4();
    let CreateCircuit {
        name,
        phase,
        rounds,
        rest_between_exercises,
        rest_between_rounds,
        notes,
        exercises,
    } = draft;

    Circuit {
        id,
        workout_id,
        name,
        phase,
        order,
        exercises: exercises
            .into_iter()
            .enumerate()
            .map(|(i, draft)| Arc::new(exercise(draft, workout_id, Some(id), order_of(i), now)))
            .collect(),
        rounds: rounds.max(1),
        rest_between_exercises,
        rest_between_rounds,
        notes,
        comments: None,
        completed: false,
        status: None,
        created_at: now,
        updated_at: now,
    }
}

fn exercise(
    draft: CreateExercise,
    workout_id: Uuid,
    circuit_id: Option<Uuid>,
    order: u32,
    now: Timestamp,
) -> Exercise {
    let id = Uuid::new_v4();
    let CreateExercise {
        name,
        phase,
        exercise_type,
        muscle_groups,
        equipment,
        is_bodyweight,
        weight_unit,
        instructions,
        video_url,
        notes,
        sets,
    } = draft;

    Exercise {
        id,
        workout_id,
        circuit_id,
        name,
        phase,
        order,
        exercise_type,
        muscle_groups,
        equipment,
        is_bodyweight,
        weight_unit,
        instructions,
        video_url,
        notes,
        comments: None,
        sets: sets
            .into_iter()
            .enumerate()
            .map(|(i, draft)| Arc::new(set(draft, id, order_of(i), now)))
            .collect(),
        completed: false,
        status: None,
        created_at: now,
        updated_at: now,
    }
}

fn set(draft: CreateSet, exercise_id: Uuid, order: u32, now: Timestamp) -> Set {
    let CreateSet {
        reps,
        target_reps,
        duration,
        weight,
        rest_time,
        notes,
    } = draft;

    Set {
        id: Uuid::new_v4(),
        exercise_id,
        order,
        reps,
        target_reps,
        duration,
        weight,
        rest_time,
        notes,
        comments: None,
        completed: false,
        status: None,
        created_at: now,
        updated_at: now,
    }
}

/// 1-based order for the entry at `index`.
fn order_of(index: usize) -> u32 {
    count(index).saturating_add(1)
}
