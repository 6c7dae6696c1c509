//! Change notifications emitted by the store.

use uuid::Uuid;

/// Handle returned by [`super::WorkoutStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(super) u64);

/// A completed store mutation and the IDs it touched.
///
/// `*Updated` events carry one line per patched field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    DraftSet,
    DraftCleared,
    WorkoutAdded {
        workout_id: Uuid,
    },
    WorkoutCreated {
        workout_id: Uuid,
    },
    WorkoutRemoved {
        workout_id: Uuid,
    },
    WorkoutUpdated {
        workout_id: Uuid,
        changes: Vec<String>,
    },
    ExerciseAdded {
        workout_id: Uuid,
        exercise_id: Uuid,
    },
    ExerciseRemoved {
        workout_id: Uuid,
        exercise_id: Uuid,
    },
    ExerciseUpdated {
        workout_id: Uuid,
        exercise_id: Uuid,
        changes: Vec<String>,
    },
    CircuitAdded {
        workout_id: Uuid,
        circuit_id: Uuid,
    },
    CircuitRemoved {
        workout_id: Uuid,
        circuit_id: Uuid,
    },
    CircuitUpdated {
        workout_id: Uuid,
        circuit_id: Uuid,
        changes: Vec<String>,
    },
    SetAdded {
        workout_id: Uuid,
        exercise_id: Uuid,
        set_id: Uuid,
    },
    SetRemoved {
        workout_id: Uuid,
        exercise_id: Uuid,
        set_id: Uuid,
    },
    SetUpdated {
        workout_id: Uuid,
        exercise_id: Uuid,
        set_id: Uuid,
        changes: Vec<String>,
    },
}

impl StoreEvent {
    /// The workout the event concerns, if any.
    pub fn workout_id(&self) -> Option<Uuid> {
        match self {
            StoreEvent::DraftSet | StoreEvent::DraftCleared => None,
            StoreEvent::WorkoutAdded { workout_id }
            | StoreEvent::WorkoutCreated { workout_id }
            | StoreEvent::WorkoutRemoved { workout_id }
            | StoreEvent::WorkoutUpdated { workout_id, .. }
            | StoreEvent::ExerciseAdded { workout_id, .. }
            | StoreEvent::ExerciseRemoved { workout_id, .. }
            | StoreEvent::ExerciseUpdated { workout_id, .. }
            | StoreEvent::CircuitAdded { workout_id, .. }
            | StoreEvent::CircuitRemoved { workout_id, .. }
            | StoreEvent::CircuitUpdated { workout_id, .. }
            | StoreEvent::SetAdded { workout_id, .. }
            | StoreEvent::SetRemoved { workout_id, .. }
            | StoreEvent::SetUpdated { workout_id, .. } => Some(*workout_id),
        }
    }
}
