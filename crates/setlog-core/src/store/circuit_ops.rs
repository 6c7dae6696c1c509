//! Circuit operations.

use std::sync::Arc;

use jiff::Timestamp;
use uuid::Uuid;

use super::{path, StoreEvent, WorkoutStore};
use crate::{
    error::Result,
    models::{count, Circuit, CircuitPatch, Phase},
};

impl WorkoutStore {
    /// Append a new, empty single-round circuit to a workout.
    pub fn add_circuit(
        &mut self,
        workout_id: Uuid,
        name: impl Into<String>,
    ) -> Result<Option<Arc<Circuit>>> {
        let wi = match self.locate_workout(workout_id) {
            Ok(wi) => wi,
            Err(error) => return self.missing(error),
        };

        let now = Timestamp::now();
        let circuit = Arc::new(Circuit {
            id: Uuid::new_v4(),
            workout_id,
            name: name.into(),
            phase: Phase::Main,
            order: count(self.workouts[wi].circuits.len()).saturating_add(1),
            exercises: Vec::new(),
            rounds: 1,
            rest_between_exercises: None,
            rest_between_rounds: None,
            notes: None,
            comments: None,
            completed: false,
            status: None,
            created_at: now,
            updated_at: now,
        });

        let added = Arc::clone(&circuit);
        self.rewrite_workout(wi, |workout| {
            workout.circuits = path::appended(&workout.circuits, added);
        });
        self.commit(StoreEvent::CircuitAdded {
            workout_id,
            circuit_id: circuit.id,
        });
        Ok(Some(circuit))
    }

    /// Remove a circuit, along with the exercises it contains.
    pub fn remove_circuit(
        &mut self,
        workout_id: Uuid,
        circuit_id: Uuid,
    ) -> Result<Option<Arc<Circuit>>> {
        let (wi, ci) = match self.locate_circuit(workout_id, circuit_id) {
            Ok(location) => location,
            Err(error) => return self.missing(error),
        };

        let (circuits, removed) = path::removed(&self.workouts[wi].circuits, ci);
        self.rewrite_workout(wi, |workout| workout.circuits = circuits);
        self.commit(StoreEvent::CircuitRemoved {
            workout_id,
            circuit_id,
        });
        Ok(Some(removed))
    }

    /// Merge `patch` into a circuit and refresh its `updated_at`.
    ///
    /// A `rounds` value of zero is raised to one.
    pub fn update_circuit(
        &mut self,
        workout_id: Uuid,
        circuit_id: Uuid,
        patch: CircuitPatch,
    ) -> Result<Option<Arc<Circuit>>> {
        let (wi, ci) = match self.locate_circuit(workout_id, circuit_id) {
            Ok(location) => location,
            Err(error) => return self.missing(error),
        };

        let mut changes = Vec::new();
        let circuit = self.rewrite_circuit(wi, ci, |circuit| {
            changes = patch.apply(circuit);
            circuit.rounds = circuit.rounds.max(1);
            circuit.updated_at = Timestamp::now();
        });
        self.commit(StoreEvent::CircuitUpdated {
            workout_id,
            circuit_id,
            changes,
        });
        Ok(Some(circuit))
    }
}
