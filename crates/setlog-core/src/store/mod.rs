//! In-memory workout store.
//!
//! [`WorkoutStore`] owns every finalized workout plus a single draft slot.
//! It is an explicit instance: build one with [`StoreBuilder`] when the
//! application starts and hand it to consumers by reference. Tests build
//! their own isolated stores.
//!
//! # Structural sharing
//!
//! The store never mutates a nested entity in place. A mutation copies the
//! targeted entity, applies the change, and rebuilds each ancestor on the
//! path (workout → exercise/circuit → set) around the new child. Every other
//! `Arc` is carried over untouched:
//!
//! ```text
//!   before                      after update_set(w1, e2, s1)
//!   w1 ─┬─ e1 ── s…             w1' ─┬─ e1 ── s…      (e1 shared)
//!       └─ e2 ─┬─ s1                 └─ e2' ─┬─ s1'   (new path)
//!              └─ s2                         └─ s2    (s2 shared)
//!   w2 ── …                     w2 ── …               (w2 shared)
//! ```
//!
//! Consumers holding an earlier `Arc` can therefore compare pointers with
//! [`Arc::ptr_eq`] to decide whether a subtree changed.
//!
//! # Missing targets
//!
//! Id-keyed operations report absent targets according to
//! [`MissingTarget`]: `Strict` returns a not-found error, `Lenient` turns the
//! operation into a silent no-op (logged at debug level) and yields `Ok(None)`.
//!
//! # Example
//!
//! ```rust
//! use setlog_core::{models::SetPatch, StoreBuilder};
//!
//! # fn example() -> setlog_core::Result<()> {
//! let mut store = StoreBuilder::new().build();
//!
//! let workout = store.add_workout("Leg Day");
//! let squat = store.add_exercise(workout.id, "Squat")?.expect("strict store");
//! let set = store
//!     .add_set(workout.id, squat.id, SetPatch { target_reps: Some(8), ..Default::default() })?
//!     .expect("strict store");
//!
//! assert_eq!(set.order, 1);
//! assert_eq!(set.reps, Some(0));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use std::{fmt, sync::Arc};

use log::debug;
use uuid::Uuid;

use crate::{
    error::{Result, WorkoutError},
    models::{Circuit, CreateWorkout, Exercise, Set, Workout, WorkoutSummary},
};

pub mod builder;
pub mod circuit_ops;
pub mod events;
pub mod exercise_ops;
mod path;
mod promote;
pub mod set_ops;
pub mod workout_ops;


pub use builder::StoreBuilder;
pub use events::{StoreEvent, SubscriptionId};

/// How id-keyed operations treat a target that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingTarget {
    /// Return a `*NotFound` error
    #[default]
    Strict,

    /// Do nothing and return `Ok(None)`, logging the miss at debug level
    Lenient,
}

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// Process-wide container for workouts and the pending draft.
pub struct WorkoutStore {
    workouts: Vec<Arc<Workout>>,
    draft: Option<CreateWorkout>,
    revision: u64,
    missing_target: MissingTarget,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl WorkoutStore {
    pub(crate) fn new(missing_target: MissingTarget) -> Self {
        Self {
            workouts: Vec::new(),
            draft: None,
            revision: 0,
            missing_target,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// All finalized workouts, in insertion order.
    pub fn workouts(&self) -> &[Arc<Workout>] {
        &self.workouts
    }

    /// Look up a workout by ID.
    pub fn workout(&self, id: Uuid) -> Option<&Arc<Workout>> {
        self.workouts.iter().find(|workout| workout.id == id)
    }

    /// The pending draft, if one has been started.
    pub fn draft_workout(&self) -> Option<&CreateWorkout> {
        self.draft.as_ref()
    }

    /// Counter bumped by every mutation that changed the store.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The policy this store applies to missing targets.
    pub fn missing_target(&self) -> MissingTarget {
        self.missing_target
    }

    /// Summaries of all workouts, in insertion order.
    pub fn summaries(&self) -> Vec<WorkoutSummary> {
        self.workouts
            .iter()
            .map(|workout| WorkoutSummary::from(workout.as_ref()))
            .collect()
    }

    /// Register a listener called synchronously after every mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        self.listeners.len() != before
    }

    /// Record a completed mutation and notify listeners.
    fn commit(&mut self, event: StoreEvent) {
        self.revision += 1;
        debug!("Store revision {}: {:?}", self.revision, event);
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }

    /// Resolve a miss according to the configured policy.
    fn missing<T>(&self, error: WorkoutError) -> Result<Option<T>> {
        match self.missing_target {
            MissingTarget::Strict => Err(error),
            MissingTarget::Lenient => {
                debug!("Ignoring operation on missing target: {error}");
                Ok(None)
            }
        }
    }

    fn locate_workout(&self, workout_id: Uuid) -> std::result::Result<usize, WorkoutError> {
        path::position(&self.workouts, workout_id)
            .ok_or(WorkoutError::WorkoutNotFound { id: workout_id })
    }

    fn locate_exercise(
        &self,
        workout_id: Uuid,
        exercise_id: Uuid,
    ) -> std::result::Result<(usize, usize), WorkoutError> {
        let wi = self.locate_workout(workout_id)?;
        let ei = path::position(&self.workouts[wi].exercises, exercise_id).ok_or(
            WorkoutError::ExerciseNotFound {
                workout_id,
                id: exercise_id,
            },
        )?;
        Ok((wi, ei))
    }

    fn locate_circuit(
        &self,
        workout_id: Uuid,
        circuit_id: Uuid,
    ) -> std::result::Result<(usize, usize), WorkoutError> {
        let wi = self.locate_workout(workout_id)?;
        let ci = path::position(&self.workouts[wi].circuits, circuit_id).ok_or(
            WorkoutError::CircuitNotFound {
                workout_id,
                id: circuit_id,
            },
        )?;
        Ok((wi, ci))
    }

    fn locate_set(
        &self,
        workout_id: Uuid,
        exercise_id: Uuid,
        set_id: Uuid,
    ) -> std::result::Result<(usize, usize, usize), WorkoutError> {
        let (wi, ei) = self.locate_exercise(workout_id, exercise_id)?;
        let si = path::position(&self.workouts[wi].exercises[ei].sets, set_id).ok_or(
            WorkoutError::SetNotFound {
                exercise_id,
                id: set_id,
            },
        )?;
        Ok((wi, ei, si))
    }

    // Update-path helpers. Each rebuilds the addressed node from a copy and
    // then rebuilds its ancestors around it; siblings keep their `Arc`s.

    fn rewrite_workout(&mut self, wi: usize, edit: impl FnOnce(&mut Workout)) -> Arc<Workout> {
        let (workouts, workout) = path::rebuild_at(&self.workouts, wi, edit);
        self.workouts = workouts;
        workout
    }

    fn rewrite_exercise(
        &mut self,
        wi: usize,
        ei: usize,
        edit: impl FnOnce(&mut Exercise),
    ) -> Arc<Exercise> {
        let (exercises, exercise) = path::rebuild_at(&self.workouts[wi].exercises, ei, edit);
        self.rewrite_workout(wi, |workout| workout.exercises = exercises);
        exercise
    }

    fn rewrite_circuit(
        &mut self,
        wi: usize,
        ci: usize,
        edit: impl FnOnce(&mut Circuit),
    ) -> Arc<Circuit> {
        let (circuits, circuit) = path::rebuild_at(&self.workouts[wi].circuits, ci, edit);
        self.rewrite_workout(wi, |workout| workout.circuits = circuits);
        circuit
    }

    fn rewrite_set(
        &mut self,
        wi: usize,
        ei: usize,
        si: usize,
        edit: impl FnOnce(&mut Set),
    ) -> Arc<Set> {
        let (sets, set) = path::rebuild_at(&self.workouts[wi].exercises[ei].sets, si, edit);
        self.rewrite_exercise(wi, ei, |exercise| exercise.sets = sets);
        set
    }
}

impl Default for WorkoutStore {
    fn default() -> Self {
        Self::new(MissingTarget::default())
    }
}

impl fmt::Debug for WorkoutStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkoutStore")
            .field("workouts", &self.workouts)
            .field("draft", &self.draft)
            .field("revision", &self.revision)
            .field("missing_target", &self.missing_target)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
