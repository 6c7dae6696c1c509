use std::{cell::RefCell, rc::Rc};

use setlog_core::{
    models::{CreateCircuit, CreateExercise, CreateSet, CreateWorkout, Phase},
    StoreBuilder, StoreEvent, WorkoutStore,
};

/// Strict store with an event log attached.
pub fn create_test_store() -> (WorkoutStore, Rc<RefCell<Vec<StoreEvent>>>) {
    let mut store = StoreBuilder::new().build();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    store.subscribe(move |event| sink.borrow_mut().push(event.clone()));
    (store, events)
}

/// A composed "Leg Day" with a warm-up, two main lifts and a finisher circuit.
pub fn leg_day() -> CreateWorkout {
    let set = |target_reps: u32, weight: f64| CreateSet {
        target_reps: Some(target_reps),
        weight: Some(weight),
        ..Default::default()
    };

    CreateWorkout {
        name: "Leg Day".to_string(),
        tags: vec!["legs".to_string(), "strength".to_string()],
        exercises: vec![
            CreateExercise {
                name: "Bike".to_string(),
                phase: Phase::Warmup,
                sets: vec![CreateSet {
                    duration: Some(300),
                    ..Default::default()
                }],
                ..Default::default()
            },
            CreateExercise {
                name: "Squat".to_string(),
                sets: vec![set(8, 135.0), set(8, 155.0), set(6, 175.0)],
                ..Default::default()
            },
            CreateExercise {
                name: "Romanian Deadlift".to_string(),
                sets: vec![set(10, 115.0)],
                ..Default::default()
            },
        ],
        circuits: vec![CreateCircuit {
            name: "Finisher".to_string(),
            rounds: 3,
            exercises: vec![
                CreateExercise {
                    name: "Jump Squat".to_string(),
                    sets: vec![set(15, 0.0)],
                    ..Default::default()
                },
                CreateExercise {
                    name: "Wall Sit".to_string(),
                    sets: vec![CreateSet {
                        duration: Some(45),
                        ..Default::default()
                    }],
                    ..Default::default()
                },
            ],
            ..Default::default()
        }],
        ..Default::default()
    }
}
