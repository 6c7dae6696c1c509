use std::sync::Arc;

use jiff::Timestamp;
use uuid::Uuid;

use super::*;

fn fixed_time() -> Timestamp {
    Timestamp::from_second(1_735_689_600).unwrap() // 2025-01-01 00:00:00 UTC
}

fn create_test_set(exercise_id: Uuid, order: u32, completed: bool) -> Arc<Set> {
    Arc::new(Set {
        id: Uuid::new_v4(),
        exercise_id,
        order,
        reps: Some(0),
        target_reps: Some(8),
        duration: None,
        weight: Some(135.0),
        rest_time: None,
        notes: None,
        comments: None,
        completed,
        status: None,
        created_at: fixed_time(),
        updated_at: fixed_time(),
    })
}

fn create_test_exercise(workout_id: Uuid, name: &str, completed_sets: &[bool]) -> Arc<Exercise> {
    let id = Uuid::new_v4();
    Arc::new(Exercise {
        id,
        workout_id,
        circuit_id: None,
        name: name.to_string(),
        phase: Phase::Main,
        order: 1,
        exercise_type: ExerciseType::Strength,
        muscle_groups: vec!["quads".to_string()],
        equipment: Vec::new(),
        is_bodyweight: Some(false),
        weight_unit: Some(WeightUnit::Lbs),
        instructions: None,
        video_url: None,
        notes: None,
        comments: None,
        sets: completed_sets
            .iter()
            .enumerate()
            .map(|(i, done)| create_test_set(id, i as u32 + 1, *done))
            .collect(),
        completed: false,
        status: None,
        created_at: fixed_time(),
        updated_at: fixed_time(),
    })
}

fn create_test_workout() -> Workout {
    let id = Uuid::new_v4();
    let circuit_id = Uuid::new_v4();
    Workout {
        id,
        name: "Leg Day".to_string(),
        notes: None,
        tags: vec!["legs".to_string()],
        duration: Some(3600),
        exercises: vec![
            create_test_exercise(id, "Squat", &[true, true, false]),
            create_test_exercise(id, "Lunge", &[false]),
        ],
        circuits: vec![Arc::new(Circuit {
            id: circuit_id,
            workout_id: id,
            name: "Finisher".to_string(),
            phase: Phase::Cooldown,
            order: 3,
            exercises: vec![create_test_exercise(id, "Wall Sit", &[true])],
            rounds: 2,
            rest_between_exercises: None,
            rest_between_rounds: Some(60),
            notes: None,
            comments: None,
            completed: false,
            status: None,
            created_at: fixed_time(),
            updated_at: fixed_time(),
        })],
        completed: false,
        status: Some(Status::InProgress),
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

#[test]
fn test_summary_counts_circuit_members() {
    let workout = create_test_workout();
    let summary = WorkoutSummary::from(&workout);

    assert_eq!(summary.name, "Leg Day");
    assert_eq!(summary.total_exercises, 3);
    assert_eq!(summary.total_circuits, 1);
    assert_eq!(summary.total_sets, 5);
    assert_eq!(summary.completed_sets, 3);
    assert_eq!(summary.created_at, fixed_time());
}

#[test]
fn test_lookup_helpers() {
    let workout = create_test_workout();
    let squat = &workout.exercises[0];
    let circuit = &workout.circuits[0];

    assert_eq!(workout.exercise(squat.id).map(|e| e.name.as_str()), Some("Squat"));
    assert!(workout.exercise(circuit.exercises[0].id).is_none());
    assert_eq!(workout.circuit(circuit.id).map(|c| c.rounds), Some(2));
    assert_eq!(squat.set(squat.sets[1].id).map(|s| s.order), Some(2));
    assert_eq!(squat.completed_sets(), 2);

    let names: Vec<_> = workout.all_exercises().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Squat", "Lunge", "Wall Sit"]);
    assert_eq!(Identified::id(&workout), workout.id);
}

#[test]
fn test_exercise_serializes_type_key() {
    let workout = create_test_workout();
    let json = serde_json::to_value(&*workout.exercises[0]).unwrap();

    assert_eq!(json["type"], "strength");
    assert_eq!(json["phase"], "main");
    assert_eq!(json["weight_unit"], "lbs");
    assert!(json.get("exercise_type").is_none());
    assert!(json.get("notes").is_none());
    assert_eq!(json["sets"][0]["weight"], 135.0);
}

#[test]
fn test_workout_json_round_trip() {
    let workout = create_test_workout();
    let json = serde_json::to_string(&workout).unwrap();
    let parsed: Workout = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, workout);
    assert!(json.contains("\"status\":\"in_progress\""));
}

#[test]
fn test_draft_defaults_from_minimal_json() {
    let draft: CreateWorkout = serde_json::from_str(
        r#"{
            "name": "Leg Day",
            "exercises": [{ "name": "Squat", "sets": [{ "target_reps": 8 }] }],
            "circuits": [{ "name": "Finisher" }]
        }"#,
    )
    .unwrap();

    assert!(draft.tags.is_empty());
    let squat = &draft.exercises[0];
    assert_eq!(squat.phase, Phase::Main);
    assert_eq!(squat.exercise_type, ExerciseType::Strength);
    assert_eq!(squat.weight_unit, None);
    assert_eq!(squat.sets[0].target_reps, Some(8));
    assert_eq!(draft.circuits[0].rounds, 1);
}

#[test]
fn test_enum_parsing() {
    assert_eq!("in_progress".parse::<Status>(), Ok(Status::InProgress));
    assert_eq!("DONE".parse::<Status>(), Ok(Status::Completed));
    assert_eq!("warm-up".parse::<Phase>(), Ok(Phase::Warmup));
    assert_eq!("Cardio".parse::<ExerciseType>(), Ok(ExerciseType::Cardio));
    assert_eq!("kg".parse::<WeightUnit>(), Ok(WeightUnit::Kg));
    assert!("stretching".parse::<ExerciseType>().is_err());
}

#[test]
fn test_phase_order_and_titles() {
    let titles: Vec<_> = Phase::ALL.iter().map(Phase::title).collect();
    assert_eq!(titles, vec!["Warm-up", "Main", "Cool-down"]);
}

#[test]
fn test_workout_patch_normalizes_tags() {
    let mut workout = create_test_workout();
    let changes = WorkoutPatch {
        tags: Some(vec![" push ".into(), "push".into(), "".into(), "upper".into()]),
        notes: Some("Heavy week".into()),
        ..Default::default()
    }
    .apply(&mut workout);

    assert_eq!(workout.tags, vec!["push".to_string(), "upper".to_string()]);
    assert_eq!(workout.notes.as_deref(), Some("Heavy week"));
    assert_eq!(workout.name, "Leg Day");
    assert_eq!(changes.len(), 2);
}

#[test]
fn test_draft_header_new() {
    let header = DraftHeader::new("Leg Day", ["legs", "strength"]);
    assert_eq!(header.name, "Leg Day");
    assert_eq!(header.tags, vec!["legs".to_string(), "strength".to_string()]);
}

#[test]
fn test_create_workout_from_json() {
    let draft = CreateWorkout::from_json(r#"{ "name": "Push Day", "tags": ["push"] }"#).unwrap();
    assert_eq!(draft.name, "Push Day");
    assert!(draft.exercises.is_empty());

    let err = CreateWorkout::from_json(r#"{ "tags": ["push"] }"#).unwrap_err();
    assert!(matches!(err, crate::error::WorkoutError::Serialization { .. }));
}

#[test]
fn test_count_saturates() {
    assert_eq!(count(0), 0);
    assert_eq!(count(42), 42);
    assert_eq!(count(usize::MAX), u32::MAX);
}
