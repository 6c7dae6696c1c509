//! Tests for the composition flow.

use super::*;
use crate::{
    error::WorkoutError,
    models::{CreateCircuit, CreateExercise, CreateSet, ExerciseType, Phase, WeightUnit},
    store::StoreBuilder,
};

/// Composer holding one saved "Squat" entry with a single 8 x 135 set.
fn composer_with_squat() -> ExerciseComposer {
    let mut composer = ExerciseComposer::new("Leg Day", vec!["legs".into()]);
    let index = composer.start_exercise();
    let squat = composer.exercise_mut(index).expect("Entry should exist");
    squat.name = "Squat".to_string();
    squat.sets[0].target_reps = Some(8);
    squat.sets[0].weight = Some(135.0);
    composer.save(index).expect("Squat should save");
    composer
}

#[test]
fn test_workout_form_requires_name() {
    let mut store = StoreBuilder::new().build();
    let mut form = WorkoutForm::new();
    form.toggle_tag("legs");

    let err = form.submit(&mut store).unwrap_err();
    let errors = err.validation_errors().expect("Should be a validation error");
    assert_eq!(errors.message_for("name"), Some("Workout name is required"));
    assert!(store.draft_workout().is_none());
    // Form keeps its input after a failed submit
    assert_eq!(form.tags, vec!["legs".to_string()]);
}

#[test]
fn test_workout_form_submit_writes_draft_and_resets() {
    let mut store = StoreBuilder::new().build();
    let mut form = WorkoutForm::new();
    form.name = "Leg Day".to_string();
    assert!(form.toggle_tag("legs"));
    assert!(form.toggle_tag("strength"));
    assert!(form.toggle_tag("cardio"));
    assert!(!form.toggle_tag("cardio"));

    form.submit(&mut store).expect("Submit should succeed");

    let draft = store.draft_workout().expect("Draft should exist");
    assert_eq!(draft.name, "Leg Day");
    assert_eq!(draft.tags, vec!["legs".to_string(), "strength".to_string()]);
    assert_eq!(form, WorkoutForm::default());
}

#[test]
fn test_composer_seeds_from_draft_without_touching_it() {
    let mut store = StoreBuilder::new().build();
    assert!(ExerciseComposer::from_store(&store).is_none());

    let mut form = WorkoutForm {
        name: "Leg Day".to_string(),
        tags: vec!["legs".into(), "strength".into()],
    };
    form.submit(&mut store).expect("Submit should succeed");

    let mut composer = ExerciseComposer::from_store(&store).expect("Draft should exist");
    assert_eq!(composer.name(), "Leg Day");
    assert_eq!(composer.tags(), ["legs".to_string(), "strength".to_string()]);

    composer.start_exercise();
    assert!(store
        .draft_workout()
        .expect("Draft should exist")
        .exercises
        .is_empty());
}

#[test]
fn test_start_exercise_appends_blank_entry_in_edit_mode() {
    let mut composer = ExerciseComposer::new("Leg Day", vec![]);
    assert!(composer.can_add_exercise());

    let index = composer.start_exercise();
    assert_eq!(index, 0);
    assert_eq!(composer.editing_index(), Some(0));
    assert_eq!(composer.state(0).unwrap(), EditorState::Editing);
    assert!(!composer.can_add_exercise());

    let entry = composer.exercise(0).unwrap();
    assert_eq!(entry.phase, Phase::Main);
    assert_eq!(entry.exercise_type, ExerciseType::Strength);
    assert_eq!(entry.weight_unit, Some(WeightUnit::Lbs));
    assert_eq!(entry.is_bodyweight, Some(false));
    assert_eq!(entry.sets, vec![CreateSet::default()]);
}

#[test]
fn test_end_to_end_squat_entry() {
    let composer = composer_with_squat();

    assert_eq!(composer.len(), 1);
    assert_eq!(composer.editing_index(), None);
    assert_eq!(composer.state(0).unwrap(), EditorState::Viewing);

    let card = composer.card(0).unwrap();
    assert_eq!(card.title(), "Squat");
    assert_eq!(card.subtitle(), "strength • 1 set");
}

#[test]
fn test_save_blocks_on_missing_fields() {
    let mut composer = ExerciseComposer::new("Leg Day", vec![]);
    let index = composer.start_exercise();
    composer.add_set(index).unwrap();

    let err = composer.save(index).unwrap_err();
    let errors = err.validation_errors().expect("Should be a validation error");
    assert_eq!(errors.len(), 3);
    assert_eq!(
        errors.message_for("exercises.0.name"),
        Some("Exercise name is required")
    );
    assert_eq!(
        errors.message_for("exercises.0.sets.1.target_reps"),
        Some("reps are required")
    );
    assert_eq!(composer.editing_index(), Some(index));
}

#[test]
fn test_save_requires_entry_in_edit_mode() {
    let mut composer = composer_with_squat();
    let err = composer.save(0).unwrap_err();
    assert!(matches!(err, WorkoutError::InvalidInput { .. }));

    let err = composer.edit(5).unwrap_err();
    assert!(matches!(err, WorkoutError::InvalidInput { ref field, .. } if field == "index"));
}

#[test]
fn test_removing_only_entry_being_edited_clears_editor() {
    let mut composer = ExerciseComposer::new("Leg Day", vec![]);
    let index = composer.start_exercise();

    composer.remove(index).expect("Remove should succeed");
    assert_eq!(composer.editing_index(), None);
    assert!(composer.is_empty());
}

#[test]
fn test_editing_is_exclusive() {
    let mut composer = composer_with_squat();
    let second = composer.start_exercise();
    assert_eq!(composer.editing_index(), Some(second));

    // Typed but unsaved input on the second entry
    composer.exercise_mut(second).unwrap().name = "Lunge".to_string();

    composer.edit(0).unwrap();
    assert_eq!(composer.editing_index(), Some(0));
    assert_eq!(composer.state(second).unwrap(), EditorState::Viewing);
    // Without reverting, the abandoned input stays in the form state
    assert_eq!(composer.exercise(second).unwrap().name, "Lunge");
}

#[test]
fn test_cancel_keeps_typed_edits_by_default() {
    let mut composer = composer_with_squat();
    composer.edit(0).unwrap();
    composer.exercise_mut(0).unwrap().name = "Front Squat".to_string();

    composer.cancel(0).unwrap();
    assert_eq!(composer.editing_index(), None);
    assert_eq!(composer.exercise(0).unwrap().name, "Front Squat");
}

#[test]
fn test_cancel_reverts_when_enabled() {
    let mut composer = composer_with_squat().with_options(ComposerOptions {
        revert_on_cancel: true,
    });
    composer.edit(0).unwrap();
    composer.exercise_mut(0).unwrap().name = "Front Squat".to_string();
    composer.add_set(0).unwrap();

    composer.cancel(0).unwrap();
    let squat = composer.exercise(0).unwrap();
    assert_eq!(squat.name, "Squat");
    assert_eq!(squat.sets.len(), 1);

    // Switching to another entry also abandons the open edits
    composer.edit(0).unwrap();
    composer.exercise_mut(0).unwrap().notes = Some("Belt".to_string());
    composer.start_exercise();
    assert_eq!(composer.exercise(0).unwrap().notes, None);
}

#[test]
fn test_duplicate_set_inserts_copy_after_source() {
    let mut composer = composer_with_squat();
    let second = composer.add_set(0).unwrap();
    assert_eq!(second, 1);
    {
        let sets = &mut composer.exercise_mut(0).unwrap().sets;
        sets[1].target_reps = Some(5);
        sets[1].weight = Some(185.0);
    }

    let copy = composer.duplicate_set(0, 0).unwrap();
    assert_eq!(copy, 1);

    let sets = &composer.exercise(0).unwrap().sets;
    assert_eq!(sets.len(), 3);
    assert_eq!(sets[1], sets[0]);
    assert_eq!(sets[2].target_reps, Some(5));
    assert_eq!(sets[2].weight, Some(185.0));
}

#[test]
fn test_duplicate_is_independent_of_source() {
    let mut composer = composer_with_squat();
    composer.duplicate_set(0, 0).unwrap();
    composer.exercise_mut(0).unwrap().sets[1].weight = Some(155.0);

    let sets = &composer.exercise(0).unwrap().sets;
    assert_eq!(sets[0].weight, Some(135.0));
    assert_eq!(sets[1].weight, Some(155.0));
}

#[test]
fn test_set_index_out_of_range() {
    let mut composer = composer_with_squat();
    let err = composer.duplicate_set(0, 3).unwrap_err();
    assert!(matches!(err, WorkoutError::InvalidInput { ref field, .. } if field == "set_index"));

    let removed = composer.remove_set(0, 0).unwrap();
    assert_eq!(removed.target_reps, Some(8));
    assert!(composer.exercise(0).unwrap().sets.is_empty());
    assert!(composer.remove_set(0, 0).is_err());
}

#[test]
fn test_finish_and_promote() {
    let mut store = StoreBuilder::new().build();
    let composer = composer_with_squat();

    let draft = composer.finish().expect("Composition should be valid");
    assert_eq!(draft.name, "Leg Day");
    assert_eq!(draft.exercises.len(), 1);

    let workout = store.create_workout(draft);
    assert_eq!(workout.exercises[0].name, "Squat");
    assert_eq!(workout.exercises[0].sets[0].target_reps, Some(8));
    assert_eq!(workout.exercises[0].sets[0].weight, Some(135.0));
    assert_eq!(workout.tags, vec!["legs".to_string()]);
}

#[test]
fn test_finish_reports_every_invalid_entry() {
    let mut composer = composer_with_squat();
    composer.start_exercise();
    composer.exercise_mut(0).unwrap().sets[0].target_reps = None;

    let err = composer.finish().unwrap_err();
    let errors = err.validation_errors().expect("Should be a validation error");
    assert!(errors.message_for("exercises.0.sets.0.target_reps").is_some());
    assert!(errors.message_for("exercises.1.name").is_some());
}

#[test]
fn test_validate_circuits_uses_circuit_paths() {
    let circuits = vec![
        CreateCircuit {
            name: "Warm-up Flow".to_string(),
            exercises: vec![CreateExercise {
                name: "Jumping Jacks".to_string(),
                sets: vec![CreateSet {
                    target_reps: Some(20),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        },
        CreateCircuit {
            name: "Finisher".to_string(),
            exercises: vec![
                CreateExercise {
                    name: "Burpees".to_string(),
                    ..Default::default()
                },
                CreateExercise {
                    name: " ".to_string(),
                    sets: vec![CreateSet {
                        weight: Some(10.0),
                        ..Default::default()
                    }],
                    ..Default::default()
                },
            ],
            ..Default::default()
        },
    ];

    let errors = validate_circuits(&circuits);
    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors.message_for("circuits.1.exercises.1.name"),
        Some("Exercise name is required")
    );
    assert_eq!(
        errors.message_for("circuits.1.exercises.1.sets.0.target_reps"),
        Some("reps are required")
    );
    assert!(validate_circuits(&circuits[..1]).is_empty());
}

#[test]
fn test_filter_tags() {
    assert_eq!(filter_tags("").len(), TAG_OPTIONS.len());
    let values: Vec<_> = filter_tags("PUS").iter().map(|tag| tag.value).collect();
    assert_eq!(values, vec!["push"]);
    assert!(filter_tags("yoga").is_empty());
}
