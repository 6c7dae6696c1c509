use std::{fs, path::PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;

/// Helper function to create a Command with --no-color flag for testing
fn setlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("setlog").expect("Failed to find setlog binary");
    cmd.arg("--no-color");
    cmd
}

/// Write a workout definition into the temp dir and return its path.
fn write_workout(dir: &TempDir, file_name: &str, definition: &Value) -> PathBuf {
    let path = dir.path().join(file_name);
    fs::write(&path, definition.to_string()).expect("Failed to write workout file");
    path
}

fn leg_day() -> Value {
    json!({
        "name": "Leg Day",
        "tags": ["legs", " strength ", "legs"],
        "exercises": [
            {
                "name": "Bike",
                "phase": "warmup",
                "type": "cardio",
                "sets": [{ "target_reps": 1, "duration": 300 }]
            },
            {
                "name": "Squat",
                "sets": [
                    { "target_reps": 8, "weight": 135.0 },
                    { "target_reps": 8, "weight": 155.0 }
                ]
            }
        ],
        "circuits": [
            {
                "name": "Finisher",
                "rounds": 3,
                "exercises": [{ "name": "Wall Sit", "sets": [{ "target_reps": 1, "duration": 45 }] }]
            }
        ]
    })
}

#[test]
fn test_cli_show_workout() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let path = write_workout(&dir, "leg_day.json", &leg_day());

    setlog_cmd()
        .arg("show")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Leg Day\n"))
        .stdout(predicate::str::contains("- Tags: legs, strength"))
        .stdout(predicate::str::contains("## Warm-up"))
        .stdout(predicate::str::contains("1. 8 reps @ 135 lbs"))
        .stdout(predicate::str::contains("Finisher (circuit, 3 rounds)"));
}

#[test]
fn test_cli_list_multiple_files() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let first = write_workout(&dir, "leg_day.json", &leg_day());
    let second = write_workout(
        &dir,
        "push.json",
        &json!({
            "name": "Push Day",
            "exercises": [{ "name": "Bench", "sets": [{ "target_reps": 5, "weight": 185 }] }]
        }),
    );

    setlog_cmd()
        .arg("list")
        .args([&first, &second])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Leg Day"))
        .stdout(predicate::str::contains("(0/4 sets)"))
        .stdout(predicate::str::contains("## Push Day"))
        .stdout(predicate::str::contains("1 exercise, 0 circuits"));
}

#[test]
fn test_cli_export_assigns_identity() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let path = write_workout(&dir, "leg_day.json", &leg_day());

    let output = setlog_cmd()
        .arg("export")
        .arg(&path)
        .output()
        .expect("Failed to run setlog");
    assert!(output.status.success());

    let workouts: Value = serde_json::from_slice(&output.stdout).expect("Export should be JSON");
    let workout = &workouts[0];
    assert_eq!(workout["tags"], json!(["legs", "strength"]));

    let squat = &workout["exercises"][1];
    assert_eq!(squat["workout_id"], workout["id"]);
    assert_eq!(squat["order"], 2);
    assert_eq!(squat["sets"][1]["order"], 2);
    assert_eq!(squat["sets"][1]["exercise_id"], squat["id"]);

    let circuit = &workout["circuits"][0];
    assert_eq!(circuit["exercises"][0]["circuit_id"], circuit["id"]);
}

#[test]
fn test_cli_rejects_invalid_exercise() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let path = write_workout(
        &dir,
        "broken.json",
        &json!({
            "name": "Leg Day",
            "exercises": [{ "name": "Squat", "sets": [{ "weight": 135 }] }]
        }),
    );

    setlog_cmd()
        .arg("show")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid workout in"))
        .stderr(predicate::str::contains("exercises.0.sets.0.target_reps"));
}

#[test]
fn test_cli_rejects_invalid_circuit_exercise() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let path = write_workout(
        &dir,
        "circuit.json",
        &json!({
            "name": "Conditioning",
            "circuits": [
                {
                    "name": "Finisher",
                    "exercises": [{ "name": "", "sets": [{ "weight": 10.0 }] }]
                }
            ]
        }),
    );

    setlog_cmd()
        .arg("show")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid workout in"))
        .stderr(predicate::str::contains("circuits.0.exercises.0.name"))
        .stderr(predicate::str::contains(
            "circuits.0.exercises.0.sets.0.target_reps",
        ));
}

#[test]
fn test_cli_has_no_missing_target_flag() {
    setlog_cmd()
        .args(["--lenient", "tags"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument '--lenient'"));
}

#[test]
fn test_cli_missing_file() {
    setlog_cmd()
        .args(["show", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read does-not-exist.json"));
}

#[test]
fn test_cli_malformed_json() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ not json").unwrap();

    setlog_cmd()
        .arg("list")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse workout file"));
}

#[test]
fn test_cli_tags_filter() {
    setlog_cmd()
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Full Body (`full-body`)"))
        .stdout(predicate::str::contains("- Cardio (`cardio`)"));

    setlog_cmd()
        .args(["tags", "pu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Push"))
        .stdout(predicate::str::contains("Pull"))
        .stdout(predicate::str::contains("Legs").not());

    setlog_cmd()
        .args(["tags", "yoga"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching tags."));
}

#[test]
fn test_cli_draft_round_trips_through_show() {
    let output = setlog_cmd()
        .args(["draft", "Leg Day", "--tag", "legs", "-t", "strength", "--tag", "legs"])
        .output()
        .expect("Failed to run setlog");
    assert!(output.status.success());

    let draft: Value = serde_json::from_slice(&output.stdout).expect("Draft should be JSON");
    assert_eq!(draft["name"], "Leg Day");
    assert_eq!(draft["tags"], json!(["legs", "strength"]));
    assert_eq!(draft["exercises"], json!([]));

    let dir = TempDir::new().expect("Failed to create temporary directory");
    let path = write_workout(&dir, "draft.json", &draft);
    setlog_cmd()
        .arg("show")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No exercises in this workout."));
}

#[test]
fn test_cli_draft_requires_name() {
    setlog_cmd()
        .args(["draft", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Workout name is required"));
}
