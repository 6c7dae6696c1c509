//! Command handlers.
//!
//! Every file-based command replays the authoring flow on the file's
//! contents: the name and tags go through the workout form, each exercise
//! through the composer's editor, circuit members through the same exercise
//! checks, and the result is promoted into the store.

use std::{fs, path::Path, sync::Arc};

use anyhow::{Context, Result};
use log::{debug, info};
use setlog_core::{
    compose::{filter_tags, validate_circuits},
    display::WorkoutSummaries,
    models::CreateWorkout,
    ExerciseComposer, Workout, WorkoutForm, WorkoutStore,
};

use crate::renderer::TerminalRenderer;

pub struct Cli {
    store: WorkoutStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: WorkoutStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    pub fn show(&mut self, files: &[impl AsRef<Path>]) -> Result<()> {
        let workouts = self.load_all(files)?;
        let output = workouts
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        self.renderer.render(&output);
        Ok(())
    }

    pub fn list(&mut self, files: &[impl AsRef<Path>]) -> Result<()> {
        self.load_all(files)?;
        let summaries = WorkoutSummaries(self.store.summaries());
        self.renderer.render(&summaries.to_string());
        Ok(())
    }

    pub fn export(&mut self, files: &[impl AsRef<Path>]) -> Result<()> {
        self.load_all(files)?;
        let json = serde_json::to_string_pretty(self.store.workouts())
            .context("Failed to serialize workouts")?;
        self.renderer.raw(&json);
        Ok(())
    }

    pub fn tags(&self, query: Option<&str>) {
        let matches = filter_tags(query.unwrap_or_default());
        if matches.is_empty() {
            self.renderer.render("No matching tags.\n");
            return;
        }

        let output: String = matches
            .iter()
            .map(|tag| format!("- {} (`{}`)\n", tag.label, tag.value))
            .collect();
        self.renderer.render(&output);
    }

    /// Run the first authoring step and print the resulting draft.
    pub fn draft(&mut self, name: String, tags: Vec<String>) -> Result<()> {
        let mut form = WorkoutForm { name, tags };
        form.submit(&mut self.store)?;

        let draft = self
            .store
            .take_draft()
            .context("Draft slot was empty after submitting the form")?;
        let json = serde_json::to_string_pretty(&draft).context("Failed to serialize draft")?;
        self.renderer.raw(&json);
        Ok(())
    }

    fn load_all(&mut self, files: &[impl AsRef<Path>]) -> Result<Vec<Arc<Workout>>> {
        files.iter().map(|path| self.load(path.as_ref())).collect()
    }

    fn load(&mut self, path: &Path) -> Result<Arc<Workout>> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let definition = CreateWorkout::from_json(&text)
            .with_context(|| format!("Failed to parse workout file {}", path.display()))?;

        let workout = self
            .promote(definition)
            .with_context(|| format!("Invalid workout in {}", path.display()))?;
        info!("Loaded '{}' from {}", workout.name, path.display());
        Ok(workout)
    }

    fn promote(&mut self, definition: CreateWorkout) -> Result<Arc<Workout>> {
        let CreateWorkout {
            name,
            notes,
            tags,
            duration,
            exercises,
            circuits,
        } = definition;

        let mut form = WorkoutForm { name, tags };
        form.submit(&mut self.store)?;

        let mut composer =
            ExerciseComposer::from_store(&self.store).context("No draft to compose into")?;
        for exercise in exercises {
            let index = composer.start_exercise();
            *composer.exercise_mut(index)? = exercise;
            composer.save(index)?;
        }
        debug!("Composed {} exercises", composer.len());

        let composed = composer.finish()?;
        validate_circuits(&circuits).into_result()?;
        let workout = self.store.create_workout(CreateWorkout {
            notes,
            duration,
            circuits,
            ..composed
        });
        self.store.clear_draft();
        Ok(workout)
    }
}
