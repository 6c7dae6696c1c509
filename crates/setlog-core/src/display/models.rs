//! Display implementations for domain models.
//!
//! Workouts render as markdown grouped into warm-up, main and cool-down
//! sections, with exercises and circuits interleaved by their order.

use std::fmt;

use super::{
    datetime::{Duration, LocalDateTime},
    plural,
};
use crate::models::{
    Circuit, Exercise, ExerciseType, Phase, Set, Status, WeightUnit, Workout, WorkoutSummary,
};

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status to show for an entity, falling back to its completion flag.
fn effective_status(completed: bool, status: Option<Status>) -> Status {
    match status {
        Some(status) => status,
        None if completed => Status::Completed,
        None => Status::NotStarted,
    }
}

/// One-line description of a set's targets, e.g. `8 reps @ 135 lbs`.
pub(crate) struct SetLine {
    pub reps: Option<u32>,
    pub target_reps: Option<u32>,
    pub duration: Option<u32>,
    pub weight: Option<f64>,
    pub unit: WeightUnit,
}

impl fmt::Display for SetLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        match (self.reps, self.target_reps) {
            (Some(done), Some(target)) if done > 0 => parts.push(format!("{done}/{target} reps")),
            (_, Some(target)) => parts.push(plural(target as usize, "rep")),
            (Some(done), None) if done > 0 => parts.push(plural(done as usize, "rep")),
            _ => {}
        }
        if let Some(seconds) = self.duration {
            parts.push(Duration(seconds).to_string());
        }

        if parts.is_empty() {
            write!(f, "No target")?;
        } else {
            write!(f, "{}", parts.join(", "))?;
        }

        match self.weight {
            Some(weight) if weight > 0.0 => write!(f, " @ {weight} {}", self.unit),
            _ => Ok(()),
        }
    }
}

impl Set {
    /// Target line in the given unit.
    pub(crate) fn line(&self, unit: WeightUnit) -> SetLine {
        SetLine {
            reps: self.reps,
            target_reps: self.target_reps,
            duration: self.duration,
            weight: self.weight,
            unit,
        }
    }

    /// Format as a numbered markdown list item.
    fn fmt_item(&self, f: &mut fmt::Formatter<'_>, unit: WeightUnit) -> fmt::Result {
        write!(f, "{}. {}", self.order, self.line(unit))?;
        if self.completed {
            write!(f, " ✓")?;
        }
        if let Some(rest) = self.rest_time {
            write!(f, ", rest {}", Duration(rest))?;
        }
        writeln!(f)?;
        if let Some(notes) = &self.notes {
            writeln!(f, "   {notes}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_item(f, WeightUnit::default())
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.order,
            self.name,
            effective_status(self.completed, self.status).with_icon()
        )?;
        writeln!(f)?;

        writeln!(f, "- Type: {}", self.exercise_type)?;
        if !self.muscle_groups.is_empty() {
            writeln!(f, "- Muscle groups: {}", self.muscle_groups.join(", "))?;
        }
        if !self.equipment.is_empty() {
            writeln!(f, "- Equipment: {}", self.equipment.join(", "))?;
        }
        if self.is_bodyweight == Some(true) {
            writeln!(f, "- Bodyweight")?;
        }
        if let Some(url) = &self.video_url {
            writeln!(f, "- Video: {url}")?;
        }
        writeln!(f)?;

        if let Some(instructions) = &self.instructions {
            writeln!(f, "{instructions}")?;
            writeln!(f)?;
        }
        if let Some(notes) = &self.notes {
            writeln!(f, "{notes}")?;
            writeln!(f)?;
        }

        if self.sets.is_empty() {
            writeln!(f, "No sets.")?;
        } else {
            let unit = self.weight_unit.unwrap_or_default();
            for set in &self.sets {
                set.fmt_item(f, unit)?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} (circuit, {}) ({})",
            self.order,
            self.name,
            plural(self.rounds as usize, "round"),
            effective_status(self.completed, self.status).with_icon()
        )?;
        writeln!(f)?;

        if let Some(rest) = self.rest_between_exercises {
            writeln!(f, "- Rest between exercises: {}", Duration(rest))?;
        }
        if let Some(rest) = self.rest_between_rounds {
            writeln!(f, "- Rest between rounds: {}", Duration(rest))?;
        }
        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }
        writeln!(f)?;

        for exercise in &self.exercises {
            write!(f, "{exercise}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Workout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;

        writeln!(
            f,
            "- Status: {}",
            effective_status(self.completed, self.status).with_icon()
        )?;
        if !self.tags.is_empty() {
            writeln!(f, "- Tags: {}", self.tags.join(", "))?;
        }
        if let Some(duration) = self.duration {
            writeln!(f, "- Duration: {}", Duration(duration))?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }

        if self.exercises.is_empty() && self.circuits.is_empty() {
            return writeln!(f, "\nNo exercises in this workout.");
        }

        for phase in Phase::ALL {
            let mut items: Vec<(u32, &dyn fmt::Display)> = self
                .exercises
                .iter()
                .filter(|exercise| exercise.phase == phase)
                .map(|exercise| (exercise.order, &**exercise as &dyn fmt::Display))
                .chain(
                    self.circuits
                        .iter()
                        .filter(|circuit| circuit.phase == phase)
                        .map(|circuit| (circuit.order, &**circuit as &dyn fmt::Display)),
                )
                .collect();
            if items.is_empty() {
                continue;
            }
            items.sort_by_key(|(order, _)| *order);

            writeln!(f, "\n## {}", phase.title())?;
            writeln!(f)?;
            for (_, item) in items {
                write!(f, "{item}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.total_sets > 0 {
            format!(" ({}/{} sets)", self.completed_sets, self.total_sets)
        } else {
            String::new()
        };

        writeln!(f, "## {} (ID: {}){progress}", self.name, self.id)?;
        writeln!(f)?;

        if !self.tags.is_empty() {
            writeln!(f, "- **Tags**: {}", self.tags.join(", "))?;
        }
        writeln!(
            f,
            "- **Contents**: {}, {}",
            plural(self.total_exercises as usize, "exercise"),
            plural(self.total_circuits as usize, "circuit")
        )?;
        if self.completed {
            writeln!(f, "- **Status**: {}", Status::Completed.with_icon())?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}
