//! Status and category enumerations for workout entities.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle status shared by workouts, circuits, exercises and sets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Not yet begun
    #[default]
    NotStarted,

    /// Currently being performed
    InProgress,

    /// Finished
    Completed,
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "not_started" | "notstarted" => Ok(Status::NotStarted),
            "in_progress" | "inprogress" => Ok(Status::InProgress),
            "completed" | "done" => Ok(Status::Completed),
            _ => Err(format!("Invalid status: {s}")),
        }
    }
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotStarted => "not_started",
            Status::InProgress => "in_progress",
            Status::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setlog_core::models::Status;
    ///
    /// assert_eq!(Status::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(Status::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(Status::NotStarted.with_icon(), "○ Not Started");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            Status::Completed => "✓ Completed",
            Status::InProgress => "➤ In Progress",
            Status::NotStarted => "○ Not Started",
        }
    }
}

/// Position of an exercise or circuit within a workout's timeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Warmup,
    #[default]
    Main,
    Cooldown,
}

impl FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "warmup" | "warm_up" | "warm-up" => Ok(Phase::Warmup),
            "main" => Ok(Phase::Main),
            "cooldown" | "cool_down" | "cool-down" => Ok(Phase::Cooldown),
            _ => Err(format!("Invalid phase: {s}")),
        }
    }
}

impl Phase {
    /// Phases in timeline order.
    pub const ALL: [Phase; 3] = [Phase::Warmup, Phase::Main, Phase::Cooldown];

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Warmup => "warmup",
            Phase::Main => "main",
            Phase::Cooldown => "cooldown",
        }
    }

    /// Section heading used when grouping a workout by phase.
    pub fn title(&self) -> &'static str {
        match self {
            Phase::Warmup => "Warm-up",
            Phase::Main => "Main",
            Phase::Cooldown => "Cool-down",
        }
    }
}

/// Training modality of an exercise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    #[default]
    Strength,
    Cardio,
    Flexibility,
    Balance,
}

impl FromStr for ExerciseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strength" => Ok(ExerciseType::Strength),
            "cardio" => Ok(ExerciseType::Cardio),
            "flexibility" => Ok(ExerciseType::Flexibility),
            "balance" => Ok(ExerciseType::Balance),
            _ => Err(format!("Invalid exercise type: {s}")),
        }
    }
}

impl ExerciseType {
    /// Every type, in the order the authoring form offers them.
    pub const ALL: [ExerciseType; 4] = [
        ExerciseType::Strength,
        ExerciseType::Cardio,
        ExerciseType::Flexibility,
        ExerciseType::Balance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseType::Strength => "strength",
            ExerciseType::Cardio => "cardio",
            ExerciseType::Flexibility => "flexibility",
            ExerciseType::Balance => "balance",
        }
    }
}

/// Unit that set weights are recorded in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    #[default]
    Lbs,
}

impl FromStr for WeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kg" | "kgs" => Ok(WeightUnit::Kg),
            "lb" | "lbs" => Ok(WeightUnit::Lbs),
            _ => Err(format!("Invalid weight unit: {s}")),
        }
    }
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }
}
