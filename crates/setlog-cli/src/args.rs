use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Compose, validate and inspect workouts
///
/// Workout files are JSON documents describing a workout to create: a name,
/// optional tags and notes, and its exercises, sets and circuits. Every file
/// goes through the same validation as interactive authoring before it is
/// promoted into a finalized workout.
#[derive(Parser)]
#[command(version, about, name = "setlog")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show workouts defined in JSON files
    #[command(alias = "s")]
    Show {
        /// Workout definition files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// List summaries of workouts defined in JSON files
    #[command(aliases = ["l", "ls"])]
    List {
        /// Workout definition files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print finalized workouts as JSON
    #[command(alias = "x")]
    Export {
        /// Workout definition files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// List the predefined workout tags
    #[command(alias = "t")]
    Tags {
        /// Only show tags whose label contains this text
        query: Option<String>,
    },
    /// Start a workout definition from a name and tags
    ///
    /// Prints the draft as JSON, ready to be filled in with exercises and
    /// passed to `show`.
    #[command(alias = "d")]
    Draft {
        /// Workout name
        name: String,
        /// Tag to attach; repeat for several
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },
}
