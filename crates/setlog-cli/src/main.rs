//! Setlog CLI Application
//!
//! Command-line front end for composing and inspecting workouts.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use setlog_core::StoreBuilder;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color, command } = Args::parse();

    let store = StoreBuilder::new().build();
    let renderer = TerminalRenderer::new(!no_color);

    info!("Setlog started");

    let mut cli = Cli::new(store, renderer);
    match command {
        Show { files } => cli.show(&files),
        List { files } => cli.list(&files),
        Export { files } => cli.export(&files),
        Tags { query } => {
            cli.tags(query.as_deref());
            Ok(())
        }
        Draft { name, tags } => cli.draft(name, tags),
    }
}
