//! Expressway Route - toll, distance, and route planning for an expressway corridor
//!
//! A CLI tool over static waypoint, toll plaza, and amenity tables.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("EXPRESSWAY_LOG", default_level),
    )
    .init();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
