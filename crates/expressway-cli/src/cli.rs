//! CLI definition using clap

use clap::{Parser, Subcommand};
use expressway_domain::WaypointResolution;
use expressway_types::{OutputFormat, VehicleClass};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "expressway-route")]
#[command(version)]
#[command(about = "Toll, distance, and route planning along an expressway corridor")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Corridor TOML file (overrides config)
    #[arg(long, global = true)]
    pub corridor: Option<PathBuf>,

    /// CSV toll rate sheet (overrides config)
    #[arg(long, global = true)]
    pub rate_sheet: Option<PathBuf>,

    /// Treat unknown waypoint keys as km 0 instead of failing
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate toll, distance, and travel time between two waypoints
    Toll {
        /// Origin waypoint key (e.g. "delhi")
        from: String,

        /// Destination waypoint key (e.g. "kota")
        to: String,

        /// Vehicle class. Uses config value if not specified.
        #[arg(long, short = 'c', value_enum)]
        vehicle: Option<VehicleClass>,

        /// Include mock weather and traffic conditions
        #[arg(long)]
        conditions: bool,

        /// Seed for mock conditions (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Plan a route between two places (free text, fuzzy matched)
    Route {
        /// Starting point (e.g. "Sohna service area")
        from: String,

        /// Destination (e.g. "Kota")
        to: String,

        /// Travel date (defaults to today)
        #[arg(long, short = 'd')]
        date: Option<String>,

        /// Departure time (defaults to the current IST time)
        #[arg(long, short = 't')]
        time: Option<String>,

        /// Include mock weather at the starting point
        #[arg(long)]
        conditions: bool,

        /// Seed for mock conditions (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Estimate distance, time, and fuel cost between two places
    Distance {
        /// Starting point (free text)
        from: String,

        /// Destination (free text)
        to: String,
    },

    /// Show which waypoint a piece of text matches
    Match {
        /// Free text to match
        text: String,
    },

    /// List corridor waypoints, toll plazas, and amenities
    Corridor {
        /// Write the toll plaza table as a CSV rate sheet
        #[arg(long)]
        export_rates: Option<PathBuf>,
    },

    /// Show the current time in IST
    Clock,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default vehicle class
        #[arg(long, value_enum)]
        set_vehicle: Option<VehicleClass>,

        /// Set unknown waypoint handling (strict, lenient)
        #[arg(long, value_parser = parse_resolution)]
        set_resolution: Option<WaypointResolution>,

        /// Set average speed in km/h
        #[arg(long)]
        set_speed: Option<f64>,

        /// Set fuel cost per km
        #[arg(long)]
        set_fuel_rate: Option<f64>,

        /// Set fuel cost scale factor
        #[arg(long)]
        set_fuel_scale: Option<f64>,

        /// Set number of recommended stops
        #[arg(long)]
        set_stops: Option<usize>,

        /// Set corridor TOML file
        #[arg(long)]
        set_corridor: Option<PathBuf>,

        /// Use the built-in corridor again
        #[arg(long)]
        clear_corridor: bool,

        /// Set CSV toll rate sheet
        #[arg(long)]
        set_rate_sheet: Option<PathBuf>,

        /// Stop using a rate sheet
        #[arg(long)]
        clear_rate_sheet: bool,

        /// Set a fixed seed for mock conditions
        #[arg(long)]
        set_seed: Option<u64>,

        /// Use random conditions again
        #[arg(long)]
        clear_seed: bool,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

fn parse_resolution(s: &str) -> Result<WaypointResolution, String> {
    match s.trim().to_lowercase().as_str() {
        "strict" => Ok(WaypointResolution::Strict),
        "lenient" => Ok(WaypointResolution::Lenient),
        other => Err(format!("expected 'strict' or 'lenient', got '{}'", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_toll() {
        let cli = Cli::try_parse_from([
            "expressway-route",
            "toll",
            "delhi",
            "kota",
            "--vehicle",
            "heavy",
            "-f",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Toll { from, to, vehicle, .. } => {
                assert_eq!(from, "delhi");
                assert_eq!(to, "kota");
                assert_eq!(vehicle, Some(VehicleClass::Heavy));
            }
            _ => panic!("expected toll command"),
        }
    }

    #[test]
    fn test_parse_route_with_conditions() {
        let cli = Cli::try_parse_from([
            "expressway-route",
            "route",
            "sohna service area",
            "kota",
            "--conditions",
            "--seed",
            "7",
        ])
        .unwrap();
        match cli.command {
            Commands::Route {
                from,
                conditions,
                seed,
                date,
                ..
            } => {
                assert_eq!(from, "sohna service area");
                assert!(conditions);
                assert_eq!(seed, Some(7));
                assert_eq!(date, None);
            }
            _ => panic!("expected route command"),
        }
    }

    #[test]
    fn test_parse_resolution() {
        assert_eq!(parse_resolution("Lenient"), Ok(WaypointResolution::Lenient));
        assert!(parse_resolution("loose").is_err());
    }
}
