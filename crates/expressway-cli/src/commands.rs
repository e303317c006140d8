//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{
    output_corridor, output_distance, output_match, output_route, output_route_report, output_toll,
    output_toll_report,
};
use expressway_app::app::{format_ist, ist_now, RouteService};
use expressway_app::config::Config;
use expressway_domain::service::ConditionsGenerator;
use expressway_domain::WaypointResolution;
use expressway_infra::write_toll_plazas_csv;
use expressway_types::{OutputFormat, Result, VehicleClass};
use log::{info, warn};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Toll {
            from,
            to,
            vehicle,
            conditions,
            seed,
        } => {
            let (config, output_format) = load_config(&cli)?;
            let vehicle_class = vehicle.unwrap_or(config.default_vehicle_class);
            let conditions = conditions_request(&config, *conditions, *seed);
            cmd_toll(&config, from, to, vehicle_class, conditions, output_format)
        }

        Commands::Route {
            from,
            to,
            date,
            time,
            conditions,
            seed,
        } => {
            let (config, output_format) = load_config(&cli)?;
            let now = ist_now();
            let date = date
                .clone()
                .unwrap_or_else(|| now.format("%Y-%m-%d").to_string());
            let time = time.clone().unwrap_or_else(|| now.format("%H:%M").to_string());
            let conditions = conditions_request(&config, *conditions, *seed);
            cmd_route(&config, from, to, &date, &time, conditions, output_format)
        }

        Commands::Distance { from, to } => {
            let (config, output_format) = load_config(&cli)?;
            cmd_distance(&config, from, to, output_format)
        }

        Commands::Match { text } => {
            let (config, output_format) = load_config(&cli)?;
            cmd_match(&config, text, output_format)
        }

        Commands::Corridor { export_rates } => {
            let (config, output_format) = load_config(&cli)?;
            cmd_corridor(&config, export_rates.clone(), output_format)
        }

        Commands::Clock => {
            println!("{}", format_ist(&ist_now()));
            Ok(())
        }

        // Works on the raw file so a broken config can still be repaired
        Commands::Config {
            show,
            set_output,
            set_vehicle,
            set_resolution,
            set_speed,
            set_fuel_rate,
            set_fuel_scale,
            set_stops,
            set_corridor,
            clear_corridor,
            set_rate_sheet,
            clear_rate_sheet,
            set_seed,
            clear_seed,
            reset,
        } => cmd_config(ConfigUpdate {
            show: *show,
            set_output: *set_output,
            set_vehicle: *set_vehicle,
            set_resolution: *set_resolution,
            set_speed: *set_speed,
            set_fuel_rate: *set_fuel_rate,
            set_fuel_scale: *set_fuel_scale,
            set_stops: *set_stops,
            set_corridor: set_corridor.clone(),
            clear_corridor: *clear_corridor,
            set_rate_sheet: set_rate_sheet.clone(),
            clear_rate_sheet: *clear_rate_sheet,
            set_seed: *set_seed,
            clear_seed: *clear_seed,
            reset: *reset,
        }),
    }
}

/// Load config and apply the global CLI overrides
fn load_config(cli: &Cli) -> Result<(Config, OutputFormat)> {
    let mut config = Config::load()?;

    if let Some(ref corridor) = cli.corridor {
        config.corridor_file = Some(corridor.clone());
    }
    if let Some(ref sheet) = cli.rate_sheet {
        config.rate_sheet = Some(sheet.clone());
    }
    if cli.lenient {
        config.resolution = WaypointResolution::Lenient;
    }
    let output_format = cli.format.unwrap_or(config.output_format);
    Ok((config, output_format))
}

/// `--conditions` was given; the seed falls back to the configured one
#[derive(Debug, Clone, Copy, PartialEq)]
struct ConditionsRequest {
    seed: Option<u64>,
}

fn conditions_request(config: &Config, enabled: bool, seed: Option<u64>) -> Option<ConditionsRequest> {
    enabled.then(|| ConditionsRequest {
        seed: seed.or(config.conditions_seed),
    })
}

fn cmd_toll(
    config: &Config,
    from: &str,
    to: &str,
    vehicle_class: VehicleClass,
    conditions: Option<ConditionsRequest>,
    output_format: OutputFormat,
) -> Result<()> {
    let service = RouteService::from_config(config)?;

    let Some(request) = conditions else {
        let toll = service.quote_toll(from, to, vehicle_class)?;
        return output_toll(output_format, &toll);
    };

    let mut generator = ConditionsGenerator::with_seed(request.seed);
    let report = service.toll_report(from, to, vehicle_class, &mut generator)?;
    output_toll_report(output_format, &report)
}

fn cmd_route(
    config: &Config,
    from: &str,
    to: &str,
    date: &str,
    time: &str,
    conditions: Option<ConditionsRequest>,
    output_format: OutputFormat,
) -> Result<()> {
    let service = RouteService::from_config(config)?;

    let Some(request) = conditions else {
        let summary = service.plan_route_from_text(from, to, date, time)?;
        return output_route(output_format, &summary);
    };

    let mut generator = ConditionsGenerator::with_seed(request.seed);
    let report = service.route_report(from, to, date, time, &mut generator)?;
    output_route_report(output_format, &report)
}

fn cmd_distance(config: &Config, from: &str, to: &str, output_format: OutputFormat) -> Result<()> {
    let service = RouteService::from_config(config)?;
    let estimate = service.estimate_distance(from, to)?;
    output_distance(output_format, &estimate)
}

fn cmd_match(config: &Config, text: &str, output_format: OutputFormat) -> Result<()> {
    let service = RouteService::from_config(config)?;
    output_match(output_format, text, service.match_waypoint(text))
}

fn cmd_corridor(
    config: &Config,
    export_rates: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let service = RouteService::from_config(config)?;
    let corridor = service.calculator().corridor();

    if let Some(path) = export_rates {
        write_toll_plazas_csv(corridor.toll_plazas(), File::create(&path)?)?;
        eprintln!(
            "Wrote {} toll plazas to {}",
            corridor.toll_plazas().len(),
            path.display()
        );
        return Ok(());
    }

    output_corridor(output_format, corridor, service.source())
}

#[derive(Debug, Default)]
struct ConfigUpdate {
    show: bool,
    set_output: Option<OutputFormat>,
    set_vehicle: Option<VehicleClass>,
    set_resolution: Option<WaypointResolution>,
    set_speed: Option<f64>,
    set_fuel_rate: Option<f64>,
    set_fuel_scale: Option<f64>,
    set_stops: Option<usize>,
    set_corridor: Option<PathBuf>,
    clear_corridor: bool,
    set_rate_sheet: Option<PathBuf>,
    clear_rate_sheet: bool,
    set_seed: Option<u64>,
    clear_seed: bool,
    reset: bool,
}

/// What `config` did to the file
#[derive(Debug, PartialEq)]
enum ConfigChange {
    Reset,
    Saved(Config),
    Unchanged(Config),
}

fn cmd_config(update: ConfigUpdate) -> Result<()> {
    let path = Config::config_path()?;
    let show = update.show;

    match apply_config_update(&path, update)? {
        ConfigChange::Reset => println!("Configuration reset to defaults"),
        ConfigChange::Saved(config) => {
            println!("Configuration saved");
            if show {
                println!("{}", config);
            }
        }
        ConfigChange::Unchanged(config) => {
            if let Err(e) = config.validate() {
                warn!("Current configuration is not usable: {}", e);
            }
            println!("{}", config);
        }
    }
    Ok(())
}

/// Apply `update` to the config file at `path`
///
/// The stored values are not validated before the update is applied, so an
/// invalid file can always be repaired or reset. The result is validated
/// before it is written.
fn apply_config_update(path: &Path, update: ConfigUpdate) -> Result<ConfigChange> {
    if update.reset {
        Config::default().save_to(path)?;
        info!("Reset configuration at {}", path.display());
        return Ok(ConfigChange::Reset);
    }

    let mut config = Config::load_from(path)?;
    let mut modified = false;

    if let Some(format) = update.set_output {
        config.output_format = format;
        modified = true;
    }
    if let Some(class) = update.set_vehicle {
        config.default_vehicle_class = class;
        modified = true;
    }
    if let Some(resolution) = update.set_resolution {
        config.resolution = resolution;
        modified = true;
    }
    if let Some(speed) = update.set_speed {
        config.average_speed_kmh = speed;
        modified = true;
    }
    if let Some(rate) = update.set_fuel_rate {
        config.fuel_cost_rate_per_km = rate;
        modified = true;
    }
    if let Some(scale) = update.set_fuel_scale {
        config.fuel_cost_scale = scale;
        modified = true;
    }
    if let Some(stops) = update.set_stops {
        config.recommended_stop_count = stops;
        modified = true;
    }
    if let Some(path) = update.set_corridor {
        config.corridor_file = Some(path);
        modified = true;
    }
    if update.clear_corridor {
        config.corridor_file = None;
        modified = true;
    }
    if let Some(path) = update.set_rate_sheet {
        config.rate_sheet = Some(path);
        modified = true;
    }
    if update.clear_rate_sheet {
        config.rate_sheet = None;
        modified = true;
    }
    if let Some(seed) = update.set_seed {
        config.conditions_seed = Some(seed);
        modified = true;
    }
    if update.clear_seed {
        config.conditions_seed = None;
        modified = true;
    }

    if !modified {
        return Ok(ConfigChange::Unchanged(config));
    }

    config.validate()?;
    config.save_to(path)?;
    info!("Saved configuration to {}", path.display());
    Ok(ConfigChange::Saved(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use expressway_types::{ConfigError, Error};
    use tempfile::tempdir;

    fn write_bad_speed(path: &Path) {
        std::fs::write(path, r#"{ "average_speed_kmh": -5 }"#).unwrap();
    }

    #[test]
    fn test_reset_repairs_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        write_bad_speed(&path);

        let change = apply_config_update(
            &path,
            ConfigUpdate {
                reset: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(change, ConfigChange::Reset);
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_set_speed_repairs_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        write_bad_speed(&path);

        let change = apply_config_update(
            &path,
            ConfigUpdate {
                set_speed: Some(100.0),
                ..Default::default()
            },
        )
        .unwrap();
        let ConfigChange::Saved(config) = change else {
            panic!("expected saved config, got {:?}", change);
        };
        assert_eq!(config.average_speed_kmh, 100.0);
        config.validate().unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_show_invalid_file_is_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        write_bad_speed(&path);

        let change = apply_config_update(&path, ConfigUpdate::default()).unwrap();
        let ConfigChange::Unchanged(config) = change else {
            panic!("expected unchanged config, got {:?}", change);
        };
        assert_eq!(config.average_speed_kmh, -5.0);
    }

    #[test]
    fn test_invalid_update_is_not_saved() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let err = apply_config_update(
            &path,
            ConfigUpdate {
                set_fuel_scale: Some(-1.0),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidSetting { name: "fuel_cost_scale", .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_conditions_request_uses_config_seed() {
        let config = Config {
            conditions_seed: Some(9),
            ..Default::default()
        };
        assert_eq!(conditions_request(&config, false, Some(1)), None);
        assert_eq!(
            conditions_request(&config, true, None),
            Some(ConditionsRequest { seed: Some(9) })
        );
        assert_eq!(
            conditions_request(&config, true, Some(1)),
            Some(ConditionsRequest { seed: Some(1) })
        );
    }
}
