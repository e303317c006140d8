//! Configuration management for expressway-route
//!
//! Config stored at: ~/.config/expressway-route/config.json

use expressway_domain::service::route_calculator::{
    DEFAULT_AVERAGE_SPEED_KMH, DEFAULT_FUEL_COST_RATE_PER_KM, DEFAULT_FUEL_COST_SCALE,
    DEFAULT_RECOMMENDED_STOP_COUNT,
};
use expressway_domain::{RouteSettings, WaypointResolution};
use expressway_types::{ConfigError, OutputFormat, Result, VehicleClass};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Vehicle class used by `toll` when none is given
    #[serde(default)]
    pub default_vehicle_class: VehicleClass,

    /// Unknown waypoint handling (strict, lenient)
    #[serde(default)]
    pub resolution: WaypointResolution,

    /// Average speed for travel time estimates
    #[serde(default = "default_average_speed")]
    pub average_speed_kmh: f64,

    /// Fuel cost per kilometre before scaling
    #[serde(default = "default_fuel_cost_rate")]
    pub fuel_cost_rate_per_km: f64,

    /// Multiplier applied to the per-km fuel cost
    #[serde(default = "default_fuel_cost_scale")]
    pub fuel_cost_scale: f64,

    /// Number of recommended stops in route plans
    #[serde(default = "default_stop_count")]
    pub recommended_stop_count: usize,

    /// Corridor TOML file (built-in Delhi-Mumbai tables when unset)
    #[serde(default)]
    pub corridor_file: Option<PathBuf>,

    /// CSV rate sheet replacing the corridor's toll plazas
    #[serde(default)]
    pub rate_sheet: Option<PathBuf>,

    /// Fixed seed for mock travel conditions (random when unset)
    #[serde(default)]
    pub conditions_seed: Option<u64>,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_average_speed() -> f64 {
    DEFAULT_AVERAGE_SPEED_KMH
}

fn default_fuel_cost_rate() -> f64 {
    DEFAULT_FUEL_COST_RATE_PER_KM
}

fn default_fuel_cost_scale() -> f64 {
    DEFAULT_FUEL_COST_SCALE
}

fn default_stop_count() -> usize {
    DEFAULT_RECOMMENDED_STOP_COUNT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            default_vehicle_class: VehicleClass::default(),
            resolution: WaypointResolution::default(),
            average_speed_kmh: default_average_speed(),
            fuel_cost_rate_per_km: default_fuel_cost_rate(),
            fuel_cost_scale: default_fuel_cost_scale(),
            recommended_stop_count: default_stop_count(),
            corridor_file: None,
            rate_sheet: None,
            conditions_seed: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("expressway-route");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific file, or default if it does not exist
    ///
    /// Values are only parsed here; `validate` runs where they are used so a
    /// bad value can still be fixed with `config --set-*` or `--reset`.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content).map_err(|e| {
                ConfigError::ParseError(format!("{}: {}", path.display(), e))
            })?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check the calculator settings
    pub fn validate(&self) -> Result<()> {
        self.route_settings().validate()
    }

    /// Calculator settings derived from this config
    pub fn route_settings(&self) -> RouteSettings {
        RouteSettings {
            average_speed_kmh: self.average_speed_kmh,
            fuel_cost_rate_per_km: self.fuel_cost_rate_per_km,
            fuel_cost_scale: self.fuel_cost_scale,
            recommended_stop_count: self.recommended_stop_count,
            resolution: self.resolution,
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Expressway Route Configuration")?;
        writeln!(f, "==============================")?;
        writeln!(f)?;
        writeln!(f, "Output format:     {}", self.output_format)?;
        writeln!(f, "Vehicle class:     {}", self.default_vehicle_class)?;
        writeln!(f, "Resolution:        {}", self.resolution)?;
        writeln!(f, "Average speed:     {} km/h", self.average_speed_kmh)?;
        writeln!(
            f,
            "Fuel cost:         {} per km x {}",
            self.fuel_cost_rate_per_km, self.fuel_cost_scale
        )?;
        writeln!(f, "Recommended stops: {}", self.recommended_stop_count)?;
        writeln!(
            f,
            "Corridor file:     {}",
            self.corridor_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;
        writeln!(
            f,
            "Rate sheet:        {}",
            self.rate_sheet
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".to_string())
        )?;
        writeln!(
            f,
            "Conditions seed:   {}",
            self.conditions_seed
                .map(|s| s.to_string())
                .unwrap_or_else(|| "(random)".to_string())
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:       {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expressway_types::Error;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_calculator_defaults() {
        assert_eq!(Config::default().route_settings(), RouteSettings::default());
    }

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            output_format: OutputFormat::Json,
            default_vehicle_class: VehicleClass::Heavy,
            resolution: WaypointResolution::Lenient,
            conditions_seed: Some(99),
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "average_speed_kmh": 80.0, "resolution": "lenient" }"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.average_speed_kmh, 80.0);
        assert_eq!(config.resolution, WaypointResolution::Lenient);
        assert_eq!(config.fuel_cost_rate_per_km, DEFAULT_FUEL_COST_RATE_PER_KM);
        assert_eq!(config.recommended_stop_count, 3);
    }

    #[test]
    fn test_invalid_speed_loads_but_fails_validation() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "average_speed_kmh": -5 }"#).unwrap();

        let mut config = Config::load_from(&path).unwrap();
        assert_eq!(config.average_speed_kmh, -5.0);
        assert!(matches!(
            config.validate(),
            Err(Error::Config(ConfigError::InvalidSetting { name: "average_speed_kmh", .. }))
        ));

        config.average_speed_kmh = 100.0;
        config.validate().unwrap();
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().average_speed_kmh, 100.0);
    }

    #[test]
    fn test_malformed_file_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }
}
