//! Corridor data loader from TOML
//!
//! Expected layout:
//!
//! ```toml
//! name = "Delhi-Mumbai Expressway"
//!
//! [[waypoints]]
//! key = "delhi"
//! name = "Delhi"
//! region = "Delhi"
//! km = 0
//!
//! [[toll_plazas]]
//! name = "Khalilpur"
//! km = 56
//! rates = { light = 90, commercial = 145, heavy = 3215 }
//!
//! [[amenities]]
//! name = "Sohna Service Area"
//! km = 60
//! facilities = ["fuel", "food", "rest", "medical"]
//! ```

use expressway_domain::model::{Amenity, Corridor, TollPlaza, Waypoint};
use expressway_types::{ConfigError, Error, Result};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Container for parsing a corridor TOML file
#[derive(Debug, Deserialize)]
struct CorridorFile {
    #[serde(default = "default_name")]
    name: String,
    waypoints: Vec<Waypoint>,
    #[serde(default)]
    toll_plazas: Vec<TollPlaza>,
    #[serde(default)]
    amenities: Vec<Amenity>,
}

fn default_name() -> String {
    "Unnamed corridor".to_string()
}

/// Loads and validates corridor files
pub struct CorridorLoader;

impl CorridorLoader {
    /// Load a corridor from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Corridor> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        debug!("Loading corridor from {}", path.display());
        Self::load_from_str(&content)
    }

    /// Load a corridor from a TOML string
    ///
    /// The corridor is validated; loaded data is not trusted.
    pub fn load_from_str(toml_content: &str) -> Result<Corridor> {
        let file: CorridorFile = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse corridor TOML: {}",
                e
            )))
        })?;

        let corridor = Corridor::new(&file.name, file.waypoints, file.toll_plazas, file.amenities);
        corridor.validate()?;
        debug!(
            "Corridor '{}': {} waypoints, {} toll plazas, {} amenities",
            corridor.name(),
            corridor.waypoints().len(),
            corridor.toll_plazas().len(),
            corridor.amenities().len()
        );
        Ok(corridor)
    }
}
