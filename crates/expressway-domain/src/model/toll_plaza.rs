//! Toll plaza type definitions

use expressway_types::VehicleClass;
use serde::{Deserialize, Serialize};

/// Fare per vehicle class at a single plaza
///
/// A missing rate means the plaza charges nothing for that class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TollRates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commercial: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heavy: Option<u32>,
}

impl TollRates {
    pub fn new(light: u32, commercial: u32, heavy: u32) -> Self {
        Self {
            light: Some(light),
            commercial: Some(commercial),
            heavy: Some(heavy),
        }
    }

    /// Rate for a class, if the plaza defines one
    pub fn get(&self, class: VehicleClass) -> Option<u32> {
        match class {
            VehicleClass::Light => self.light,
            VehicleClass::Commercial => self.commercial,
            VehicleClass::Heavy => self.heavy,
        }
    }
}

/// Toll collection point on the corridor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TollPlaza {
    /// Display name
    pub name: String,
    /// Position in kilometres from the corridor origin
    pub km: f64,
    /// Fares by vehicle class
    pub rates: TollRates,
}

impl TollPlaza {
    pub fn new(name: &str, km: f64, rates: TollRates) -> Self {
        Self {
            name: name.to_string(),
            km,
            rates,
        }
    }

    /// Fare charged to `class`, zero when no rate is defined
    pub fn fare(&self, class: VehicleClass) -> u32 {
        self.rates.get(class).unwrap_or(0)
    }
}
