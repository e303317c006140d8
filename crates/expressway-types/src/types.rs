//! Shared enumerations for corridor data

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Fare tier used to select a toll rate
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum VehicleClass {
    /// Cars, jeeps, vans
    #[default]
    Light,
    /// Light commercial vehicles and minibuses
    Commercial,
    /// Trucks and buses
    Heavy,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 3] = [
        VehicleClass::Light,
        VehicleClass::Commercial,
        VehicleClass::Heavy,
    ];

    /// Stable lowercase key, as used in corridor files
    pub fn key(&self) -> &'static str {
        match self {
            VehicleClass::Light => "light",
            VehicleClass::Commercial => "commercial",
            VehicleClass::Heavy => "heavy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VehicleClass::Light => "Car/Jeep/Van",
            VehicleClass::Commercial => "LCV/Minibus",
            VehicleClass::Heavy => "Bus/Truck",
        }
    }
}

impl std::fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Facility available at an amenity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facility {
    Fuel,
    Food,
    Rest,
    Medical,
    Hotel,
    Shopping,
    Atm,
    Repair,
    EvCharging,
}

impl Facility {
    /// Tag as written in corridor files
    pub fn tag(&self) -> &'static str {
        match self {
            Facility::Fuel => "fuel",
            Facility::Food => "food",
            Facility::Rest => "rest",
            Facility::Medical => "medical",
            Facility::Hotel => "hotel",
            Facility::Shopping => "shopping",
            Facility::Atm => "atm",
            Facility::Repair => "repair",
            Facility::EvCharging => "ev_charging",
        }
    }

    /// Human-readable label (underscores become spaces)
    pub fn label(&self) -> String {
        self.tag().replace('_', " ")
    }
}
