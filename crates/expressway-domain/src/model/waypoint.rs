//! Waypoint type definitions

use serde::{Deserialize, Serialize};

/// A named point on the corridor usable as a route origin or destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Lookup key (e.g. "delhi")
    pub key: String,
    /// Display name
    pub name: String,
    /// State or region label
    pub region: String,
    /// Distance from the corridor origin in kilometres
    pub km: f64,
}

impl Waypoint {
    pub fn new(key: &str, name: &str, region: &str, km: f64) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            region: region.to_string(),
            km,
        }
    }
}
