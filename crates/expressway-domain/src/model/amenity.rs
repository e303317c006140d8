//! Amenity type definitions

use expressway_types::Facility;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Service area or rest stop along the corridor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    /// Display name
    pub name: String,
    /// Position in kilometres from the corridor origin
    pub km: f64,
    /// Available facilities
    #[serde(default)]
    pub facilities: BTreeSet<Facility>,
}

impl Amenity {
    pub fn new(name: &str, km: f64, facilities: &[Facility]) -> Self {
        Self {
            name: name.to_string(),
            km,
            facilities: facilities.iter().copied().collect(),
        }
    }

    pub fn has(&self, facility: Facility) -> bool {
        self.facilities.contains(&facility)
    }

    /// Comma-separated facility labels for display
    pub fn facility_labels(&self) -> String {
        self.facilities
            .iter()
            .map(|f| f.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facility_labels() {
        let amenity = Amenity::new(
            "Surat Service Area",
            960.0,
            &[Facility::Fuel, Facility::Food, Facility::Rest, Facility::EvCharging],
        );
        assert!(amenity.has(Facility::EvCharging));
        assert!(!amenity.has(Facility::Hotel));
        assert_eq!(amenity.facility_labels(), "fuel, food, rest, ev charging");
    }

    #[test]
    fn test_duplicate_facilities_collapse() {
        let amenity = Amenity::new("Dup", 1.0, &[Facility::Fuel, Facility::Fuel]);
        assert_eq!(amenity.facilities.len(), 1);
    }
}
