//! Corridor: the full set of reference data along one expressway

use super::{Amenity, TollPlaza, Waypoint};
use expressway_types::{Error, Result};
use serde::Serialize;
use std::collections::HashSet;

/// Immutable corridor reference data
///
/// Waypoints keep their insertion order, which is the canonical order used
/// for fuzzy matching. Toll plazas and amenities are kept sorted by position
/// (stable, so equal positions keep their table order).
#[derive(Debug, Clone, Serialize)]
pub struct Corridor {
    name: String,
    waypoints: Vec<Waypoint>,
    toll_plazas: Vec<TollPlaza>,
    amenities: Vec<Amenity>,
}

impl Corridor {
    pub fn new(
        name: &str,
        waypoints: Vec<Waypoint>,
        mut toll_plazas: Vec<TollPlaza>,
        mut amenities: Vec<Amenity>,
    ) -> Self {
        toll_plazas.sort_by(|a, b| a.km.total_cmp(&b.km));
        amenities.sort_by(|a, b| a.km.total_cmp(&b.km));
        Self {
            name: name.to_string(),
            waypoints,
            toll_plazas,
            amenities,
        }
    }

    /// Same corridor with its toll plaza table replaced
    pub fn with_toll_plazas(self, toll_plazas: Vec<TollPlaza>) -> Self {
        Self::new(&self.name, self.waypoints, toll_plazas, self.amenities)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Waypoints in canonical order
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Toll plazas in corridor order
    pub fn toll_plazas(&self) -> &[TollPlaza] {
        &self.toll_plazas
    }

    /// Amenities in corridor order
    pub fn amenities(&self) -> &[Amenity] {
        &self.amenities
    }

    /// Look up a waypoint by exact key
    pub fn waypoint(&self, key: &str) -> Option<&Waypoint> {
        self.waypoints.iter().find(|w| w.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.waypoints.iter().map(|w| w.key.as_str())
    }

    /// Waypoint with the smallest position (first on ties)
    pub fn start(&self) -> Option<&Waypoint> {
        self.waypoints
            .iter()
            .reduce(|best, w| if w.km < best.km { w } else { best })
    }

    /// Waypoint with the largest position (first on ties)
    pub fn end(&self) -> Option<&Waypoint> {
        self.waypoints
            .iter()
            .reduce(|best, w| if w.km > best.km { w } else { best })
    }

    /// Minimum and maximum waypoint positions
    pub fn span(&self) -> Option<(f64, f64)> {
        Some((self.start()?.km, self.end()?.km))
    }

    /// Check structural invariants of corridor data loaded from outside
    ///
    /// - at least one waypoint
    /// - unique, non-empty waypoint keys
    /// - finite positions everywhere
    /// - every plaza and amenity within the waypoint span
    pub fn validate(&self) -> Result<()> {
        if self.waypoints.is_empty() {
            return Err(Error::InvalidCorridor(format!(
                "corridor '{}' has no waypoints",
                self.name
            )));
        }

        let mut seen = HashSet::new();
        for w in &self.waypoints {
            if w.key.trim().is_empty() {
                return Err(Error::InvalidCorridor(format!(
                    "waypoint '{}' has an empty key",
                    w.name
                )));
            }
            if !seen.insert(w.key.as_str()) {
                return Err(Error::InvalidCorridor(format!(
                    "duplicate waypoint key '{}'",
                    w.key
                )));
            }
            if !w.km.is_finite() {
                return Err(Error::InvalidCorridor(format!(
                    "waypoint '{}' has a non-finite position",
                    w.key
                )));
            }
        }

        let (min_km, max_km) = self
            .span()
            .ok_or_else(|| Error::InvalidCorridor("empty waypoint table".to_string()))?;

        let positioned = self
            .toll_plazas
            .iter()
            .map(|p| ("toll plaza", p.name.as_str(), p.km))
            .chain(self.amenities.iter().map(|a| ("amenity", a.name.as_str(), a.km)));

        for (kind, name, km) in positioned {
            if !km.is_finite() || km < min_km || km > max_km {
                return Err(Error::InvalidCorridor(format!(
                    "{} '{}' at km {} lies outside the corridor ({}..={})",
                    kind, name, km, min_km, max_km
                )));
            }
        }

        Ok(())
    }
}
