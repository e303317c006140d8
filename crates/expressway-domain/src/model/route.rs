//! Derived per-query results and travel interval membership rules

use super::{Amenity, TollPlaza, Waypoint};
use expressway_types::VehicleClass;
use serde::{Deserialize, Serialize};

/// Rule deciding whether a position counts as lying on a travelled interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// `lo < km <= hi`: a point exactly at the start is excluded.
    /// Used for toll plazas.
    StartExclusive,
    /// `lo <= km <= hi`: both ends included. Used for amenities.
    Inclusive,
}

/// Direction-free stretch of the corridor between two positions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TravelInterval {
    pub lo: f64,
    pub hi: f64,
}

impl TravelInterval {
    /// Build an interval from two positions in either order
    pub fn between(a: f64, b: f64) -> Self {
        Self {
            lo: a.min(b),
            hi: a.max(b),
        }
    }

    pub fn length(&self) -> f64 {
        self.hi - self.lo
    }

    pub fn contains(&self, km: f64, policy: BoundaryPolicy) -> bool {
        match policy {
            BoundaryPolicy::StartExclusive => km > self.lo && km <= self.hi,
            BoundaryPolicy::Inclusive => km >= self.lo && km <= self.hi,
        }
    }
}

/// Toll calculation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TollResult {
    /// Vehicle class the fares were taken for
    pub vehicle_class: VehicleClass,
    /// Sum of fares over passed plazas
    pub total_toll: u32,
    /// Passed plazas in corridor order
    ///
    /// Ordered by position, not by the row order of the rate table: the
    /// built-in table lists Barkapara before Dausa, results list Dausa first.
    pub passed_plazas: Vec<TollPlaza>,
    /// Distance travelled in kilometres
    pub distance_km: f64,
    /// Travel time in whole minutes at the configured average speed
    pub estimated_minutes: u32,
}

impl TollResult {
    /// (plaza name, fare) pairs for the result's vehicle class
    pub fn breakdown(&self) -> Vec<(&str, u32)> {
        self.passed_plazas
            .iter()
            .map(|p| (p.name.as_str(), p.fare(self.vehicle_class)))
            .collect()
    }
}

/// Route planning result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Toll/distance/time for a light vehicle
    pub toll: TollResult,
    /// Origin record; `None` only when an unknown key was tolerated
    pub origin: Option<Waypoint>,
    /// Destination record; `None` only when an unknown key was tolerated
    pub destination: Option<Waypoint>,
    /// Amenities on the route in corridor order
    pub amenities: Vec<Amenity>,
    /// Estimated fuel cost
    pub fuel_cost: u64,
    /// First few amenities on the route
    pub recommended_stops: Vec<Amenity>,
    /// Caller-supplied travel date, echoed unchanged
    pub travel_date: String,
    /// Caller-supplied departure time, echoed unchanged
    pub travel_time: String,
}

/// Distance/time/fuel estimate between two matched waypoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceEstimate {
    pub origin_key: String,
    pub destination_key: String,
    pub distance_km: f64,
    pub estimated_minutes: u32,
    pub fuel_cost: u64,
}
