//! Route calculator bound to one corridor
//!
//! All operations are pure functions of the injected corridor, the settings,
//! and the call arguments. The calculator holds no mutable state and can be
//! shared across threads by reference.

use super::route_planner::{amenities_in_range, fuel_cost, recommended_stops};
use super::toll_calculator::{estimate_minutes, passed_plazas, total_fare};
use super::waypoint_matcher::find_nearest_waypoint;
use crate::model::{Corridor, DistanceEstimate, RouteSummary, TollResult, TravelInterval, Waypoint};
use expressway_types::{ConfigError, Error, Result, VehicleClass};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Route planning always prices the trip for this class
pub const ROUTE_VEHICLE_CLASS: VehicleClass = VehicleClass::Light;

pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 100.0;
pub const DEFAULT_FUEL_COST_RATE_PER_KM: f64 = 0.08;
pub const DEFAULT_FUEL_COST_SCALE: f64 = 100.0;
pub const DEFAULT_RECOMMENDED_STOP_COUNT: usize = 3;

/// How unknown waypoint keys are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaypointResolution {
    /// Unknown keys fail with `Error::UnknownWaypoint`
    #[default]
    Strict,
    /// Unknown keys sit at km 0. Compatibility mode: a typo silently
    /// measures from the corridor origin.
    Lenient,
}

impl std::fmt::Display for WaypointResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WaypointResolution::Strict => write!(f, "strict"),
            WaypointResolution::Lenient => write!(f, "lenient"),
        }
    }
}

/// Tunable constants of the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSettings {
    /// Constant average speed used for travel time
    pub average_speed_kmh: f64,
    /// Fuel cost per kilometre before scaling
    pub fuel_cost_rate_per_km: f64,
    /// Multiplier applied to the per-km fuel cost
    pub fuel_cost_scale: f64,
    /// Number of amenities offered as recommended stops
    pub recommended_stop_count: usize,
    pub resolution: WaypointResolution,
}

impl Default for RouteSettings {
    fn default() -> Self {
        Self {
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
            fuel_cost_rate_per_km: DEFAULT_FUEL_COST_RATE_PER_KM,
            fuel_cost_scale: DEFAULT_FUEL_COST_SCALE,
            recommended_stop_count: DEFAULT_RECOMMENDED_STOP_COUNT,
            resolution: WaypointResolution::default(),
        }
    }
}

impl RouteSettings {
    pub fn validate(&self) -> Result<()> {
        if !self.average_speed_kmh.is_finite() || self.average_speed_kmh <= 0.0 {
            return Err(ConfigError::InvalidSetting {
                name: "average_speed_kmh",
                reason: format!("must be a positive number, got {}", self.average_speed_kmh),
            }
            .into());
        }
        if !self.fuel_cost_rate_per_km.is_finite() || self.fuel_cost_rate_per_km < 0.0 {
            return Err(ConfigError::InvalidSetting {
                name: "fuel_cost_rate_per_km",
                reason: format!("must be zero or positive, got {}", self.fuel_cost_rate_per_km),
            }
            .into());
        }
        if !self.fuel_cost_scale.is_finite() || self.fuel_cost_scale < 0.0 {
            return Err(ConfigError::InvalidSetting {
                name: "fuel_cost_scale",
                reason: format!("must be zero or positive, got {}", self.fuel_cost_scale),
            }
            .into());
        }
        Ok(())
    }

    fn fuel_cost(&self, distance_km: f64) -> u64 {
        fuel_cost(distance_km, self.fuel_cost_rate_per_km, self.fuel_cost_scale)
    }
}

/// Toll and route calculator over an injected corridor
#[derive(Debug, Clone)]
pub struct RouteCalculator {
    corridor: Corridor,
    settings: RouteSettings,
}

impl RouteCalculator {
    pub fn new(corridor: Corridor, settings: RouteSettings) -> Self {
        Self { corridor, settings }
    }

    pub fn corridor(&self) -> &Corridor {
        &self.corridor
    }

    pub fn settings(&self) -> &RouteSettings {
        &self.settings
    }

    /// Resolve a key according to the resolution policy
    ///
    /// Returns `Ok(None)` only in lenient mode for an unknown key.
    fn resolve(&self, key: &str) -> Result<Option<&Waypoint>> {
        match self.corridor.waypoint(key) {
            Some(w) => Ok(Some(w)),
            None => match self.settings.resolution {
                WaypointResolution::Strict => Err(Error::UnknownWaypoint(key.to_string())),
                WaypointResolution::Lenient => {
                    warn!("Unknown waypoint '{}', measuring from km 0", key);
                    Ok(None)
                }
            },
        }
    }

    fn interval(&self, origin: Option<&Waypoint>, destination: Option<&Waypoint>) -> TravelInterval {
        let km = |w: Option<&Waypoint>| w.map(|w| w.km).unwrap_or(0.0);
        TravelInterval::between(km(origin), km(destination))
    }

    fn toll_for_interval(&self, interval: &TravelInterval, vehicle_class: VehicleClass) -> TollResult {
        let passed: Vec<_> = passed_plazas(self.corridor.toll_plazas(), interval)
            .cloned()
            .collect();
        let distance_km = interval.length();

        TollResult {
            vehicle_class,
            total_toll: total_fare(&passed, vehicle_class),
            passed_plazas: passed,
            distance_km,
            estimated_minutes: estimate_minutes(distance_km, self.settings.average_speed_kmh),
        }
    }

    /// Toll, distance, and time between two waypoint keys
    ///
    /// Direction does not matter: the travelled interval is `[lo, hi]` with
    /// plazas counted when `lo < km <= hi`.
    pub fn compute_toll(
        &self,
        origin_key: &str,
        destination_key: &str,
        vehicle_class: VehicleClass,
    ) -> Result<TollResult> {
        let origin = self.resolve(origin_key)?;
        let destination = self.resolve(destination_key)?;
        let interval = self.interval(origin, destination);

        let result = self.toll_for_interval(&interval, vehicle_class);
        debug!(
            "toll {} -> {} ({}): {} km, {} plazas, total {}",
            origin_key,
            destination_key,
            vehicle_class,
            result.distance_km,
            result.passed_plazas.len(),
            result.total_toll
        );
        Ok(result)
    }

    /// Route summary for a light vehicle, with amenities and fuel cost
    ///
    /// `travel_date` and `travel_time` are not interpreted.
    pub fn plan_route(
        &self,
        origin_key: &str,
        destination_key: &str,
        travel_date: &str,
        travel_time: &str,
    ) -> Result<RouteSummary> {
        let origin = self.resolve(origin_key)?;
        let destination = self.resolve(destination_key)?;
        let interval = self.interval(origin, destination);

        let toll = self.toll_for_interval(&interval, ROUTE_VEHICLE_CLASS);
        let amenities = amenities_in_range(self.corridor.amenities(), &interval);
        let stops = recommended_stops(&amenities, self.settings.recommended_stop_count);
        let fuel_cost = self.settings.fuel_cost(toll.distance_km);

        debug!(
            "route {} -> {}: {} km, {} amenities, fuel {}",
            origin_key,
            destination_key,
            toll.distance_km,
            amenities.len(),
            fuel_cost
        );

        Ok(RouteSummary {
            toll,
            origin: origin.cloned(),
            destination: destination.cloned(),
            amenities,
            fuel_cost,
            recommended_stops: stops,
            travel_date: travel_date.to_string(),
            travel_time: travel_time.to_string(),
        })
    }

    /// Map loose text to a waypoint key; first match in corridor order wins
    pub fn find_nearest_waypoint_key(&self, fragment: &str) -> Option<&str> {
        find_nearest_waypoint(self.corridor.waypoints(), fragment).map(|w| w.key.as_str())
    }

    /// Distance, time, and fuel cost between two free-text points
    ///
    /// Both fragments must match a waypoint; the resolution policy does not
    /// apply here.
    pub fn estimate_distance(&self, from_text: &str, to_text: &str) -> Result<DistanceEstimate> {
        let waypoints = self.corridor.waypoints();
        let origin = find_nearest_waypoint(waypoints, from_text)
            .ok_or_else(|| Error::NoWaypointMatch(from_text.trim().to_string()))?;
        let destination = find_nearest_waypoint(waypoints, to_text)
            .ok_or_else(|| Error::NoWaypointMatch(to_text.trim().to_string()))?;

        let distance_km = TravelInterval::between(origin.km, destination.km).length();
        Ok(DistanceEstimate {
            origin_key: origin.key.clone(),
            destination_key: destination.key.clone(),
            distance_km,
            estimated_minutes: estimate_minutes(distance_km, self.settings.average_speed_kmh),
            fuel_cost: self.settings.fuel_cost(distance_km),
        })
    }
}
