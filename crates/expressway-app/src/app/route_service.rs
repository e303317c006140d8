//! Route Service - toll, route, and distance use cases
//!
//! Wires configuration and the corridor source to a `RouteCalculator` and
//! adds the input handling of the interactive tools:
//! - toll quotes reject identical start and destination
//! - free-text route planning falls back to the corridor ends
//! - toll reports carry mock weather and traffic
//! - route reports carry mock weather at the origin

use expressway_domain::model::{DistanceEstimate, RouteSummary, TollResult, Waypoint};
use expressway_domain::service::{ConditionsGenerator, TrafficReport, Weather};
use expressway_domain::RouteCalculator;
use expressway_types::{Error, Result, VehicleClass};
use log::{info, warn};
use rand::Rng;
use serde::Serialize;

use crate::config::Config;
use crate::repository::open_corridor_repo;

/// Toll result with mock travel conditions at the origin
#[derive(Debug, Clone, Serialize)]
pub struct TollReport {
    pub toll: TollResult,
    pub weather: Weather,
    pub traffic: TrafficReport,
}

impl TollReport {
    /// Estimated minutes including the traffic delay
    pub fn total_minutes(&self) -> u32 {
        self.toll.estimated_minutes + self.traffic.delay_minutes
    }
}

/// Route plan with mock weather at the origin
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    pub route: RouteSummary,
    pub weather: Weather,
}

pub struct RouteService {
    calculator: RouteCalculator,
    source: String,
}

impl RouteService {
    pub fn new(calculator: RouteCalculator, source: &str) -> Self {
        Self {
            calculator,
            source: source.to_string(),
        }
    }

    /// Build the service from config: settings, corridor source, rate sheet
    pub fn from_config(config: &Config) -> Result<Self> {
        let settings = config.route_settings();
        settings.validate()?;

        let repo = open_corridor_repo(config);
        let corridor = repo.load()?;
        info!("Loaded corridor '{}' from {}", corridor.name(), repo.describe());

        Ok(Self::new(RouteCalculator::new(corridor, settings), &repo.describe()))
    }

    pub fn calculator(&self) -> &RouteCalculator {
        &self.calculator
    }

    /// Where the corridor data came from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Toll between two waypoint keys; start and destination must differ
    pub fn quote_toll(
        &self,
        origin_key: &str,
        destination_key: &str,
        vehicle_class: VehicleClass,
    ) -> Result<TollResult> {
        if origin_key.trim() == destination_key.trim() {
            return Err(Error::InvalidInput(
                "Starting point and destination cannot be the same".to_string(),
            ));
        }
        self.calculator
            .compute_toll(origin_key.trim(), destination_key.trim(), vehicle_class)
    }

    /// Toll quote plus mock weather at the origin and traffic on the route
    pub fn toll_report<R: Rng>(
        &self,
        origin_key: &str,
        destination_key: &str,
        vehicle_class: VehicleClass,
        conditions: &mut ConditionsGenerator<R>,
    ) -> Result<TollReport> {
        let toll = self.quote_toll(origin_key, destination_key, vehicle_class)?;
        Ok(TollReport {
            toll,
            weather: conditions.weather(origin_key.trim()),
            traffic: conditions.traffic(),
        })
    }

    /// Plan a route between two free-text points
    ///
    /// An unmatched origin falls back to the corridor start and an unmatched
    /// destination to the corridor end.
    pub fn plan_route_from_text(
        &self,
        from_text: &str,
        to_text: &str,
        travel_date: &str,
        travel_time: &str,
    ) -> Result<RouteSummary> {
        let (origin, destination) = self.resolve_endpoints(from_text, to_text)?;
        self.calculator
            .plan_route(origin, destination, travel_date, travel_time)
    }

    /// Free-text route plan plus mock weather at the resolved origin
    pub fn route_report<R: Rng>(
        &self,
        from_text: &str,
        to_text: &str,
        travel_date: &str,
        travel_time: &str,
        conditions: &mut ConditionsGenerator<R>,
    ) -> Result<RouteReport> {
        let (origin, destination) = self.resolve_endpoints(from_text, to_text)?;
        let route = self
            .calculator
            .plan_route(origin, destination, travel_date, travel_time)?;
        Ok(RouteReport {
            route,
            weather: conditions.weather(origin),
        })
    }

    fn resolve_endpoints(&self, from_text: &str, to_text: &str) -> Result<(&str, &str)> {
        let corridor = self.calculator.corridor();
        let start = corridor
            .start()
            .ok_or_else(|| Error::InvalidCorridor("corridor has no waypoints".to_string()))?;
        let end = corridor
            .end()
            .ok_or_else(|| Error::InvalidCorridor("corridor has no waypoints".to_string()))?;

        Ok((self.match_or(from_text, start), self.match_or(to_text, end)))
    }

    fn match_or<'a>(&'a self, text: &str, fallback: &'a Waypoint) -> &'a str {
        match self.calculator.find_nearest_waypoint_key(text) {
            Some(key) => key,
            None => {
                warn!("No waypoint matches \"{}\", using {}", text.trim(), fallback.key);
                &fallback.key
            }
        }
    }

    /// Distance estimate between two free-text points
    pub fn estimate_distance(&self, from_text: &str, to_text: &str) -> Result<DistanceEstimate> {
        self.calculator.estimate_distance(from_text, to_text)
    }

    /// Waypoint matched by free text
    pub fn match_waypoint(&self, fragment: &str) -> Option<&Waypoint> {
        let key = self.calculator.find_nearest_waypoint_key(fragment)?;
        self.calculator.corridor().waypoint(key)
    }
}
