//! Domain services
//!
//! Pure calculation functions over corridor data, plus the
//! `RouteCalculator` that binds them to an injected corridor.

pub mod route_calculator;
pub mod route_planner;
pub mod toll_calculator;
pub mod travel_conditions;
pub mod waypoint_matcher;

pub use route_calculator::{RouteCalculator, RouteSettings, WaypointResolution};
pub use toll_calculator::{estimate_minutes, passed_plazas, total_fare};
pub use travel_conditions::{ConditionsGenerator, TrafficLevel, TrafficReport, Weather, WeatherCondition};
pub use waypoint_matcher::find_nearest_waypoint;
