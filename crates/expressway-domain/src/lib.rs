//! Domain layer for expressway route calculation
//!
//! Holds the corridor reference model and the pure services that derive
//! tolls, distances, and route summaries from it.

pub mod model;
pub mod repository;
pub mod service;

pub use model::*;
pub use repository::CorridorRepository;
pub use service::{RouteCalculator, RouteSettings, WaypointResolution};
