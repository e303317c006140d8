//! Application use cases

pub mod clock;
pub mod route_service;

pub use clock::{format_ist, ist_now};
pub use route_service::{RouteReport, RouteService, TollReport};
