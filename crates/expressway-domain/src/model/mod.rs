//! Domain model types

pub mod amenity;
pub mod corridor;
pub mod route;
pub mod toll_plaza;
pub mod waypoint;

pub use amenity::Amenity;
pub use corridor::Corridor;
pub use route::{BoundaryPolicy, DistanceEstimate, RouteSummary, TollResult, TravelInterval};
pub use toll_plaza::{TollPlaza, TollRates};
pub use waypoint::Waypoint;
