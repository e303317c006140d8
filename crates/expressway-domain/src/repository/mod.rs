//! Repository trait for corridor reference data

use crate::model::Corridor;
use expressway_types::Result;

/// Source of corridor reference data
///
/// Implementations load the tables once; the returned corridor is treated as
/// immutable by everything downstream.
pub trait CorridorRepository {
    /// Load the corridor
    fn load(&self) -> Result<Corridor>;

    /// Human-readable description of where the data comes from
    fn describe(&self) -> String;
}
