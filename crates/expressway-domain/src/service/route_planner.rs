//! Route planning helpers: amenities on a route and fuel cost

use crate::model::{Amenity, BoundaryPolicy, TravelInterval};

/// Amenities on `interval`, both ends included, in the order given
pub fn amenities_in_range(amenities: &[Amenity], interval: &TravelInterval) -> Vec<Amenity> {
    amenities
        .iter()
        .filter(|a| interval.contains(a.km, BoundaryPolicy::Inclusive))
        .cloned()
        .collect()
}

/// Fuel cost estimate: `round(distance * rate_per_km * scale)`
pub fn fuel_cost(distance_km: f64, rate_per_km: f64, scale: f64) -> u64 {
    (distance_km * rate_per_km * scale).round() as u64
}

/// The first `count` amenities, in route order
pub fn recommended_stops(on_route: &[Amenity], count: usize) -> Vec<Amenity> {
    on_route.iter().take(count).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use expressway_types::Facility;

    fn amenities() -> Vec<Amenity> {
        vec![
            Amenity::new("Sohna Service Area", 60.0, &[Facility::Fuel]),
            Amenity::new("Dausa Rest Area", 260.0, &[Facility::Atm]),
            Amenity::new("Kota Service Complex", 410.0, &[Facility::Hotel]),
            Amenity::new("Vadodara Hub", 810.0, &[Facility::Shopping]),
            Amenity::new("Surat Service Area", 960.0, &[Facility::EvCharging]),
        ]
    }

    #[test]
    fn test_amenities_include_both_ends() {
        let interval = TravelInterval::between(60.0, 410.0);
        let names: Vec<_> = amenities_in_range(&amenities(), &interval)
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(
            names,
            vec!["Sohna Service Area", "Dausa Rest Area", "Kota Service Complex"]
        );
    }

    #[test]
    fn test_amenities_none_in_range() {
        let interval = TravelInterval::between(0.0, 50.0);
        assert!(amenities_in_range(&amenities(), &interval).is_empty());
    }

    #[test]
    fn test_fuel_cost() {
        assert_eq!(fuel_cost(410.0, 0.08, 100.0), 3280);
        assert_eq!(fuel_cost(1350.0, 0.08, 100.0), 10800);
        assert_eq!(fuel_cost(0.0, 0.08, 100.0), 0);
    }

    #[test]
    fn test_recommended_stops_truncates() {
        let all = amenities();
        let stops = recommended_stops(&all, 3);
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[0].name, "Sohna Service Area");
        assert_eq!(stops[2].name, "Kota Service Complex");
    }

    #[test]
    fn test_recommended_stops_fewer_than_count() {
        let all = amenities();
        assert_eq!(recommended_stops(&all[..2], 3).len(), 2);
    }
}
