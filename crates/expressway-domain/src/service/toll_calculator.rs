//! Toll calculation functions
//!
//! # Formulae
//! - passed plazas: `lo < km <= hi`
//! - total fare: sum of the class fare over passed plazas (missing rate = 0)
//! - travel time: `round(distance / speed * 60)` minutes

use crate::model::{BoundaryPolicy, TollPlaza, TravelInterval};
use expressway_types::VehicleClass;

/// Plazas crossed when travelling `interval`, in the order given
pub fn passed_plazas<'a>(
    plazas: &'a [TollPlaza],
    interval: &TravelInterval,
) -> impl Iterator<Item = &'a TollPlaza> + 'a {
    let interval = *interval;
    plazas
        .iter()
        .filter(move |p| interval.contains(p.km, BoundaryPolicy::StartExclusive))
}

/// Sum of fares for `class` across `plazas`
pub fn total_fare<'a>(plazas: impl IntoIterator<Item = &'a TollPlaza>, class: VehicleClass) -> u32 {
    plazas.into_iter().map(|p| p.fare(class)).sum()
}

/// Travel time in whole minutes at a constant average speed
///
/// Rounds half away from zero; distances are never negative so this
/// matches round-half-up.
pub fn estimate_minutes(distance_km: f64, average_speed_kmh: f64) -> u32 {
    (distance_km / average_speed_kmh * 60.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TollRates;

    fn plazas() -> Vec<TollPlaza> {
        vec![
            TollPlaza::new("Khalilpur", 56.0, TollRates::new(90, 145, 3215)),
            TollPlaza::new("Dausa", 260.0, TollRates::new(460, 600, 2800)),
            TollPlaza::new("Barkapara", 300.0, TollRates::new(500, 805, 3215)),
            TollPlaza::new("Kota", 410.0, TollRates::new(350, 550, 2500)),
        ]
    }

    // ==========================================
    // Plaza membership
    // ==========================================

    #[test]
    fn test_passed_plazas_full_stretch() {
        let plazas = plazas();
        let interval = TravelInterval::between(0.0, 410.0);
        let names: Vec<_> = passed_plazas(&plazas, &interval).map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Khalilpur", "Dausa", "Barkapara", "Kota"]);
    }

    #[test]
    fn test_plaza_at_start_excluded() {
        let plazas = plazas();
        let interval = TravelInterval::between(260.0, 410.0);
        let names: Vec<_> = passed_plazas(&plazas, &interval).map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Barkapara", "Kota"]);
    }

    #[test]
    fn test_plaza_at_end_included() {
        let plazas = plazas();
        let interval = TravelInterval::between(60.0, 260.0);
        let names: Vec<_> = passed_plazas(&plazas, &interval).map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Dausa"]);
    }

    // ==========================================
    // Fares
    // ==========================================

    #[test]
    fn test_total_fare_light() {
        let plazas = plazas();
        assert_eq!(total_fare(&plazas, VehicleClass::Light), 90 + 460 + 500 + 350);
    }

    #[test]
    fn test_total_fare_missing_rate() {
        let plazas = vec![
            TollPlaza::new("Full", 10.0, TollRates::new(10, 20, 30)),
            TollPlaza::new(
                "LightOnly",
                20.0,
                TollRates {
                    light: Some(5),
                    ..Default::default()
                },
            ),
        ];
        assert_eq!(total_fare(&plazas, VehicleClass::Heavy), 30);
        assert_eq!(total_fare(&plazas, VehicleClass::Light), 15);
    }

    #[test]
    fn test_total_fare_empty() {
        let plazas: Vec<TollPlaza> = Vec::new();
        assert_eq!(total_fare(&plazas, VehicleClass::Light), 0);
    }

    // ==========================================
    // Travel time
    // ==========================================

    #[test]
    fn test_estimate_minutes() {
        assert_eq!(estimate_minutes(410.0, 100.0), 246);
        assert_eq!(estimate_minutes(1350.0, 100.0), 810);
        assert_eq!(estimate_minutes(0.0, 100.0), 0);
    }

    #[test]
    fn test_estimate_minutes_rounds_half_up() {
        // 0.75 km at 100 km/h = 0.45 min -> 0; 1.25 km -> 0.75 min -> 1
        assert_eq!(estimate_minutes(0.75, 100.0), 0);
        assert_eq!(estimate_minutes(1.25, 100.0), 1);
        // 12.5 km -> 7.5 min -> 8
        assert_eq!(estimate_minutes(12.5, 100.0), 8);
    }
}
