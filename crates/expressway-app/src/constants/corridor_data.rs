//! Delhi-Mumbai Expressway reference tables
//!
//! Trusted static data; positions are kilometres from Delhi.

use expressway_domain::model::{Amenity, Corridor, TollPlaza, TollRates, Waypoint};
use expressway_types::Facility::*;

pub const CORRIDOR_NAME: &str = "Delhi-Mumbai Expressway";

/// (key, name, state, km)
const CITIES: [(&str, &str, &str, f64); 10] = [
    ("delhi", "Delhi", "Delhi", 0.0),
    ("sohna", "Sohna", "Haryana", 60.0),
    ("alwar", "Alwar", "Rajasthan", 150.0),
    ("dausa", "Dausa", "Rajasthan", 260.0),
    ("kota", "Kota", "Rajasthan", 410.0),
    ("ratlam", "Ratlam", "Madhya Pradesh", 650.0),
    ("vadodara", "Vadodara", "Gujarat", 810.0),
    ("surat", "Surat", "Gujarat", 960.0),
    ("virar", "Virar", "Maharashtra", 1200.0),
    ("mumbai", "Mumbai", "Maharashtra", 1350.0),
];

/// (name, km, light, commercial, heavy)
const TOLL_PLAZAS: [(&str, f64, u32, u32, u32); 6] = [
    ("Khalilpur", 56.0, 90, 145, 3215),
    ("Barkapara", 300.0, 500, 805, 3215),
    ("Dausa", 260.0, 460, 600, 2800),
    ("Kota", 410.0, 350, 550, 2500),
    ("Vadodara", 810.0, 400, 650, 2900),
    ("Surat", 960.0, 300, 480, 2200),
];

/// Build the Delhi-Mumbai Expressway corridor
pub fn delhi_mumbai_expressway() -> Corridor {
    let waypoints = CITIES
        .iter()
        .map(|&(key, name, state, km)| Waypoint::new(key, name, state, km))
        .collect();

    let toll_plazas = TOLL_PLAZAS
        .iter()
        .map(|&(name, km, light, commercial, heavy)| {
            TollPlaza::new(name, km, TollRates::new(light, commercial, heavy))
        })
        .collect();

    let amenities = vec![
        Amenity::new("Sohna Service Area", 60.0, &[Fuel, Food, Rest, Medical]),
        Amenity::new("Dausa Rest Area", 260.0, &[Fuel, Food, Rest, Atm, Repair]),
        Amenity::new("Kota Service Complex", 410.0, &[Fuel, Food, Rest, Medical, Hotel]),
        Amenity::new(
            "Vadodara Hub",
            810.0,
            &[Fuel, Food, Rest, Medical, Hotel, Shopping],
        ),
        Amenity::new("Surat Service Area", 960.0, &[Fuel, Food, Rest, EvCharging]),
    ];

    Corridor::new(CORRIDOR_NAME, waypoints, toll_plazas, amenities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use expressway_types::VehicleClass;

    #[test]
    fn test_table_sizes() {
        let corridor = delhi_mumbai_expressway();
        assert_eq!(corridor.waypoints().len(), 10);
        assert_eq!(corridor.toll_plazas().len(), 6);
        assert_eq!(corridor.amenities().len(), 5);
    }

    #[test]
    fn test_builtin_tables_are_consistent() {
        assert!(delhi_mumbai_expressway().validate().is_ok());
    }

    #[test]
    fn test_plazas_in_corridor_order() {
        let corridor = delhi_mumbai_expressway();
        let names: Vec<_> = corridor.toll_plazas().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Khalilpur", "Dausa", "Barkapara", "Kota", "Vadodara", "Surat"]
        );
    }

    #[test]
    fn test_waypoint_order_is_table_order() {
        let corridor = delhi_mumbai_expressway();
        let keys: Vec<_> = corridor.keys().collect();
        assert_eq!(keys.first(), Some(&"delhi"));
        assert_eq!(keys.last(), Some(&"mumbai"));
    }

    #[test]
    fn test_khalilpur_rates() {
        let corridor = delhi_mumbai_expressway();
        let khalilpur = &corridor.toll_plazas()[0];
        assert_eq!(khalilpur.fare(VehicleClass::Light), 90);
        assert_eq!(khalilpur.fare(VehicleClass::Heavy), 3215);
    }
}
