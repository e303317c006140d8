//! Mock weather and traffic conditions
//!
//! There is no live data source; conditions are drawn from an injected
//! random number generator so runs can be reproduced from a seed.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

const DEFAULT_TEMPERATURE_C: i32 = 27;

/// Typical temperatures (°C) for a few waypoints
const BASE_TEMPERATURES: [(&str, i32); 4] = [
    ("delhi", 25),
    ("mumbai", 28),
    ("kota", 30),
    ("vadodara", 26),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherCondition {
    Clear,
    PartlyCloudy,
    Cloudy,
    LightRain,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 4] = [
        WeatherCondition::Clear,
        WeatherCondition::PartlyCloudy,
        WeatherCondition::Cloudy,
        WeatherCondition::LightRain,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::PartlyCloudy => "Partly Cloudy",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::LightRain => "Light Rain",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub condition: WeatherCondition,
    pub temperature_c: i32,
    pub visibility: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrafficLevel {
    Light,
    Moderate,
    Heavy,
}

impl TrafficLevel {
    pub const ALL: [TrafficLevel; 3] = [TrafficLevel::Light, TrafficLevel::Moderate, TrafficLevel::Heavy];

    /// Expected extra travel time
    pub fn delay_minutes(&self) -> u32 {
        match self {
            TrafficLevel::Light => 0,
            TrafficLevel::Moderate => 15,
            TrafficLevel::Heavy => 30,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrafficLevel::Light => "Light",
            TrafficLevel::Moderate => "Moderate",
            TrafficLevel::Heavy => "Heavy",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            TrafficLevel::Heavy => "Consider alternative timing",
            _ => "Good time to travel",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficReport {
    pub level: TrafficLevel,
    pub delay_minutes: u32,
    pub recommendation: String,
}

/// Typical temperature for a waypoint key
pub fn base_temperature(waypoint_key: &str) -> i32 {
    BASE_TEMPERATURES
        .iter()
        .find(|(key, _)| *key == waypoint_key)
        .map(|(_, t)| *t)
        .unwrap_or(DEFAULT_TEMPERATURE_C)
}

/// Generator of mock travel conditions
pub struct ConditionsGenerator<R: Rng> {
    rng: R,
}

impl ConditionsGenerator<ChaCha8Rng> {
    /// Deterministic generator from a seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }

    /// Seeded when a seed is given, otherwise from OS entropy
    pub fn with_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => {
                debug!("Mock conditions seeded with {}", seed);
                Self::seeded(seed)
            }
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> ConditionsGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn weather(&mut self, waypoint_key: &str) -> Weather {
        let idx = self.rng.gen_range(0..WeatherCondition::ALL.len());
        Weather {
            condition: WeatherCondition::ALL[idx],
            temperature_c: base_temperature(waypoint_key),
            visibility: "Good".to_string(),
            recommendation: "Safe to travel".to_string(),
        }
    }

    pub fn traffic(&mut self) -> TrafficReport {
        let idx = self.rng.gen_range(0..TrafficLevel::ALL.len());
        let level = TrafficLevel::ALL[idx];
        TrafficReport {
            level,
            delay_minutes: level.delay_minutes(),
            recommendation: level.recommendation().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_temperature() {
        assert_eq!(base_temperature("kota"), 30);
        assert_eq!(base_temperature("surat"), DEFAULT_TEMPERATURE_C);
    }

    #[test]
    fn test_same_seed_same_conditions() {
        let mut a = ConditionsGenerator::seeded(42);
        let mut b = ConditionsGenerator::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.weather("delhi"), b.weather("delhi"));
            assert_eq!(a.traffic(), b.traffic());
        }
    }

    #[test]
    fn test_with_seed_matches_seeded() {
        let mut a = ConditionsGenerator::with_seed(Some(42));
        let mut b = ConditionsGenerator::seeded(42);
        assert_eq!(a.weather("kota"), b.weather("kota"));
        assert_eq!(a.traffic(), b.traffic());
    }

    #[test]
    fn test_traffic_delay_matches_level() {
        let mut generator = ConditionsGenerator::seeded(7);
        for _ in 0..20 {
            let report = generator.traffic();
            assert_eq!(report.delay_minutes, report.level.delay_minutes());
            assert_eq!(report.recommendation, report.level.recommendation());
        }
    }

    #[test]
    fn test_heavy_traffic_recommendation() {
        assert_eq!(TrafficLevel::Heavy.delay_minutes(), 30);
        assert_eq!(TrafficLevel::Heavy.recommendation(), "Consider alternative timing");
        assert_eq!(TrafficLevel::Light.recommendation(), "Good time to travel");
    }

    #[test]
    fn test_weather_fixed_fields() {
        let mut generator = ConditionsGenerator::seeded(1);
        let weather = generator.weather("mumbai");
        assert_eq!(weather.temperature_c, 28);
        assert_eq!(weather.visibility, "Good");
        assert_eq!(weather.recommendation, "Safe to travel");
    }
}
