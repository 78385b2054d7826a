//! Fleet configuration loading for the showcase
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::luxury::LuxuryCar;
use crate::sports::SportsCar;
use crate::vehicle::{Describe, Vehicle};

/// Errors raised while loading fleet data
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("fleet data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One configured vehicle of the showcase fleet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FleetEntry {
    Base {
        brand: String,
        model: String,
        year: i32,
    },
    Sports {
        brand: String,
        model: String,
        year: i32,
        top_speed: f64,
    },
    Luxury {
        brand: String,
        model: String,
        year: i32,
        #[serde(default)]
        luxury_features: Vec<String>,
    },
}

impl FleetEntry {
    /// Construct the concrete vehicle this entry describes.
    #[must_use]
    pub fn build(self) -> Showpiece {
        match self {
            Self::Base { brand, model, year } => Showpiece::Base(Vehicle::new(brand, model, year)),
            Self::Sports {
                brand,
                model,
                year,
                top_speed,
            } => Showpiece::Sports(SportsCar::new(brand, model, year, top_speed)),
            Self::Luxury {
                brand,
                model,
                year,
                luxury_features,
            } => Showpiece::Luxury(LuxuryCar::new(brand, model, year, luxury_features)),
        }
    }
}

/// A built showcase vehicle of any kind.
///
/// Closed enum so that handling of the variants stays exhaustive at
/// compile time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Showpiece {
    Base(Vehicle),
    Sports(SportsCar),
    Luxury(LuxuryCar),
}

impl Describe for Showpiece {
    fn describe(&self) -> String {
        match self {
            Self::Base(vehicle) => vehicle.describe(),
            Self::Sports(car) => car.describe(),
            Self::Luxury(car) => car.describe(),
        }
    }

    fn debug_repr(&self) -> String {
        match self {
            Self::Base(vehicle) => vehicle.debug_repr(),
            Self::Sports(car) => car.debug_repr(),
            Self::Luxury(car) => car.debug_repr(),
        }
    }
}

/// Container for the whole configured fleet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FleetConfig {
    pub vehicles: Vec<FleetEntry>,
}

impl FleetConfig {
    /// Create an empty fleet (useful for tests)
    #[must_use]
    pub fn empty() -> Self {
        Self {
            vehicles: Vec::new(),
        }
    }

    /// Load fleet data from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid fleet data.
    pub fn from_json(json: &str) -> Result<Self, FleetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build every configured entry into a concrete showcase vehicle.
    #[must_use]
    pub fn build_all(self) -> Vec<Showpiece> {
        self.vehicles.into_iter().map(FleetEntry::build).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fleet_json_parses_every_kind() {
        let json = r#"{
            "vehicles": [
                { "kind": "base", "brand": "Toyota", "model": "Camry", "year": 2020 },
                { "kind": "sports", "brand": "Ferrari", "model": "488", "year": 2020, "top_speed": 330.0 },
                { "kind": "luxury", "brand": "Rolls-Royce", "model": "Phantom", "year": 2021,
                  "luxury_features": ["массажные сиденья", "панорамная крыша"] }
            ]
        }"#;

        let fleet = FleetConfig::from_json(json).unwrap();
        assert_eq!(fleet.vehicles.len(), 3);
        assert!(matches!(fleet.vehicles[0], FleetEntry::Base { .. }));
        assert!(matches!(fleet.vehicles[1], FleetEntry::Sports { .. }));
        assert!(matches!(fleet.vehicles[2], FleetEntry::Luxury { .. }));
    }

    #[test]
    fn built_entries_match_direct_construction() {
        let entry = FleetEntry::Sports {
            brand: "Ferrari".to_string(),
            model: "488".to_string(),
            year: 2020,
            top_speed: 330.0,
        };
        let direct = SportsCar::new("Ferrari".to_string(), "488".to_string(), 2020, 330.0);
        assert_eq!(entry.build(), Showpiece::Sports(direct));
    }

    #[test]
    fn luxury_features_default_to_empty() {
        let json = r#"{
            "vehicles": [
                { "kind": "luxury", "brand": "Aurus", "model": "Senat", "year": 2022 }
            ]
        }"#;
        let fleet = FleetConfig::from_json(json).unwrap();
        let Showpiece::Luxury(car) = fleet.build_all().remove(0) else {
            panic!("expected a luxury car");
        };
        assert!(car.luxury_features.is_empty());
    }

    #[test]
    fn invalid_json_surfaces_as_fleet_error() {
        let err = FleetConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, FleetError::Json(_)));
    }

    #[test]
    fn empty_fleet_builds_nothing() {
        assert!(FleetConfig::empty().build_all().is_empty());
    }
}
