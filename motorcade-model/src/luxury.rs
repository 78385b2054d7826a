//! Luxury car variant with a read-only feature list
use serde::{Deserialize, Serialize};

use crate::vehicle::{Describe, Vehicle};

/// Fixed second line of every luxury car description.
const COMFORT_TAGLINE: &str = "Этот автомобиль поддерживает высокий стандарт комфорта.";

/// Luxury car: the base record plus an ordered list of luxury features.
///
/// The feature list is taken by value at construction and never mutated
/// afterwards; insertion order is preserved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuxuryCar {
    #[serde(flatten)]
    pub vehicle: Vehicle,
    pub luxury_features: Vec<String>,
}

impl LuxuryCar {
    #[must_use]
    pub const fn new(
        brand: String,
        model: String,
        year: i32,
        luxury_features: Vec<String>,
    ) -> Self {
        Self {
            vehicle: Vehicle::new(brand, model, year),
            luxury_features,
        }
    }

    /// Activation message for a named luxury feature.
    ///
    /// Instance-free: the message is a pure function of `feature` and does
    /// not consult any car's feature list.
    #[must_use]
    pub fn activate_luxury_feature(feature: &str) -> String {
        format!("Активирована роскошная особенность: {feature}")
    }
}

impl Describe for LuxuryCar {
    fn describe(&self) -> String {
        format!(
            "{} - Роскошные особенности: {}.\n{}",
            self.vehicle.describe(),
            self.luxury_features.join(", "),
            COMFORT_TAGLINE
        )
    }

    fn debug_repr(&self) -> String {
        format!(
            "LuxuryCar(brand={:?}, model={:?}, year={}, luxury_features={:?})",
            self.vehicle.brand, self.vehicle.model, self.vehicle.year, self.luxury_features
        )
    }
}
