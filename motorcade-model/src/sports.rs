//! Sports car variant with in-place acceleration
use serde::{Deserialize, Serialize};

use crate::constants::NITROUS_BOOST_FACTOR;
use crate::vehicle::{Describe, Vehicle};

/// Sports car: the base record plus a mutable top speed in miles per hour.
///
/// `top_speed` changes only through [`SportsCar::accelerate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportsCar {
    #[serde(flatten)]
    pub vehicle: Vehicle,
    pub top_speed: f64,
}

impl SportsCar {
    #[must_use]
    pub const fn new(brand: String, model: String, year: i32, top_speed: f64) -> Self {
        Self {
            vehicle: Vehicle::new(brand, model, year),
            top_speed,
        }
    }

    /// Raise the top speed by `speed_increase` MPH, or by 1.5x that amount
    /// when nitrous oxide is engaged.
    ///
    /// No bounds are enforced: the top speed may grow without limit, and a
    /// negative `speed_increase` lowers it.
    pub fn accelerate(&mut self, speed_increase: f64, nitrous_oxide: bool) {
        if nitrous_oxide {
            self.top_speed += speed_increase * NITROUS_BOOST_FACTOR;
        } else {
            self.top_speed += speed_increase;
        }
    }
}

impl Describe for SportsCar {
    fn describe(&self) -> String {
        // {:?} keeps the trailing ".0" on whole-number speeds
        format!(
            "{} - Максимальная скорость: {:?} MPH",
            self.vehicle.describe(),
            self.top_speed
        )
    }

    fn debug_repr(&self) -> String {
        format!(
            "SportsCar(brand={:?}, model={:?}, year={}, top_speed={:?})",
            self.vehicle.brand, self.vehicle.model, self.vehicle.year, self.top_speed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ferrari() -> SportsCar {
        SportsCar::new("Ferrari".to_string(), "488".to_string(), 2020, 330.0)
    }

    #[test]
    fn plain_acceleration_adds_exactly_the_increase() {
        let mut car = ferrari();
        car.accelerate(10.0, false);
        assert!((car.top_speed - 340.0).abs() <= f64::EPSILON);
    }

    #[test]
    fn nitrous_acceleration_adds_one_and_a_half_times() {
        let mut car = ferrari();
        car.accelerate(10.0, false);
        car.accelerate(5.0, true);
        assert!((car.top_speed - 347.5).abs() <= f64::EPSILON);
    }

    #[test]
    fn negative_increase_lowers_the_top_speed() {
        let mut car = ferrari();
        car.accelerate(-30.0, false);
        assert!((car.top_speed - 300.0).abs() <= f64::EPSILON);
    }

    #[test]
    fn describe_reflects_the_current_speed() {
        let mut car = ferrari();
        assert_eq!(
            car.describe(),
            "2020 Ferrari 488 - Максимальная скорость: 330.0 MPH"
        );
        car.accelerate(7.5, false);
        assert_eq!(
            car.describe(),
            "2020 Ferrari 488 - Максимальная скорость: 337.5 MPH"
        );
    }

    #[test]
    fn debug_repr_includes_every_field() {
        assert_eq!(
            ferrari().debug_repr(),
            "SportsCar(brand=\"Ferrari\", model=\"488\", year=2020, top_speed=330.0)"
        );
    }
}
