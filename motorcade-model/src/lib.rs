//! Motorcade Model
//!
//! Platform-agnostic vehicle hierarchy for the Motorcade showcase.
//! This crate provides the base vehicle record, its specialized variants,
//! and the fleet configuration loader without any UI or I/O dependencies.

pub mod constants;
pub mod fleet;
pub mod luxury;
pub mod sports;
pub mod vehicle;

// Re-export commonly used types
pub use fleet::{FleetConfig, FleetEntry, FleetError, Showpiece};
pub use luxury::LuxuryCar;
pub use sports::SportsCar;
pub use vehicle::{Describe, Vehicle};
