//! Centralized tuning constants for the Motorcade vehicle model.
//!
//! Keeping them together ensures that showcase behavior can only be
//! adjusted via code changes reviewed in version control.

// Acceleration tuning ------------------------------------------------------
/// Multiplier applied to a speed increase when nitrous oxide is engaged.
pub(crate) const NITROUS_BOOST_FACTOR: f64 = 1.5;
