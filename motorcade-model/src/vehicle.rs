//! Base vehicle record and the shared presentation contract
use serde::{Deserialize, Serialize};

/// The two named string representations every showcase vehicle exposes.
///
/// These are explicit operations rather than `Display`/`Debug` impls
/// because their output is the showcase's console contract and must be
/// reproduced character-for-character.
pub trait Describe {
    /// Human-readable display representation.
    fn describe(&self) -> String;

    /// Machine-oriented representation enumerating every field in
    /// reconstructable form, string fields quoted.
    fn debug_repr(&self) -> String;
}

/// Base vehicle record: brand, model, and production year.
///
/// All three fields are set at construction and never mutated. Inputs are
/// deliberately unvalidated; empty strings and non-positive years are
/// accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub brand: String,
    pub model: String,
    pub year: i32,
}

impl Vehicle {
    #[must_use]
    pub const fn new(brand: String, model: String, year: i32) -> Self {
        Self { brand, model, year }
    }

    /// Basic vehicle information: `"{year} {brand} {model}"`.
    #[must_use]
    pub fn info(&self) -> String {
        format!("{} {} {}", self.year, self.brand, self.model)
    }
}

impl Describe for Vehicle {
    fn describe(&self) -> String {
        self.info()
    }

    fn debug_repr(&self) -> String {
        format!(
            "Vehicle(brand={:?}, model={:?}, year={})",
            self.brand, self.model, self.year
        )
    }
}
