//! City card data model.
//!
//! A `Card` holds the raw fields entered by the player plus two derived
//! metrics. Raw fields are deliberately permissive: the region letter is
//! not checked against A-H and a zero or negative area is tolerated (the
//! metric guards handle it). Exactly two cards exist per match and
//! neither mutates after its metrics are computed.

use serde::{Deserialize, Serialize};

/// One player's city card.
///
/// ## Example
///
/// ```
/// use super_trunfo::Card;
///
/// let mut card = Card::new('A', "A01", "Porto Alto");
/// card.population = 1_000_000;
/// card.area_km2 = 500.0;
/// card.compute_metrics();
///
/// assert_eq!(card.density, 2000.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Region letter, A-H by convention (not validated).
    pub region_letter: char,

    /// Short card code, e.g. "A01" (at most 4 characters).
    pub code: String,

    /// City name (at most 49 characters).
    pub name: String,

    /// Inhabitants.
    pub population: u64,

    /// Surface area in square kilometres.
    pub area_km2: f64,

    /// Gross domestic product, in billions of currency units.
    pub gdp_billions: f64,

    /// Number of tourist attractions.
    pub landmark_count: i64,

    /// Derived: inhabitants per square kilometre.
    pub density: f64,

    /// Derived: GDP in currency units per inhabitant.
    pub gdp_per_capita: f64,
}

impl Card {
    /// Create a card with zeroed numeric fields and no derived metrics.
    #[must_use]
    pub fn new(region_letter: char, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            region_letter,
            code: code.into(),
            name: name.into(),
            population: 0,
            area_km2: 0.0,
            gdp_billions: 0.0,
            landmark_count: 0,
            density: 0.0,
            gdp_per_capita: 0.0,
        }
    }

    /// Compute the derived metrics from the raw fields.
    ///
    /// Both divisions are guarded: a non-positive area yields a density
    /// of zero, and a zero population yields a GDP per capita of zero.
    /// Idempotent for unchanged raw fields.
    pub fn compute_metrics(&mut self) {
        self.density = if self.area_km2 > 0.0 {
            self.population as f64 / self.area_km2
        } else {
            0.0
        };

        self.gdp_per_capita = if self.population > 0 {
            // GDP is entered in billions; convert to absolute units first.
            (self.gdp_billions * 1e9) / self.population as f64
        } else {
            0.0
        };
    }
}
