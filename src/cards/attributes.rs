//! Attribute catalog for card comparison.
//!
//! The set of comparable attributes is closed and fixed at six, so it is
//! modelled as an enum with per-variant dispatch for the display name,
//! the base-value accessor, and the scoring transform.
//!
//! ## Scoring Rule
//!
//! Higher is better for every attribute except `Density`, where lower is
//! better. Density scores as the multiplicative inverse of the base value
//! (zero when the base value is not positive); no other attribute is
//! transformed, normalized, or rescaled.

use serde::{Deserialize, Serialize};

use super::card::Card;

/// One of the six comparable attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeId {
    /// Inhabitants.
    Population,
    /// Surface area in km².
    Area,
    /// GDP in billions.
    Gdp,
    /// Tourist attraction count.
    Landmarks,
    /// Inhabitants per km² (lower is better).
    Density,
    /// GDP per inhabitant.
    GdpPerCapita,
}

impl AttributeId {
    /// All attributes, in menu order.
    pub const ALL: [AttributeId; 6] = [
        AttributeId::Population,
        AttributeId::Area,
        AttributeId::Gdp,
        AttributeId::Landmarks,
        AttributeId::Density,
        AttributeId::GdpPerCapita,
    ];

    /// The 1-based number shown in the selection menu.
    #[must_use]
    pub const fn menu_index(self) -> u8 {
        match self {
            AttributeId::Population => 1,
            AttributeId::Area => 2,
            AttributeId::Gdp => 3,
            AttributeId::Landmarks => 4,
            AttributeId::Density => 5,
            AttributeId::GdpPerCapita => 6,
        }
    }

    /// Look up an attribute by its menu number (1-6).
    #[must_use]
    pub fn from_menu_index(index: i64) -> Option<Self> {
        match index {
            1 => Some(AttributeId::Population),
            2 => Some(AttributeId::Area),
            3 => Some(AttributeId::Gdp),
            4 => Some(AttributeId::Landmarks),
            5 => Some(AttributeId::Density),
            6 => Some(AttributeId::GdpPerCapita),
            _ => None,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            AttributeId::Population => "Population",
            AttributeId::Area => "Area",
            AttributeId::Gdp => "GDP",
            AttributeId::Landmarks => "Landmarks",
            AttributeId::Density => "Density (lower is better)",
            AttributeId::GdpPerCapita => "GDP per Capita",
        }
    }

    /// The raw or derived reading for this attribute, untransformed.
    #[must_use]
    pub fn base_value(self, card: &Card) -> f64 {
        match self {
            AttributeId::Population => card.population as f64,
            AttributeId::Area => card.area_km2,
            AttributeId::Gdp => card.gdp_billions,
            AttributeId::Landmarks => card.landmark_count as f64,
            AttributeId::Density => card.density,
            AttributeId::GdpPerCapita => card.gdp_per_capita,
        }
    }

    /// The value this attribute contributes to a card's total score.
    ///
    /// Density inverts (lower density wins); every other attribute scores
    /// its base value unchanged.
    #[must_use]
    pub fn score_value(self, card: &Card) -> f64 {
        let base = self.base_value(card);
        if self == AttributeId::Density {
            if base > 0.0 {
                1.0 / base
            } else {
                0.0
            }
        } else {
            base
        }
    }
}

impl std::fmt::Display for AttributeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
