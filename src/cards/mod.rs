//! Card system: the city card data model and the attribute catalog.
//!
//! ## Key Types
//!
//! - `Card`: one player's entered city data plus derived metrics
//! - `AttributeId`: closed six-variant catalog of comparable attributes
//!
//! Derived metrics (`density`, `gdp_per_capita`) are only meaningful
//! after `Card::compute_metrics` has run; the session builder guarantees
//! that ordering before a card reaches the comparison engine.

pub mod attributes;
pub mod card;

pub use attributes::AttributeId;
pub use card::Card;
