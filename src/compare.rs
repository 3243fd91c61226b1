//! Comparison engine: scores two cards over two chosen attributes.
//!
//! Each card's total is the sum of its score values for the two
//! attributes. The engine trusts its inputs: the selection menu
//! guarantees the attributes are distinct and in range.

use crate::cards::{AttributeId, Card};

/// Which of the two cards in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardSlot {
    /// The first card registered.
    First,
    /// The second card registered.
    Second,
}

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Single winner.
    Winner(CardSlot),
    /// Equal totals.
    Tie,
}

impl MatchOutcome {
    /// Check if a slot won.
    #[must_use]
    pub fn is_winner(&self, slot: CardSlot) -> bool {
        matches!(self, MatchOutcome::Winner(s) if *s == slot)
    }
}

/// Totals and outcome of comparing two cards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Comparison {
    /// Total score of the first card.
    pub score_first: f64,
    /// Total score of the second card.
    pub score_second: f64,
    /// Winner, or tie when the totals are equal.
    pub outcome: MatchOutcome,
}

/// Score both cards over the two chosen attributes and pick the winner.
///
/// Precondition (enforced by the selection menu, not here): the
/// attributes are distinct and both come from the six-entry catalog.
#[must_use]
pub fn compare(first: &Card, second: &Card, attr1: AttributeId, attr2: AttributeId) -> Comparison {
    let score_first = attr1.score_value(first) + attr2.score_value(first);
    let score_second = attr1.score_value(second) + attr2.score_value(second);

    let outcome = if score_first > score_second {
        MatchOutcome::Winner(CardSlot::First)
    } else if score_second > score_first {
        MatchOutcome::Winner(CardSlot::Second)
    } else {
        MatchOutcome::Tie
    };

    Comparison {
        score_first,
        score_second,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str, population: u64, area: f64) -> Card {
        let mut card = Card::new('A', "A01", name);
        card.population = population;
        card.area_km2 = area;
        card.compute_metrics();
        card
    }

    #[test]
    fn test_higher_total_wins() {
        let big = card("Grande", 2_000_000, 1000.0);
        let small = card("Pequena", 100_000, 1000.0);

        let result = compare(&big, &small, AttributeId::Population, AttributeId::Area);
        assert_eq!(result.outcome, MatchOutcome::Winner(CardSlot::First));
        assert!(result.score_first > result.score_second);
    }

    #[test]
    fn test_density_inversion_flips_winner() {
        // Same population, the sparser city wins on density.
        let dense = card("Apertada", 1_000_000, 100.0);
        let sparse = card("Espalhada", 1_000_000, 10_000.0);

        let result = compare(&dense, &sparse, AttributeId::Density, AttributeId::Population);
        assert_eq!(result.outcome, MatchOutcome::Winner(CardSlot::Second));
    }

    #[test]
    fn test_equal_density_ties() {
        // 1,000,000 / 500 and 500,000 / 250 are both 2000 hab/km².
        let a = card("Norte", 1_000_000, 500.0);
        let b = card("Sul", 500_000, 250.0);
        assert_eq!(a.density, 2000.0);
        assert_eq!(b.density, 2000.0);

        let result = compare(&a, &b, AttributeId::Density, AttributeId::Density);
        assert_eq!(result.outcome, MatchOutcome::Tie);
        assert_eq!(result.score_first, 2.0 / 2000.0);
    }

    #[test]
    fn test_symmetric_under_swap() {
        let a = card("Leste", 750_000, 300.0);
        let b = card("Oeste", 600_000, 900.0);

        let forward = compare(&a, &b, AttributeId::Population, AttributeId::Area);
        let reversed = compare(&b, &a, AttributeId::Population, AttributeId::Area);

        assert_eq!(forward.score_first, reversed.score_second);
        assert_eq!(forward.score_second, reversed.score_first);
        assert_eq!(
            forward.outcome.is_winner(CardSlot::First),
            reversed.outcome.is_winner(CardSlot::Second)
        );
    }

    #[test]
    fn test_is_winner() {
        let outcome = MatchOutcome::Winner(CardSlot::Second);
        assert!(outcome.is_winner(CardSlot::Second));
        assert!(!outcome.is_winner(CardSlot::First));
        assert!(!MatchOutcome::Tie.is_winner(CardSlot::First));
    }
}
