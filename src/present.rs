//! Presentation: headers, the attribute menu, and the match report.
//!
//! Raw attribute values print at two decimal places; final scores at
//! four, so the density inversion stays visible in the totals.

use std::io::Write;

use crate::cards::{AttributeId, Card};
use crate::compare::{CardSlot, Comparison, MatchOutcome};
use crate::error::Result;

/// Text shown on the winner line when the totals are equal.
pub const TIE_TEXT: &str = "Tie!";

/// Print a `=== <title> ===` section header.
pub fn section_header<W: Write>(out: &mut W, title: &str) -> Result<()> {
    writeln!(out, "\n=== {title} ===")?;
    Ok(())
}

/// Print the numbered attribute menu, one line per catalog entry.
pub fn attribute_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\nAvailable attributes:")?;
    for attr in AttributeId::ALL {
        writeln!(out, "{} - {}", attr.menu_index(), attr.display_name())?;
    }
    Ok(())
}

/// Print the full match report: both cards' base values for the two
/// chosen attributes, the final scores, and the winner line.
pub fn comparison_report<W: Write>(
    out: &mut W,
    first: &Card,
    second: &Card,
    attr1: AttributeId,
    attr2: AttributeId,
    comparison: &Comparison,
) -> Result<()> {
    writeln!(out, "\nComparing {} and {}", first.name, second.name)?;
    for (ordinal, attr) in [(1, attr1), (2, attr2)] {
        writeln!(out, "Attribute {ordinal}: {}", attr.display_name())?;
        writeln!(out, "  {}: {:.2}", first.name, attr.base_value(first))?;
        writeln!(out, "  {}: {:.2}", second.name, attr.base_value(second))?;
    }

    writeln!(out, "\nFinal result:")?;
    writeln!(out, "{}: {:.4}", first.name, comparison.score_first)?;
    writeln!(out, "{}: {:.4}", second.name, comparison.score_second)?;

    let winner = match comparison.outcome {
        MatchOutcome::Winner(CardSlot::First) => first.name.as_str(),
        MatchOutcome::Winner(CardSlot::Second) => second.name.as_str(),
        MatchOutcome::Tie => TIE_TEXT,
    };
    writeln!(out, "Winner: {winner}")?;
    Ok(())
}
