//! Card registration: prompts for one card's raw fields, then computes
//! its derived metrics.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::cards::Card;
use crate::error::Result;
use crate::input::PromptReader;
use crate::present;

/// Code used when the card-code read hits end of stream.
const DEFAULT_CODE: &str = "A01";

/// Read one complete card.
///
/// Prints a section header for `title`, then prompts for the raw fields
/// in fixed order: region letter, code, name, population, area, GDP,
/// landmark count. Derived metrics are computed before the card is
/// returned, so callers always see a comparison-ready card.
pub fn read_card<R: BufRead, W: Write>(
    console: &mut PromptReader<R, W>,
    title: &str,
) -> Result<Card> {
    present::section_header(console.writer(), title)?;

    let region_letter = console.read_char("Region (A-H): ")?;
    let code = console
        .read_token("Card code (e.g. A01): ", 4)?
        .unwrap_or_else(|| DEFAULT_CODE.to_string());
    let name = console.read_line("City name: ", 49)?;

    let mut card = Card::new(region_letter, code, name);
    card.population = console.read_unsigned("Population: ")?;
    card.area_km2 = console.read_float("Area (km2): ")?;
    card.gdp_billions = console.read_float("GDP (billions): ")?;
    card.landmark_count = console.read_int("Number of landmarks: ")?;
    card.compute_metrics();

    debug!(name = %card.name, code = %card.code, density = card.density, "card registered");
    Ok(card)
}
