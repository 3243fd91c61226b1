//! Game session: card registration, attribute selection, and the
//! top-level match flow.
//!
//! The whole game is one straight-line sequence with two bounded retry
//! sub-loops (token parsing inside the reader, attribute selection in
//! the menu). `run` is generic over the console endpoints so the entire
//! interaction is scriptable in tests.

pub mod builder;
pub mod menu;

use std::io::{BufRead, Write};

use tracing::info;

use crate::compare::compare;
use crate::error::Result;
use crate::input::PromptReader;
use crate::present;

pub use builder::read_card;
pub use menu::select_attribute;

/// Prompt for the first attribute choice.
const FIRST_ATTR_PROMPT: &str = "Choose the first attribute for comparison: ";
/// Prompt for the second attribute choice.
const SECOND_ATTR_PROMPT: &str = "Choose the second attribute (different from the first): ";

/// Drive one full match: register two cards, pick two distinct
/// attributes, score both cards, and print the report.
pub fn run<R: BufRead, W: Write>(input: R, output: W) -> Result<()> {
    let mut console = PromptReader::new(input, output);

    let first = read_card(&mut console, "Card 1 registration")?;
    let second = read_card(&mut console, "Card 2 registration")?;

    present::attribute_menu(console.writer())?;
    let attr1 = select_attribute(&mut console, FIRST_ATTR_PROMPT, None)?;
    let attr2 = select_attribute(&mut console, SECOND_ATTR_PROMPT, Some(attr1))?;

    let comparison = compare(&first, &second, attr1, attr2);
    info!(
        first = %first.name,
        second = %second.name,
        attr1 = %attr1,
        attr2 = %attr2,
        score_first = comparison.score_first,
        score_second = comparison.score_second,
        "match scored"
    );

    present::comparison_report(console.writer(), &first, &second, attr1, attr2, &comparison)?;
    Ok(())
}
