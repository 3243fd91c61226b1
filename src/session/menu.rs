//! Attribute selection loop.
//!
//! Rejections reprint the full prompt on the next attempt, while
//! malformed tokens are handled inside the reader's own retry loop.

use std::io::{BufRead, Write};

use crate::cards::AttributeId;
use crate::error::Result;
use crate::input::PromptReader;

/// Message for a choice outside 1-6.
const OUT_OF_RANGE: &str = "Invalid attribute. Choose between 1 and 6.";
/// Message for re-picking the already chosen attribute.
const ALREADY_CHOSEN: &str = "Attribute already chosen. Select another.";

/// Read an attribute choice (1-6), optionally excluding one already
/// chosen attribute, re-prompting until the choice is acceptable.
pub fn select_attribute<R: BufRead, W: Write>(
    console: &mut PromptReader<R, W>,
    prompt: &str,
    exclude: Option<AttributeId>,
) -> Result<AttributeId> {
    loop {
        let choice = console.read_int(prompt)?;
        match AttributeId::from_menu_index(choice) {
            None => writeln!(console.writer(), "{OUT_OF_RANGE}")?,
            Some(attr) if Some(attr) == exclude => {
                writeln!(console.writer(), "{ALREADY_CHOSEN}")?;
            }
            Some(attr) => return Ok(attr),
        }
    }
}
