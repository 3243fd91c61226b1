//! # super-trunfo
//!
//! A two-card "Super Trunfo" comparison game for the console.
//! The player registers two fictional city cards, picks two distinct
//! attributes, and the game scores both cards and declares a winner.
//!
//! ## Design Principles
//!
//! 1. **Closed Attribute Set**: The six comparable attributes are a fixed
//!    enum with per-attribute dispatch (name, accessor, scoring transform),
//!    not open polymorphism.
//!
//! 2. **Injectable I/O**: Every interactive piece is generic over
//!    `BufRead`/`Write` so tests drive the full flow with scripted input
//!    and capture the transcript.
//!
//! 3. **Recover, Never Abort**: Malformed input re-prompts with a fixed
//!    message; the only hard errors are genuine I/O failures.
//!
//! ## Modules
//!
//! - `cards`: `Card` data model, derived metrics, attribute catalog
//! - `input`: prompting reader with parse-and-retry semantics
//! - `compare`: scoring and winner determination for two cards
//! - `present`: menu, value report, and result formatting
//! - `session`: card builder, attribute selection, top-level game flow

pub mod cards;
pub mod compare;
pub mod error;
pub mod input;
pub mod present;
pub mod session;

// Re-export commonly used types
pub use crate::cards::{AttributeId, Card};
pub use crate::compare::{compare, CardSlot, Comparison, MatchOutcome};
pub use crate::error::{Error, Result};
pub use crate::input::PromptReader;
pub use crate::session::{read_card, run, select_attribute};
