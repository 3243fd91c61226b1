//! Interactive input: prompting, parsing, and retry.
//!
//! ## Key Types
//!
//! - `PromptReader`: couples an input (`BufRead`) and an output (`Write`)
//!   endpoint so prompts and reads stay in lockstep
//!
//! The endpoints are generic so tests inject a `Cursor` script and a
//! `Vec<u8>` transcript instead of the real console.

pub mod reader;

pub use reader::{PromptReader, RETRY_PROMPT};
