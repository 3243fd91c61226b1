//! Crate error type.
//!
//! Malformed user input is never an error: the input reader re-prompts
//! locally. Only two conditions escape: a real I/O failure on either
//! endpoint, and the input stream ending while a read still needs a value.

use thiserror::Error;

/// Errors that can end an interactive session.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a console endpoint failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream ended while a value was still required.
    #[error("input ended before a valid value was supplied")]
    UnexpectedEof,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
