//! Prompting reader with parse-and-retry semantics.
//!
//! Reads are line-based: each read consumes one whole input line, so
//! anything after the first token of a line is discarded. Blank lines are
//! skipped silently, the way whitespace-skipping console input behaves.
//!
//! Malformed tokens never abort: the reader prints one fixed retry
//! message per bad token and keeps asking. Only a genuine I/O failure, or
//! the stream ending while a numeric field still needs a value, escapes
//! as an error.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Fixed message printed once per malformed token.
pub const RETRY_PROMPT: &str = "Invalid value, try again: ";

/// Couples the input and output console endpoints.
///
/// ## Example
///
/// ```
/// use std::io::Cursor;
/// use super_trunfo::PromptReader;
///
/// let script = Cursor::new("abc\n42\n");
/// let mut transcript = Vec::new();
/// let mut reader = PromptReader::new(script, &mut transcript);
///
/// assert_eq!(reader.read_unsigned("Population: ").unwrap(), 42);
/// ```
pub struct PromptReader<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptReader<R, W> {
    /// Create a reader over the given endpoints.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Borrow the output endpoint, for interleaved presentation.
    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }

    /// Read one line of free text, truncated to `max_len` characters.
    ///
    /// Returns an empty string if the stream has ended.
    pub fn read_line(&mut self, prompt: &str, max_len: usize) -> Result<String> {
        self.prompt(prompt)?;
        let line = self.next_line()?.unwrap_or_default();
        Ok(truncate_chars(line.trim_end_matches(['\n', '\r']), max_len))
    }

    /// Read the first whitespace-delimited token of the next non-blank
    /// line, truncated to `max_len` characters.
    ///
    /// Returns `None` if the stream has ended.
    pub fn read_token(&mut self, prompt: &str, max_len: usize) -> Result<Option<String>> {
        self.prompt(prompt)?;
        Ok(self.next_token()?.map(|t| truncate_chars(&t, max_len)))
    }

    /// Read the first non-whitespace character, skipping blank lines.
    ///
    /// Defaults to `'A'` if the stream has ended. The rest of the line is
    /// discarded.
    pub fn read_char(&mut self, prompt: &str) -> Result<char> {
        self.prompt(prompt)?;
        let token = self.next_token()?;
        Ok(token
            .and_then(|t| t.chars().next())
            .unwrap_or('A'))
    }

    /// Read a non-negative integer, re-prompting until one parses.
    pub fn read_unsigned(&mut self, prompt: &str) -> Result<u64> {
        self.read_parsed(prompt)
    }

    /// Read a floating-point value, re-prompting until one parses.
    pub fn read_float(&mut self, prompt: &str) -> Result<f64> {
        self.read_parsed(prompt)
    }

    /// Read a signed integer, re-prompting until one parses.
    pub fn read_int(&mut self, prompt: &str) -> Result<i64> {
        self.read_parsed(prompt)
    }

    /// Parse-and-retry loop shared by the scalar readers.
    ///
    /// Exactly one retry message is printed per malformed token; blank
    /// lines produce no message.
    fn read_parsed<T: FromStr>(&mut self, prompt: &str) -> Result<T> {
        self.prompt(prompt)?;
        loop {
            match self.next_token()? {
                None => return Err(Error::UnexpectedEof),
                Some(token) => match token.parse() {
                    Ok(value) => return Ok(value),
                    Err(_) => self.prompt(RETRY_PROMPT)?,
                },
            }
        }
    }

    /// Print a prompt without a trailing newline and flush it.
    fn prompt(&mut self, prompt: &str) -> Result<()> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one raw line; `None` at end of stream.
    fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// First token of the next non-blank line; `None` at end of stream.
    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            match self.next_line()? {
                None => return Ok(None),
                Some(line) => {
                    if let Some(token) = line.split_whitespace().next() {
                        return Ok(Some(token.to_string()));
                    }
                }
            }
        }
    }
}

fn truncate_chars(text: &str, max_len: usize) -> String {
    text.chars().take(max_len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(script: &str) -> PromptReader<Cursor<String>, Vec<u8>> {
        PromptReader::new(Cursor::new(script.to_string()), Vec::new())
    }

    fn transcript(reader: &PromptReader<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8(reader.output.clone()).unwrap()
    }

    #[test]
    fn test_read_line_strips_newline() {
        let mut r = reader("Porto Alto\n");
        assert_eq!(r.read_line("City name: ", 49).unwrap(), "Porto Alto");
        assert_eq!(transcript(&r), "City name: ");
    }

    #[test]
    fn test_read_line_truncates() {
        let mut r = reader("abcdefgh\n");
        assert_eq!(r.read_line("? ", 4).unwrap(), "abcd");
    }

    #[test]
    fn test_read_line_empty_on_eof() {
        let mut r = reader("");
        assert_eq!(r.read_line("? ", 49).unwrap(), "");
    }

    #[test]
    fn test_read_token_caps_length() {
        let mut r = reader("A0123 trailing junk\n");
        assert_eq!(r.read_token("Code: ", 4).unwrap(), Some("A012".to_string()));
    }

    #[test]
    fn test_read_token_none_on_eof() {
        let mut r = reader("");
        assert_eq!(r.read_token("Code: ", 4).unwrap(), None);
    }

    #[test]
    fn test_read_char_skips_blank_lines() {
        let mut r = reader("\n\n  B junk\n");
        assert_eq!(r.read_char("Region: ").unwrap(), 'B');
    }

    #[test]
    fn test_read_char_defaults_on_eof() {
        let mut r = reader("");
        assert_eq!(r.read_char("Region: ").unwrap(), 'A');
    }

    #[test]
    fn test_read_unsigned_retries_per_bad_token() {
        // "abc" and "12xy" are each malformed; "7" parses.
        let mut r = reader("abc\n12xy\n7\n");
        assert_eq!(r.read_unsigned("Population: ").unwrap(), 7);
        assert_eq!(
            transcript(&r),
            format!("Population: {RETRY_PROMPT}{RETRY_PROMPT}")
        );
    }

    #[test]
    fn test_read_unsigned_rejects_negative() {
        let mut r = reader("-5\n5\n");
        assert_eq!(r.read_unsigned("Population: ").unwrap(), 5);
        assert_eq!(transcript(&r), format!("Population: {RETRY_PROMPT}"));
    }

    #[test]
    fn test_read_float_parses_decimals() {
        let mut r = reader("431.25\n");
        assert_eq!(r.read_float("Area: ").unwrap(), 431.25);
    }

    #[test]
    fn test_read_int_ignores_rest_of_line() {
        let mut r = reader("7 nonsense\n");
        assert_eq!(r.read_int("Landmarks: ").unwrap(), 7);
        assert_eq!(transcript(&r), "Landmarks: ");
    }

    #[test]
    fn test_blank_lines_produce_no_retry_message() {
        let mut r = reader("\n\n42\n");
        assert_eq!(r.read_int("Landmarks: ").unwrap(), 42);
        assert_eq!(transcript(&r), "Landmarks: ");
    }

    #[test]
    fn test_eof_during_numeric_read_is_an_error() {
        let mut r = reader("garbage\n");
        assert!(matches!(
            r.read_int("Landmarks: "),
            Err(Error::UnexpectedEof)
        ));
    }
}
