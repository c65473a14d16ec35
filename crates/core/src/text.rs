//! Line and token helpers shared by the text readers

// crate modules
use crate::error::{Error, Result};

// external crates
use rayon::prelude::*;

/// Walks through file content line-by-line while tracking line numbers
///
/// Readers take header lines one at a time, then hand the rest of the file to
/// a bulk tokeniser with [LineCursor::remainder()].
///
/// ```rust
/// # use gridio_core::text::LineCursor;
/// let mut cursor = LineCursor::new("title\r\n 1 2 3\n4 5\n6");
/// assert_eq!(cursor.next_line(), Some("title"));
/// assert_eq!(cursor.next_line(), Some(" 1 2 3"));
/// assert_eq!(cursor.line_number(), 2);
/// assert_eq!(cursor.remainder(), "4 5\n6");
/// ```
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    remaining: &'a str,
    line_number: usize,
}

impl<'a> LineCursor<'a> {
    /// Start at the first line of `text`
    pub fn new(text: &'a str) -> Self {
        Self {
            remaining: text,
            line_number: 0,
        }
    }

    /// Advances to the next line, without the line ending
    ///
    /// Returns `None` once the text is exhausted.
    pub fn next_line(&mut self) -> Option<&'a str> {
        if self.remaining.is_empty() {
            return None;
        }

        let (line, rest) = match self.remaining.find('\n') {
            Some(end) => (&self.remaining[..end], &self.remaining[end + 1..]),
            None => (self.remaining, ""),
        };

        self.remaining = rest;
        self.line_number += 1;
        Some(line.strip_suffix('\r').unwrap_or(line))
    }

    /// Advances past any blank lines and returns the next line with content
    pub fn next_non_blank(&mut self) -> Option<&'a str> {
        loop {
            let line = self.next_line()?;
            if !line.trim().is_empty() {
                return Some(line);
            }
        }
    }

    /// One-based number of the last line returned
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Everything after the last line returned
    pub fn remainder(&self) -> &'a str {
        self.remaining
    }
}

/// Parse a single floating point value
///
/// Fortran `D` exponents are accepted alongside the usual `E`.
///
/// ```rust
/// # use gridio_core::text::parse_value;
/// assert_eq!(parse_value("0.78406017013E+04").unwrap(), 7840.6017013);
/// assert_eq!(parse_value("-.5D-01").unwrap(), -0.05);
/// assert!(parse_value("1.0.0").is_err());
/// ```
pub fn parse_value(token: &str) -> Result<f64> {
    match token.parse::<f64>() {
        Ok(value) => Ok(value),
        Err(_) => token
            .replace(['D', 'd'], "E")
            .parse::<f64>()
            .map_err(|_| Error::InvalidNumber(token.to_string())),
    }
}

/// Parse a list of tokens into values, in parallel
///
/// Order is preserved. If any token fails to parse, one of the failures is
/// reported.
///
/// ```rust
/// # use gridio_core::text::parse_values;
/// let tokens = "1.0 2.5E-01 -3".split_whitespace().collect::<Vec<&str>>();
/// assert_eq!(parse_values(&tokens).unwrap(), vec![1.0, 0.25, -3.0]);
/// ```
pub fn parse_values(tokens: &[&str]) -> Result<Vec<f64>> {
    tokens.par_iter().map(|token| parse_value(token)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_blank_lines() {
        let mut cursor = LineCursor::new("a\n\n   \nb\n");
        assert_eq!(cursor.next_line(), Some("a"));
        assert_eq!(cursor.next_non_blank(), Some("b"));
        assert_eq!(cursor.line_number(), 4);
        assert_eq!(cursor.next_line(), None);
        assert_eq!(cursor.next_non_blank(), None);
    }

    #[test]
    fn invalid_values_reported() {
        let tokens = ["1.0", "2.0", "x", "4.0"];
        assert_eq!(
            parse_values(&tokens),
            Err(Error::InvalidNumber("x".to_string()))
        );
    }
}
