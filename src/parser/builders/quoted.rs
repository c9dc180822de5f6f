//! # QuotedValueBuilder
//!
//! Accumulates the value of a single- or double-quoted assignment, which may
//! span several physical lines.
//!
//! ## Example
//!
//! ```bash
//! depends="
//!     first
//!     second third
//!     "
//! ```
//!
//! Lines are fed one by one until the closing quote shows up. The result is
//! `first second third`, and three extra lines were consumed.
//!
//! ## Quoting Rules
//!
//! - Single quotes: no escapes, the next `'` closes the value
//! - Double quotes: `\"` and `\\` are unescaped, a trailing `\` joins the
//!   next line, other backslashes are kept verbatim
//! - Text after the closing quote (usually a `# comment`) is discarded
//!
//! ## Whitespace Normalization
//!
//! Tabs always become spaces. Values spanning several lines are further
//! normalized: each physical line is trimmed, blank lines are dropped and
//! the remaining pieces are joined with one space. Spaces between words on
//! one line stay as written.

/// Builder for quoted attribute values.
#[derive(Debug)]
pub struct QuotedValueBuilder {
    /// Opening quote character (`'` or `"`)
    pub quote: char,
    /// Line index of the assignment (0-based)
    pub start_line: usize,
    /// Text of each physical line inside the quotes
    segments: Vec<String>,
    complete: bool,
}

impl QuotedValueBuilder {
    /// Check whether a value starts with a quote character.
    pub fn opening_quote(value: &str) -> Option<char> {
        match value.chars().next() {
            Some(c @ ('\'' | '"')) => Some(c),
            _ => None,
        }
    }

    /// Create a builder for a value opened with `quote` on line `start_line`.
    pub fn new(quote: char, start_line: usize) -> Self {
        Self {
            quote,
            start_line,
            segments: Vec::new(),
            complete: false,
        }
    }

    /// Feed the next physical line of the quoted span.
    ///
    /// For the first line pass the text right after the opening quote.
    /// Returns `true` once the closing quote has been seen; further lines
    /// are ignored after that.
    pub fn add_line(&mut self, line: &str) -> bool {
        if self.complete {
            return true;
        }

        let mut segment = String::new();
        let mut chars = line.chars();

        while let Some(c) = chars.next() {
            if c == self.quote {
                self.complete = true;
                break;
            }
            if c == '\\' && self.quote == '"' {
                match chars.next() {
                    Some(next @ ('"' | '\\')) => segment.push(next),
                    Some(next) => {
                        segment.push('\\');
                        segment.push(next);
                    }
                    // Backslash-newline: line continuation
                    None => {}
                }
                continue;
            }
            segment.push(c);
        }

        self.segments.push(segment);
        self.complete
    }

    /// Number of line boundaries crossed inside the quotes.
    pub fn extra_lines(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }

    /// Assemble the final value.
    pub fn build(self) -> String {
        if self.segments.len() <= 1 {
            return self
                .segments
                .first()
                .map(|s| s.replace('\t', " "))
                .unwrap_or_default();
        }

        self.segments
            .iter()
            .map(|s| s.replace('\t', " "))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
