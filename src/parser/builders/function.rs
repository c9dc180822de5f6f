//! # FunctionBuilder
//!
//! Locates a shell function and collects its body lines.
//!
//! ## Example Input
//!
//! ```bash
//! nonfree_firmware() {
//!     pkgdesc="firmware description"
//!     depends="$depends firmware-xyz"
//!     mkdir "$subpkgdir"
//! }
//! ```
//!
//! ## Boundaries
//!
//! The header is `name() {` (optionally `function name() {`) at column 0.
//! The body ends at the first following line that starts with `}`. Body
//! lines are stored with surrounding whitespace stripped so the regular
//! top-level attribute parser can read assignments inside them.

use super::super::patterns::FUNC_HEADER_RE;
use crate::error::{ApkbuildError, Result};

/// Builder for accumulating a function body.
///
/// # Fields
///
/// - `name`: Function name from the header
/// - `start_line`: Index of the header line (0-based)
/// - `lines`: Body lines, whitespace-stripped, without header and `}`
#[derive(Debug)]
pub struct FunctionBuilder {
    pub name: String,
    pub start_line: usize,
    pub lines: Vec<String>,
    complete: bool,
}

impl FunctionBuilder {
    /// Check if `line` is the header of function `name`.
    pub fn is_header(line: &str, name: &str) -> bool {
        FUNC_HEADER_RE
            .captures(line)
            .is_some_and(|caps| &caps[1] == name)
    }

    /// Check if `line` closes a top-level function body.
    pub fn is_closing(line: &str) -> bool {
        line.starts_with('}')
    }

    /// Create a new builder for a function whose header is at `start_line`.
    pub fn new(name: String, start_line: usize) -> Self {
        Self {
            name,
            start_line,
            lines: Vec::new(),
            complete: false,
        }
    }

    /// Add the next line after the header.
    ///
    /// Returns `true` once the closing `}` was reached; that line is not
    /// part of the body.
    pub fn add_line(&mut self, line: &str) -> bool {
        if self.complete {
            return true;
        }
        if Self::is_closing(line) {
            self.complete = true;
        } else {
            self.lines.push(line.trim().to_string());
        }
        self.complete
    }

    /// Index of the first body line in the original buffer.
    pub fn body_start(&self) -> usize {
        self.start_line + 1
    }

    /// Find function `name` in `lines` and collect its body.
    ///
    /// Returns `Ok(None)` if no header matches. A header without a closing
    /// `}` is a syntax error.
    pub fn locate<S: AsRef<str>>(lines: &[S], name: &str, path: &str) -> Result<Option<Self>> {
        let Some(start) = lines
            .iter()
            .position(|line| Self::is_header(line.as_ref(), name))
        else {
            return Ok(None);
        };

        let mut builder = Self::new(name.to_string(), start);
        for line in &lines[start + 1..] {
            if builder.add_line(line.as_ref()) {
                return Ok(Some(builder));
            }
        }

        Err(ApkbuildError::syntax(
            format!(
                "Could not find end of subpackage function '{}', no line starts with '}}'",
                name
            ),
            path,
            start,
        ))
    }
}
