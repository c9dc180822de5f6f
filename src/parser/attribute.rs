//! # Attribute Parsing
//!
//! Finds the next top-level `KEY=VALUE` assignment in a line buffer.
//!
//! ## Value Forms
//!
//! | Form | Example | Ends at |
//! |------|---------|---------|
//! | Empty | `depends=` | end of line |
//! | Unquoted | `pkgrel=3 # bump` | first unescaped whitespace |
//! | Single-quoted | `arch='all !armhf'` | next `'`, possibly lines later |
//! | Double-quoted | `depends="\n\tfoo\n"` | next unescaped `"`, possibly lines later |
//!
//! ## Line Accounting
//!
//! [`Attribute::extra_lines`] is the number of line boundaries crossed
//! inside the quotes. Callers continue scanning at [`Attribute::next_index`].

use super::builders::QuotedValueBuilder;
use super::patterns::ASSIGNMENT_RE;
use crate::error::{ApkbuildError, Result};

/// A parsed top-level assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    /// Fully assembled value, before variable substitution
    pub value: String,
    /// Index of the line holding `KEY=`
    pub line: usize,
    /// Lines consumed beyond `line`
    pub extra_lines: usize,
}

impl Attribute {
    /// First line index after this assignment.
    pub fn next_index(&self) -> usize {
        self.line + 1 + self.extra_lines
    }
}

/// Parse the next top-level attribute at or after `start`.
///
/// Lines that are not a column-0 assignment (comments, function headers,
/// indented statements) are skipped. Returns `Ok(None)` when no assignment
/// remains before the end of the buffer.
///
/// # Errors
///
/// [`ApkbuildError::Syntax`] when a quoted value is never closed. The error
/// carries `path` and the line of the assignment.
///
/// # Example
///
/// ```
/// use apkmeta::parser::parse_next_attribute;
///
/// let lines = ["# comment", "depends=\"", "\tfirst", "\tsecond\"", "pkgrel=0"];
/// let attr = parse_next_attribute(&lines, 0, "APKBUILD").unwrap().unwrap();
/// assert_eq!(attr.key, "depends");
/// assert_eq!(attr.value, "first second");
/// assert_eq!((attr.line, attr.extra_lines), (1, 2));
/// assert_eq!(attr.next_index(), 4);
/// ```
pub fn parse_next_attribute<S: AsRef<str>>(
    lines: &[S],
    start: usize,
    path: &str,
) -> Result<Option<Attribute>> {
    for index in start..lines.len() {
        let line = lines[index].as_ref();
        let Some(caps) = ASSIGNMENT_RE.captures(line) else {
            continue;
        };

        let key = caps[1].to_string();
        let rest = &line[caps[0].len()..];
        return parse_value(lines, index, key, rest, path).map(Some);
    }

    Ok(None)
}

fn parse_value<S: AsRef<str>>(
    lines: &[S],
    index: usize,
    key: String,
    rest: &str,
    path: &str,
) -> Result<Attribute> {
    let Some(quote) = QuotedValueBuilder::opening_quote(rest) else {
        return Ok(Attribute {
            key,
            value: parse_unquoted(rest),
            line: index,
            extra_lines: 0,
        });
    };

    let mut builder = QuotedValueBuilder::new(quote, index);
    let mut current = index;
    let mut text = &rest[quote.len_utf8()..];

    loop {
        if builder.add_line(text) {
            let extra_lines = builder.extra_lines();
            return Ok(Attribute {
                key,
                value: builder.build(),
                line: index,
                extra_lines,
            });
        }

        current += 1;
        match lines.get(current) {
            Some(next) => text = next.as_ref(),
            None => {
                return Err(ApkbuildError::syntax(
                    format!(
                        "Can't find closing quote sign ({}) for attribute '{}'",
                        quote, key
                    ),
                    path,
                    index,
                ))
            }
        }
    }
}

/// Value of an unquoted assignment: up to the first unescaped whitespace.
/// Whatever follows (typically ` # comment`) is discarded.
fn parse_unquoted(rest: &str) -> String {
    let mut value = String::new();
    let mut chars = rest.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                // keep `\$` for substitution to unescape
                Some('$') => value.push_str("\\$"),
                Some(next) => value.push(next),
                None => break,
            },
            c if c.is_whitespace() => break,
            c => value.push(c),
        }
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parse the first attribute of a test block as `(key, value, extra)`.
    fn func(block: &str) -> Result<(Option<String>, Option<String>, usize)> {
        let lines: Vec<&str> = block.split('\n').collect();
        let parsed = parse_next_attribute(&lines, 0, "(testcase)")?;
        Ok(match parsed {
            Some(attr) => (Some(attr.key), Some(attr.value), attr.extra_lines),
            None => (None, None, 0),
        })
    }

    fn found(key: &str, value: &str, extra: usize) -> (Option<String>, Option<String>, usize) {
        (Some(key.to_string()), Some(value.to_string()), extra)
    }

    #[test]
    fn test_no_attribute() {
        assert_eq!(func("no variable here").unwrap(), (None, None, 0));
        assert_eq!(func("").unwrap(), (None, None, 0));
    }

    #[test]
    fn test_indented_is_not_top_level() {
        assert_eq!(func("\tno_top_level_var=1").unwrap(), (None, None, 0));
    }

    #[test]
    fn test_quote_styles() {
        assert_eq!(func("pkgname=\"test\"").unwrap(), found("pkgname", "test", 0));
        assert_eq!(func("pkgname='test'").unwrap(), found("pkgname", "test", 0));
        assert_eq!(func("pkgname=test").unwrap(), found("pkgname", "test", 0));
    }

    #[test]
    fn test_closing_quote_on_later_line() {
        assert_eq!(func("pkgname=\"test\n\"").unwrap(), found("pkgname", "test", 1));
        assert_eq!(func("pkgname=\"\ntest\n\"").unwrap(), found("pkgname", "test", 2));
    }

    #[test]
    fn test_trailing_comment() {
        assert_eq!(
            func("pkgname=\"test\" # random comment\npkgrel=3").unwrap(),
            found("pkgname", "test", 0)
        );
        assert_eq!(
            func("pkgver=2.37 # random comment\npkgrel=3").unwrap(),
            found("pkgver", "2.37", 0)
        );
    }

    #[test]
    fn test_multiline_values() {
        assert_eq!(
            func("depends='\nfirst\nsecond\nthird\n'#").unwrap(),
            found("depends", "first second third", 4)
        );
        assert_eq!(
            func("depends=\"\nfirst\n\tsecond third\"").unwrap(),
            found("depends", "first second third", 2)
        );
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(func("depends=").unwrap(), found("depends", "", 0));
        assert_eq!(func("depends=\"\"").unwrap(), found("depends", "", 0));
    }

    #[test]
    fn test_missing_closing_quote() {
        let err = func("depends=\"\nmissing\nend\nquote\nsign").unwrap_err();
        assert!(err.to_string().starts_with("Can't find closing"));
        match err {
            ApkbuildError::Syntax { path, line, .. } => {
                assert_eq!(path, "(testcase)");
                assert_eq!(line, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = func("depends=\"").unwrap_err();
        assert!(err.to_string().starts_with("Can't find closing"));
    }

    #[test]
    fn test_skips_to_next_assignment() {
        let lines = ["# Maintainer: x", "", "package() {", "\tpkgdesc=\"no\"", "}", "url=https://example.org"];
        let attr = parse_next_attribute(&lines, 0, "APKBUILD").unwrap().unwrap();
        assert_eq!(attr.key, "url");
        assert_eq!(attr.line, 5);
        assert_eq!(attr.next_index(), 6);
        assert!(parse_next_attribute(&lines, 6, "APKBUILD").unwrap().is_none());
    }

    #[test]
    fn test_unquoted_escaped_space() {
        assert_eq!(func(r"pkgdesc=two\ words rest").unwrap(), found("pkgdesc", "two words", 0));
    }

    #[test]
    fn test_tabs_collapse_in_quoted_value() {
        assert_eq!(func("pkgdesc=\"a\tb\"").unwrap(), found("pkgdesc", "a b", 0));
        assert_eq!(func("pkgdesc='a\t\tb'").unwrap(), found("pkgdesc", "a  b", 0));
    }

    #[test]
    fn test_hash_inside_quotes_is_kept() {
        assert_eq!(
            func("url=\"https://example.org/#anchor\" # c").unwrap(),
            found("url", "https://example.org/#anchor", 0)
        );
    }

    #[test]
    fn test_extra_lines_match_newlines() {
        for n in 0..5 {
            let block = format!("depends=\"a{}\"", "\nb".repeat(n));
            let (_, _, extra) = func(&block).unwrap();
            assert_eq!(extra, n);
        }
    }
}
