//! # APKBUILD Regex Patterns
//!
//! All regex patterns used to recognize the restricted shell subset.
//!
//! ## Regex Notes
//!
//! Rust's `regex` crate does not support backreferences or lookbehind, so
//! quote matching is done by [`QuotedValueBuilder`](super::builders::QuotedValueBuilder)
//! rather than by a pattern.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches a top-level assignment: `KEY=` at column 0.
    ///
    /// Captures:
    /// - Group 1: variable name
    ///
    /// Indented assignments (function bodies) do not match.
    pub static ref ASSIGNMENT_RE: Regex = Regex::new(
        r"^([A-Za-z_][A-Za-z0-9_]*)="
    ).unwrap();

    /// Matches a variable reference inside a value.
    ///
    /// Alternatives, tried left to right at each position:
    /// - `\$` escaped dollar (becomes `$`)
    /// - `${name/search/replace}`, `${name/search/}`, `${name/search}`
    ///   (groups 1-3)
    /// - `${name}` (group 4)
    /// - `$name` (group 5)
    ///
    /// Anything else (`${v%.*}`, `$(cmd)`, `$((1+1))`) does not match and
    /// stays literal.
    pub static ref VARIABLE_RE: Regex = Regex::new(
        r"\\\$|\$\{([A-Za-z_][A-Za-z0-9_]*)/([^/}]+)(?:/([^}]*))?\}|\$\{([A-Za-z_][A-Za-z0-9_]*)\}|\$([A-Za-z_][A-Za-z0-9_]*)"
    ).unwrap();

    /// Matches a function header: `name() {` or `function name() {`
    ///
    /// Captures:
    /// - Group 1: function name (hyphens and dots allowed, as in busybox ash)
    pub static ref FUNC_HEADER_RE: Regex = Regex::new(
        r"^(?:function\s+)?([A-Za-z_][A-Za-z0-9_.-]*)\s*\(\s*\)\s*\{"
    ).unwrap();

    /// Matches a tag comment such as `# Maintainer: Name <mail>`
    ///
    /// Captures:
    /// - Group 1: tag name
    /// - Group 2: tag value (untrimmed)
    pub static ref COMMENT_TAG_RE: Regex = Regex::new(
        r"^#\s*([A-Za-z][A-Za-z-]*):(.*)$"
    ).unwrap();

    /// Alpine version grammar:
    /// `<number>(.<number>)*[letter](_<suffix><number>)*(~<hash>)(-r<number>)`
    pub static ref PKGVER_RE: Regex = Regex::new(
        r"^[0-9]+(\.[0-9]+)*[a-z]?(_[a-z]+[0-9]*)*(~[0-9a-f]+)?(-r[0-9]+)?$"
    ).unwrap();
}
