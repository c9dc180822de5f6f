//! # CommentBlockBuilder
//!
//! Collects the leading comment block of a recipe and reads tag lines from it.
//!
//! ## Boundary Rule
//!
//! The block starts at the first line and continues over comment lines and
//! blank lines. The first other line (usually `pkgname=`) ends it.
//!
//! ## Example
//!
//! ```bash
//! # Reference: <https://postmarketos.org/devicepkg>
//! # Maintainer: Oliver Smith <ollieparanoid@postmarketos.org>
//! # Co-Maintainer: Hello World <hello@world>
//!
//! pkgname=device-example
//! ```
//!
//! `tags("Maintainer")` yields the second line's value, `tags("Co-Maintainer")`
//! the third one's.

use super::super::patterns::COMMENT_TAG_RE;

/// Builder for the leading comment block.
#[derive(Debug, Default)]
pub struct CommentBlockBuilder {
    /// Accumulated comment lines (including the `#` prefix)
    pub lines: Vec<String>,
}

impl CommentBlockBuilder {
    /// Check if a line is a comment (starts with `#` after trimming).
    pub fn is_comment_line(line: &str) -> bool {
        line.trim_start().starts_with('#')
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the leading comment block of `lines`.
    pub fn leading<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut builder = Self::new();
        for line in lines {
            if !builder.add_line(line.as_ref()) {
                break;
            }
        }
        builder
    }

    /// Add a line; returns `false` if it ends the block (and was not added).
    pub fn add_line(&mut self, line: &str) -> bool {
        if Self::is_comment_line(line) {
            self.lines.push(line.trim_start().to_string());
            true
        } else {
            line.trim().is_empty()
        }
    }

    /// Values of all `# <tag>: value` lines, in order, trimmed.
    ///
    /// Tag names are matched exactly (`Maintainer` does not match
    /// `Co-Maintainer`).
    pub fn tags(&self, tag: &str) -> Vec<String> {
        self.lines
            .iter()
            .filter_map(|line| COMMENT_TAG_RE.captures(line))
            .filter(|caps| &caps[1] == tag)
            .map(|caps| caps[2].trim().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_comment_line() {
        assert!(CommentBlockBuilder::is_comment_line("# comment"));
        assert!(CommentBlockBuilder::is_comment_line("  # indented comment"));
        assert!(CommentBlockBuilder::is_comment_line("#"));
        assert!(!CommentBlockBuilder::is_comment_line("pkgname=x # inline"));
        assert!(!CommentBlockBuilder::is_comment_line(""));
    }

    #[test]
    fn test_leading_stops_at_code() {
        let lines = [
            "# Maintainer: A <a@a>",
            "",
            "# Archived: gone",
            "pkgname=x",
            "# Maintainer: Late <late@x>",
        ];
        let block = CommentBlockBuilder::leading(&lines);
        assert_eq!(block.lines.len(), 2);
        assert_eq!(block.tags("Maintainer"), vec!["A <a@a>"]);
        assert_eq!(block.tags("Archived"), vec!["gone"]);
    }

    #[test]
    fn test_tags_exact_name() {
        let lines = ["# Co-Maintainer: B <b@b>", "# Maintainer: A <a@a>"];
        let block = CommentBlockBuilder::leading(&lines);
        assert_eq!(block.tags("Maintainer"), vec!["A <a@a>"]);
        assert_eq!(block.tags("Co-Maintainer"), vec!["B <b@b>"]);
        assert!(block.tags("Contributor").is_empty());
    }

    #[test]
    fn test_empty_file() {
        let lines: [&str; 0] = [];
        let block = CommentBlockBuilder::leading(&lines);
        assert_eq!(block.lines.len(), 0);
        assert!(block.tags("Maintainer").is_empty());
    }
}
