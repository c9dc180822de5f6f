//! String utility functions

/// Split recipe text into lines, preserving trailing empty lines (unlike `.lines()`).
///
/// A single trailing `\n` is a line terminator, not an empty line:
/// - `"a\nb"` → `["a", "b"]`
/// - `"a\n"` → `["a"]`
/// - `"a\n\n"` → `["a", ""]`
///
/// Keeping trailing blank lines matters for quoted values that close on the
/// very last line, since every crossed line boundary is counted.
///
/// # Examples
///
/// ```
/// use apkmeta::utils::strings::split_lines_preserve_trailing;
///
/// assert_eq!(split_lines_preserve_trailing("a\nb"), vec!["a", "b"]);
/// assert_eq!(split_lines_preserve_trailing("a\n"), vec!["a"]);
/// assert_eq!(split_lines_preserve_trailing("a\n\n"), vec!["a", ""]);
/// assert_eq!(split_lines_preserve_trailing(""), Vec::<&str>::new());
/// ```
pub fn split_lines_preserve_trailing(s: &str) -> Vec<&str> {
    if s.is_empty() {
        return Vec::new();
    }

    let mut result: Vec<&str> = s.split('\n').collect();

    // split('\n') yields "" after the final terminator
    if s.ends_with('\n') && result.last() == Some(&"") {
        result.pop();
    }

    result
}

/// Split an attribute value into words, dropping empty ones.
///
/// This is how list-valued attributes (`depends`, `arch`, `makedepends`, ...)
/// are turned into sequences.
pub fn split_words(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}

/// Split into words and drop repeated ones, keeping the first occurrence.
pub fn split_words_unique(value: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for word in value.split_whitespace() {
        if !words.iter().any(|w| w == word) {
            words.push(word.to_string());
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string() {
        assert_eq!(split_lines_preserve_trailing(""), Vec::<&str>::new());
    }

    #[test]
    fn test_no_newline() {
        assert_eq!(split_lines_preserve_trailing("depends="), vec!["depends="]);
    }

    #[test]
    fn test_quote_on_last_line() {
        assert_eq!(
            split_lines_preserve_trailing("pkgname=\"test\n\""),
            vec!["pkgname=\"test", "\""]
        );
    }

    #[test]
    fn test_two_trailing_newlines() {
        assert_eq!(
            split_lines_preserve_trailing("pkgrel=0\n\n"),
            vec!["pkgrel=0", ""]
        );
    }

    #[test]
    fn test_only_newlines() {
        assert_eq!(split_lines_preserve_trailing("\n"), vec![""]);
        assert_eq!(split_lines_preserve_trailing("\n\n"), vec!["", ""]);
    }

    #[test]
    fn test_split_words_keeps_duplicates() {
        assert_eq!(
            split_words("  first\tsecond first "),
            vec!["first", "second", "first"]
        );
    }

    #[test]
    fn test_split_words_unique() {
        assert_eq!(
            split_words_unique("aarch64 armv7 aarch64 x86_64"),
            vec!["aarch64", "armv7", "x86_64"]
        );
    }
}
