//! Error types for recipe parsing

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while reading or parsing an APKBUILD.
///
/// Only conditions that make the recipe's meaning ambiguous are errors.
/// Missing sub-package functions, unresolved variables and absent comment
/// tags degrade into sentinel values instead.
#[derive(Error, Debug)]
pub enum ApkbuildError {
    /// Unterminated quoted value or function body
    #[error("{message} in: {path}:{line}")]
    Syntax {
        message: String,
        path: String,
        /// 1-based line of the offending assignment or function header
        line: usize,
    },

    /// `pkgname`/`pkgver` failed a requested check
    #[error("Invalid {field} '{value}' in APKBUILD: {path} ({reason})")]
    Validation {
        field: &'static str,
        value: String,
        reason: String,
        path: String,
    },

    /// Recipe uses `\r\n` line endings
    #[error("Wrong line endings in APKBUILD: {}", path.display())]
    LineEndings { path: PathBuf },

    /// Failed to read the recipe from disk
    #[error("Failed to read APKBUILD '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApkbuildError {
    pub(crate) fn syntax(message: impl Into<String>, path: &str, index: usize) -> Self {
        ApkbuildError::Syntax {
            message: message.into(),
            path: path.to_string(),
            line: index + 1,
        }
    }

    /// Shift a syntax error's line by `offset`, for errors raised while
    /// parsing a slice that starts `offset` lines into the file.
    pub(crate) fn with_line_offset(self, offset: usize) -> Self {
        match self {
            ApkbuildError::Syntax {
                message,
                path,
                line,
            } => ApkbuildError::Syntax {
                message,
                path,
                line: line + offset,
            },
            other => other,
        }
    }

    /// The recipe path this error refers to.
    pub fn path(&self) -> String {
        match self {
            ApkbuildError::Syntax { path, .. } | ApkbuildError::Validation { path, .. } => {
                path.clone()
            }
            ApkbuildError::LineEndings { path } | ApkbuildError::Io { path, .. } => {
                path.display().to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApkbuildError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_display_starts_with_message() {
        let err = ApkbuildError::syntax("Can't find closing quote sign (\")", "APKBUILD", 4);
        let text = err.to_string();
        assert!(text.starts_with("Can't find closing"));
        assert!(text.ends_with("APKBUILD:5"));
    }

    #[test]
    fn test_line_offset_only_touches_syntax() {
        let err = ApkbuildError::syntax("x", "APKBUILD", 0).with_line_offset(10);
        assert!(err.to_string().ends_with("APKBUILD:11"));

        let err = ApkbuildError::LineEndings {
            path: PathBuf::from("APKBUILD"),
        }
        .with_line_offset(10);
        assert_eq!(err.path(), "APKBUILD");
    }

    #[test]
    fn test_validation_names_field_and_value() {
        let err = ApkbuildError::Validation {
            field: "pkgver",
            value: "1.0-beta".into(),
            reason: "not an Alpine version".into(),
            path: "main/foo/APKBUILD".into(),
        };
        let text = err.to_string();
        assert!(text.contains("pkgver"));
        assert!(text.contains("1.0-beta"));
        assert_eq!(err.path(), "main/foo/APKBUILD");
    }
}
