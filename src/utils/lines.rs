//! Recipe loading
//!
//! This is the only place the crate touches the filesystem. Everything
//! downstream works on the in-memory line buffer returned here.

use std::path::{Path, PathBuf};

use crate::error::{ApkbuildError, Result};
use crate::utils::strings::split_lines_preserve_trailing;

/// A recipe loaded from disk as an ordered sequence of lines.
#[derive(Debug, Clone)]
pub struct RecipeFile {
    /// Canonical path when it could be resolved, otherwise the path as given
    pub path: PathBuf,
    /// Lines without their `\n` terminator
    pub lines: Vec<String>,
}

impl RecipeFile {
    /// Path as a display string, used in error messages.
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

/// Split in-memory recipe text into lines.
pub fn lines_from_str(content: &str) -> Vec<String> {
    split_lines_preserve_trailing(content)
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Read a recipe from disk.
///
/// Fails when the file cannot be read or uses `\r\n` line endings.
pub fn read_lines(path: &Path) -> Result<RecipeFile> {
    let content = std::fs::read_to_string(path).map_err(|source| ApkbuildError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if content.contains("\r\n") {
        return Err(ApkbuildError::LineEndings {
            path: path.to_path_buf(),
        });
    }

    let path = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    tracing::debug!(path = %path.display(), "loaded recipe");

    Ok(RecipeFile {
        path,
        lines: lines_from_str(&content),
    })
}
