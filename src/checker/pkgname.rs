//! pkgname identity check

use std::path::Path;

use super::{CheckIssue, CheckResult, Checker};
use crate::error::{ApkbuildError, Result};
use crate::model::Document;

/// Checks that `pkgname` matches the directory holding the recipe.
pub struct PkgnameChecker;

/// Name of the directory containing the recipe (`main/foo/APKBUILD` → `foo`).
pub fn expected_pkgname(path: &str) -> Option<&str> {
    Path::new(path)
        .parent()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
}

impl PkgnameChecker {
    pub fn verify(&self, doc: &Document, path: &str) -> Result<()> {
        let reason = match expected_pkgname(path) {
            Some(expected) if expected == doc.pkgname => return Ok(()),
            Some(expected) => format!("expected '{}' from the recipe's directory", expected),
            None => "recipe path has no parent directory".to_string(),
        };
        Err(ApkbuildError::Validation {
            field: "pkgname",
            value: doc.pkgname.clone(),
            reason,
            path: path.to_string(),
        })
    }
}

impl Checker for PkgnameChecker {
    fn check(&self, doc: &Document, path: &str) -> CheckResult {
        let mut result = CheckResult::new();
        if let Err(e) = self.verify(doc, path) {
            result.add_issue(CheckIssue::error(e.to_string()).with_subject("pkgname"));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(pkgname: &str) -> Document {
        Document {
            pkgname: pkgname.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_expected_pkgname() {
        assert_eq!(expected_pkgname("aports/main/hello/APKBUILD"), Some("hello"));
        assert_eq!(expected_pkgname("/abs/device-x/APKBUILD"), Some("device-x"));
        assert_eq!(expected_pkgname("APKBUILD"), None);
    }

    #[test]
    fn test_match() {
        assert!(PkgnameChecker.verify(&named("hello"), "main/hello/APKBUILD").is_ok());
    }

    #[test]
    fn test_mismatch() {
        let err = PkgnameChecker
            .verify(&named("hello"), "main/world/APKBUILD")
            .unwrap_err();
        let text = err.to_string();
        assert!(text.contains("pkgname"));
        assert!(text.contains("'hello'"));
        assert!(text.contains("world"));
    }

    #[test]
    fn test_no_directory() {
        assert!(PkgnameChecker.verify(&named("hello"), "APKBUILD").is_err());
        let result = PkgnameChecker.check(&named("hello"), "APKBUILD");
        assert!(result.has_errors());
    }
}
