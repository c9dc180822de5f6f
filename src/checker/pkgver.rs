//! pkgver grammar check

use super::{CheckIssue, CheckResult, Checker};
use crate::error::{ApkbuildError, Result};
use crate::model::Document;
use crate::parser::patterns::PKGVER_RE;

/// Checks `pkgver` against the Alpine version grammar.
pub struct PkgverChecker;

/// Whether `pkgver` is a valid Alpine version (`1.2.3`, `3.0_rc1`, `0.9~ab12`).
pub fn is_valid_pkgver(pkgver: &str) -> bool {
    PKGVER_RE.is_match(pkgver)
}

impl PkgverChecker {
    pub fn verify(&self, doc: &Document, path: &str) -> Result<()> {
        if is_valid_pkgver(&doc.pkgver) {
            return Ok(());
        }
        Err(ApkbuildError::Validation {
            field: "pkgver",
            value: doc.pkgver.clone(),
            reason: "not a valid Alpine version, see https://wiki.alpinelinux.org/wiki/APKBUILD_Reference#pkgver".into(),
            path: path.to_string(),
        })
    }
}

impl Checker for PkgverChecker {
    fn check(&self, doc: &Document, path: &str) -> CheckResult {
        let mut result = CheckResult::new();
        if let Err(e) = self.verify(doc, path) {
            result.add_issue(CheckIssue::error(e.to_string()).with_subject("pkgver"));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_versions() {
        for v in [
            "1",
            "2.37",
            "1.2.3a",
            "3.0.0_alpha369",
            "3.0.0_alpha369-r0",
            "0.9_git20230101",
            "1.0_rc1_p2",
            "5.15~a1b2c3",
        ] {
            assert!(is_valid_pkgver(v), "{v}");
        }
    }

    #[test]
    fn test_invalid_versions() {
        for v in ["", "v1.0", "1.0-beta", "1..2", "1.0_", "$pkgver", "1.0 "] {
            assert!(!is_valid_pkgver(v), "{v}");
        }
    }

    #[test]
    fn test_verify_error_names_field() {
        let doc = Document {
            pkgver: "1.0-beta".into(),
            ..Default::default()
        };
        let err = PkgverChecker.verify(&doc, "x/APKBUILD").unwrap_err();
        assert!(err.to_string().starts_with("Invalid pkgver '1.0-beta'"));
    }
}
