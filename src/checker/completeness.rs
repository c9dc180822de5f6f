//! Lints for metadata a recipe usually carries

use super::{CheckIssue, CheckResult, Checker};
use crate::model::Document;

/// Warns about an empty `pkgdesc`, missing maintainers and sub-packages
/// whose function could not be found.
pub struct CompletenessChecker;

impl Checker for CompletenessChecker {
    fn check(&self, doc: &Document, _path: &str) -> CheckResult {
        let mut result = CheckResult::new();

        if doc.pkgdesc.is_empty() {
            result.add_issue(CheckIssue::warning("pkgdesc is empty").with_subject("pkgdesc"));
        }
        if doc.maintainers.is_empty() {
            result.add_issue(CheckIssue::warning("no '# Maintainer:' line found"));
        }
        for (name, metadata) in doc.subpackages.iter() {
            if metadata.is_none() {
                result.add_issue(
                    CheckIssue::warning(format!("no function found for subpackage '{}'", name))
                        .with_subject(name),
                );
            }
        }
        if let Some(reason) = &doc.archived {
            result.add_issue(CheckIssue::warning(format!("archived: {}", reason)));
        }

        result
    }
}
