//! Duplicate dependency checker

use super::{CheckIssue, CheckResult, Checker, Severity};
use crate::model::Document;
use std::collections::HashMap;

/// Checks for packages listed more than once in `depends`
pub struct DuplicateChecker;

fn duplicates<'a>(words: &'a [String]) -> Vec<(&'a str, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();
    for word in words {
        let count = counts.entry(word.as_str()).or_default();
        if *count == 0 {
            order.push(word.as_str());
        }
        *count += 1;
    }
    order
        .into_iter()
        .filter_map(|w| counts.get(w).filter(|&&c| c > 1).map(|&c| (w, c)))
        .collect()
}

impl Checker for DuplicateChecker {
    fn check(&self, doc: &Document, _path: &str) -> CheckResult {
        let mut result = CheckResult::new();

        for (name, count) in duplicates(&doc.depends) {
            result.add_issue(CheckIssue {
                severity: Severity::Warning,
                message: format!("Duplicate dependency '{}' listed {} times", name, count),
                subject: Some("depends".into()),
            });
        }

        for (subpkg, metadata) in doc.subpackages.iter() {
            let Some(metadata) = metadata else { continue };
            // inherited duplicates were already reported for the parent
            if metadata.depends == doc.depends {
                continue;
            }
            for (name, count) in duplicates(&metadata.depends) {
                result.add_issue(
                    CheckIssue::warning(format!(
                        "Duplicate dependency '{}' listed {} times",
                        name, count
                    ))
                    .with_subject(subpkg),
                );
            }
        }

        result
    }
}
