//! Checker module for validating parsed recipes
//!
//! | Checker | Severity | Enabled by |
//! |---------|----------|------------|
//! | [`PkgnameChecker`] | Error | `check_pkgname` |
//! | [`PkgverChecker`] | Error | `check_pkgver` |
//! | [`DuplicateChecker`] | Warning | always (lint) |
//! | [`CompletenessChecker`] | Warning | always (lint) |
//!
//! [`validate`] is what the parser runs: it turns the first failing
//! identity check into an [`ApkbuildError::Validation`]. [`check_all`] is
//! the lint pass used by `apkmeta check`.

mod completeness;
mod duplicate;
mod pkgname;
mod pkgver;

pub use completeness::CompletenessChecker;
pub use duplicate::DuplicateChecker;
pub use pkgname::{expected_pkgname, PkgnameChecker};
pub use pkgver::{is_valid_pkgver, PkgverChecker};

use crate::error::Result;
use crate::model::Document;
use crate::parser::ParseOptions;

/// Check result
#[derive(Debug)]
pub struct CheckResult {
    pub issues: Vec<CheckIssue>,
}

impl CheckResult {
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    pub fn add_issue(&mut self, issue: CheckIssue) {
        self.issues.push(issue);
    }

    pub fn extend(&mut self, other: CheckResult) {
        self.issues.extend(other.issues);
    }

    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i.severity, Severity::Error))
    }

    pub fn has_warnings(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i.severity, Severity::Warning))
    }

    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

impl Default for CheckResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Issue severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// A single check issue
#[derive(Debug, serde::Serialize)]
pub struct CheckIssue {
    pub severity: Severity,
    pub message: String,
    /// Field or sub-package the issue is about
    pub subject: Option<String>,
}

impl CheckIssue {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            subject: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            subject: None,
        }
    }

    pub fn with_subject(mut self, name: impl Into<String>) -> Self {
        self.subject = Some(name.into());
        self
    }
}

/// Trait for checkers
pub trait Checker {
    /// `path` is the recipe location as given to the parser.
    fn check(&self, doc: &Document, path: &str) -> CheckResult;
}

/// Run the identity checks requested in `opts`.
///
/// # Errors
///
/// [`crate::error::ApkbuildError::Validation`] for the first failing field,
/// `pkgname` before `pkgver`.
pub fn validate(doc: &Document, path: &str, opts: &ParseOptions) -> Result<()> {
    if opts.check_pkgname {
        PkgnameChecker.verify(doc, path)?;
    }
    if opts.check_pkgver {
        PkgverChecker.verify(doc, path)?;
    }
    Ok(())
}

/// Run the requested identity checks and all lints on a parsed recipe.
pub fn check_all(doc: &Document, path: &str, opts: &ParseOptions) -> CheckResult {
    let mut checkers: Vec<Box<dyn Checker>> = Vec::new();
    if opts.check_pkgname {
        checkers.push(Box::new(PkgnameChecker));
    }
    if opts.check_pkgver {
        checkers.push(Box::new(PkgverChecker));
    }
    checkers.push(Box::new(DuplicateChecker));
    checkers.push(Box::new(CompletenessChecker));

    let mut result = CheckResult::new();
    for checker in checkers {
        result.extend(checker.check(doc, path));
    }
    result
}
