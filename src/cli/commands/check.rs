//! Check command implementation

use anyhow::{bail, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::checker::{check_all, CheckIssue, Severity};
use crate::cli::Context;
use crate::parser::ParseOptions;

#[derive(Serialize)]
struct RecipeReport {
    path: String,
    issues: Vec<CheckIssue>,
}

/// Parse one recipe without identity checks, then run every checker so
/// all problems are reported together.
fn check_recipe(ctx: &Context, path: &Path, opts: &ParseOptions) -> RecipeReport {
    let lenient = ParseOptions {
        check_pkgname: false,
        check_pkgver: false,
        ..*opts
    };

    let issues = match ctx.parse_recipe(path, &lenient) {
        Ok(doc) => {
            // same path form parse_file validates against
            let canonical = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
            check_all(&doc, &canonical.display().to_string(), opts).issues
        }
        Err(e) => vec![CheckIssue::error(format!("{:#}", e))],
    };

    RecipeReport {
        path: path.display().to_string(),
        issues,
    }
}

/// Execute the check command
pub fn execute(ctx: &Context, paths: &[PathBuf], opts: &ParseOptions) -> Result<()> {
    let reports: Vec<RecipeReport> = paths.iter().map(|p| check_recipe(ctx, p, opts)).collect();

    let failed = reports
        .iter()
        .filter(|r| r.issues.iter().any(|i| i.severity == Severity::Error))
        .count();

    if ctx.json {
        ctx.print_json(&reports)?;
    } else {
        for report in &reports {
            print_report(ctx, report);
        }
        println!();
    }

    if failed > 0 {
        bail!("{} of {} recipes failed", failed, reports.len());
    }
    if !ctx.json {
        ctx.print_success(&format!("Checked {} recipes", reports.len()));
    }
    Ok(())
}

fn print_report(ctx: &Context, report: &RecipeReport) {
    if report.issues.is_empty() {
        ctx.print_success(&report.path);
        return;
    }

    println!("{}", report.path.bold());
    for issue in &report.issues {
        let (icon, severity) = match issue.severity {
            Severity::Error => ("✗".red(), "ERROR".red()),
            Severity::Warning => ("⚠".yellow(), "WARNING".yellow()),
        };

        print!("  {} [{}]", icon, severity);
        if let Some(ref subject) = issue.subject {
            print!(" ({})", subject.cyan());
        }
        println!(": {}", issue.message);
    }
}
