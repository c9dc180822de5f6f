//! Maintainer and archival notices from the leading comment block

use super::builders::CommentBlockBuilder;

/// Maintainers in order: `# Maintainer:` lines, then `# Co-Maintainer:` lines.
///
/// Empty tags are skipped. Co-maintainers are only listed after a primary
/// maintainer; without one the result is empty.
pub fn maintainers<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let block = CommentBlockBuilder::leading(lines);
    let primary = non_empty(block.tags("Maintainer"));
    if primary.len() > 1 {
        tracing::warn!(count = primary.len(), "multiple Maintainer lines, use Co-Maintainer");
    }

    let co = non_empty(block.tags("Co-Maintainer"));
    if primary.is_empty() {
        if !co.is_empty() {
            tracing::warn!(count = co.len(), "Co-Maintainer without Maintainer, ignoring");
        }
        return Vec::new();
    }

    primary.into_iter().chain(co).collect()
}

fn non_empty(names: Vec<String>) -> Vec<String> {
    names
        .into_iter()
        .filter(|name| {
            if name.is_empty() {
                tracing::warn!("skipping empty maintainer tag");
            }
            !name.is_empty()
        })
        .collect()
}

/// Archival reason, `# Archived:` lines joined with newlines.
pub fn archived<S: AsRef<str>>(lines: &[S]) -> Option<String> {
    let reasons = CommentBlockBuilder::leading(lines).tags("Archived");
    if reasons.is_empty() {
        None
    } else {
        Some(reasons.join("\n"))
    }
}
