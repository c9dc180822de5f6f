//! # Sub-package Resolution
//!
//! Maps every `subpackages` token to the metadata found in its shell function.
//!
//! ## Token Forms
//!
//! | Token | Sub-package | Function candidates |
//! |-------|-------------|---------------------|
//! | `[usr_merge]` | skipped | - |
//! | `foo:bar` | `foo` | `bar` only |
//! | `foo` | `foo` | chosen by [`FunctionMatch`] |
//!
//! A function body is parsed with the same attribute parser as the top
//! level. Its lines are stripped of indentation first, so indented
//! assignments inside the body count as assignments.
//!
//! Modeled parent fields the recipe never assigns are visible in the body
//! as empty values, so `depends="$depends foo"` works without a top-level
//! `depends`.

use super::attribute::parse_next_attribute;
use super::builders::FunctionBuilder;
use super::variables::VariableStore;
use crate::error::Result;
use crate::model::{Document, FunctionMatch, OrderedMap, SubpackageMetadata};
use crate::utils::strings::{split_words, split_words_unique};

/// A sub-package token split into its name and optional explicit function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubpackageToken {
    pub name: String,
    pub function: Option<String>,
}

impl SubpackageToken {
    /// Parse one word of the `subpackages` value; `None` for `[...]` markers.
    pub fn parse(word: &str) -> Option<Self> {
        if word.starts_with('[') {
            return None;
        }
        let token = match word.split_once(':') {
            Some((name, function)) if !function.is_empty() => SubpackageToken {
                name: name.to_string(),
                function: Some(function.to_string()),
            },
            Some((name, _)) => SubpackageToken {
                name: name.to_string(),
                function: None,
            },
            None => SubpackageToken {
                name: word.to_string(),
                function: None,
            },
        };
        Some(token)
    }

    /// Function names to try, in order.
    pub fn candidates(&self, pkgname: &str, policy: FunctionMatch) -> Vec<String> {
        if let Some(function) = &self.function {
            return vec![function.clone()];
        }

        let exact = [self.name.clone(), format!("{}_{}", pkgname, self.name)];
        let suffix = self
            .name
            .rsplit_once('-')
            .map_or(self.name.as_str(), |(_, tail)| tail)
            .to_string();

        let all: Vec<String> = match policy {
            FunctionMatch::ExactThenSuffix => exact.into_iter().chain([suffix]).collect(),
            FunctionMatch::ExactOnly => exact.into(),
            FunctionMatch::SuffixOnly => vec![suffix],
        };

        let mut unique: Vec<String> = Vec::with_capacity(all.len());
        for name in all {
            if !name.is_empty() && !unique.contains(&name) {
                unique.push(name);
            }
        }
        unique
    }
}

/// Resolve every sub-package named in `subpackages_value`.
///
/// `store` must hold all top-level variables; body assignments are
/// substituted against a copy of it that also has `subpkgname` set.
///
/// # Errors
///
/// Syntax errors from a function body (unterminated quote, missing `}`)
/// with line numbers relative to the whole file.
pub fn resolve<S: AsRef<str>>(
    lines: &[S],
    subpackages_value: &str,
    parent: &Document,
    store: &VariableStore,
    policy: FunctionMatch,
    path: &str,
) -> Result<OrderedMap<Option<SubpackageMetadata>>> {
    let mut resolved = OrderedMap::new();

    for word in split_words(subpackages_value) {
        let Some(token) = SubpackageToken::parse(&word) else {
            tracing::debug!(token = %word, "skipping subpackage marker");
            continue;
        };

        let mut function = None;
        for candidate in token.candidates(&parent.pkgname, policy) {
            if let Some(found) = FunctionBuilder::locate(lines, &candidate, path)? {
                function = Some(found);
                break;
            }
        }

        let metadata = match function {
            Some(function) => {
                tracing::debug!(
                    subpackage = %token.name,
                    function = %function.name,
                    line = function.start_line + 1,
                    "located subpackage function"
                );
                Some(parse_body(&function, &token.name, parent, store, path)?)
            }
            None => {
                tracing::debug!(subpackage = %token.name, "subpackage function not found");
                None
            }
        };

        resolved.insert(token.name, metadata);
    }

    Ok(resolved)
}

fn parse_body(
    function: &FunctionBuilder,
    subpkgname: &str,
    parent: &Document,
    store: &VariableStore,
    path: &str,
) -> Result<SubpackageMetadata> {
    let mut vars = store.clone();
    vars.set("subpkgname", subpkgname);
    seed_parent_fields(&mut vars, parent);

    let mut metadata = SubpackageMetadata {
        pkgdesc: String::new(),
        depends: parent.depends.clone(),
        arch: parent.arch.clone(),
        attributes: Default::default(),
    };

    let mut index = 0;
    while let Some(attr) = parse_next_attribute(&function.lines, index, path)
        .map_err(|e| e.with_line_offset(function.body_start()))?
    {
        index = attr.next_index();
        let value = vars.substitute(&attr.value);

        match attr.key.as_str() {
            "pkgdesc" => metadata.pkgdesc = value.clone(),
            "depends" => metadata.depends = split_words(&value),
            "arch" => metadata.arch = split_words_unique(&value),
            _ => {
                metadata.attributes.insert(attr.key.clone(), value.clone());
            }
        }
        vars.set(attr.key, value);
    }

    Ok(metadata)
}

fn seed_parent_fields(vars: &mut VariableStore, parent: &Document) {
    vars.set_default("pkgname", parent.pkgname.as_str());
    vars.set_default("pkgver", parent.pkgver.as_str());
    vars.set_default("pkgrel", parent.pkgrel.to_string());
    vars.set_default("pkgdesc", parent.pkgdesc.as_str());
    vars.set_default("url", parent.url.as_str());
    vars.set_default("arch", parent.arch.join(" "));
    vars.set_default("depends", parent.depends.join(" "));
}
