//! Parsed recipe metadata
//!
//! # Field Semantics
//!
//! - `arch`: ordered set of architecture words as written (`all`, `noarch`,
//!   `!armhf`, `x86_64`), duplicates removed
//! - `depends`: package names in the order written, duplicates kept
//! - `subpackages`: declaration order; `None` means the sub-package function
//!   could not be located, which is not an error
//! - `attributes`: every other top-level assignment, after substitution

use serde::Serialize;
use std::collections::BTreeMap;

use super::OrderedMap;
use crate::utils::strings::split_words;

/// Metadata assembled from one APKBUILD.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub pkgname: String,
    pub pkgver: String,
    pub pkgrel: u32,
    pub pkgdesc: String,
    pub url: String,
    pub arch: Vec<String>,
    pub depends: Vec<String>,
    pub subpackages: OrderedMap<Option<SubpackageMetadata>>,
    pub maintainers: Vec<String>,
    pub archived: Option<String>,
    pub attributes: BTreeMap<String, String>,
}

impl Document {
    /// Raw value of an attribute without a dedicated field.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Attribute split into whitespace-separated words; empty if absent.
    ///
    /// ```
    /// use apkmeta::model::Document;
    ///
    /// let mut doc = Document::default();
    /// doc.attributes.insert("makedepends".into(), "linux-headers  make".into());
    /// assert_eq!(doc.array("makedepends"), vec!["linux-headers", "make"]);
    /// assert!(doc.array("checkdepends").is_empty());
    /// ```
    pub fn array(&self, key: &str) -> Vec<String> {
        self.attribute(key).map(split_words).unwrap_or_default()
    }

    /// Resolved metadata of a sub-package, `None` if unknown or unresolved.
    pub fn subpackage(&self, name: &str) -> Option<&SubpackageMetadata> {
        self.subpackages.get(name).and_then(Option::as_ref)
    }

    /// Whether the recipe builds for `arch`.
    pub fn supports_arch(&self, arch: &str) -> bool {
        arch_matches(&self.arch, arch)
    }

    /// Full version string as apk reports it (`<pkgver>-r<pkgrel>`).
    pub fn full_version(&self) -> String {
        format!("{}-r{}", self.pkgver, self.pkgrel)
    }
}

/// Metadata a sub-package function body may override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubpackageMetadata {
    /// Empty unless assigned inside the function body
    pub pkgdesc: String,
    /// Parent's `depends` unless overridden
    pub depends: Vec<String>,
    /// Parent's `arch` unless overridden
    pub arch: Vec<String>,
    /// Other assignments found in the body (`provides`, `install`, ...)
    pub attributes: BTreeMap<String, String>,
}

impl SubpackageMetadata {
    pub fn supports_arch(&self, arch: &str) -> bool {
        arch_matches(&self.arch, arch)
    }
}

/// Evaluate an `arch` word list against a concrete architecture.
///
/// `!arch` always excludes. An exact word, `all` or `noarch` includes.
pub fn arch_matches(arches: &[String], arch: &str) -> bool {
    if arches
        .iter()
        .any(|a| a.strip_prefix('!') == Some(arch))
    {
        return false;
    }
    arches
        .iter()
        .any(|a| a == arch || a == "all" || a == "noarch")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<String> {
        split_words(s)
    }

    #[test]
    fn test_arch_all_with_exclusion() {
        let arches = words("all !armhf !riscv64");
        assert!(arch_matches(&arches, "x86_64"));
        assert!(arch_matches(&arches, "aarch64"));
        assert!(!arch_matches(&arches, "armhf"));
    }

    #[test]
    fn test_arch_explicit_list() {
        let arches = words("aarch64 armv7");
        assert!(arch_matches(&arches, "armv7"));
        assert!(!arch_matches(&arches, "x86"));
    }

    #[test]
    fn test_arch_noarch_and_empty() {
        assert!(arch_matches(&words("noarch"), "ppc64le"));
        assert!(!arch_matches(&[], "x86_64"));
    }

    #[test]
    fn test_subpackage_lookup_flattens_unresolved() {
        let mut doc = Document::default();
        doc.subpackages.insert("found", Some(SubpackageMetadata::default()));
        doc.subpackages.insert("missing", None);

        assert!(doc.subpackage("found").is_some());
        assert!(doc.subpackage("missing").is_none());
        assert!(doc.subpackages.contains_key("missing"));
    }

    #[test]
    fn test_full_version() {
        let doc = Document {
            pkgver: "3.0.0_alpha369".into(),
            pkgrel: 2,
            ..Default::default()
        };
        assert_eq!(doc.full_version(), "3.0.0_alpha369-r2");
    }
}
