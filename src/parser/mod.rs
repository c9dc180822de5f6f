//! # Parser Module
//!
//! Extracts recipe metadata from APKBUILD text without running a shell.
//!
//! ## Architecture Overview
//!
//! ```text
//! parser/
//! ├── mod.rs          - This file: ParseOptions + parse()/parse_file()
//! ├── patterns.rs     - Regex patterns (ASSIGNMENT_RE, VARIABLE_RE, ...)
//! ├── attribute.rs    - parse_next_attribute(): one top-level KEY=VALUE
//! ├── variables.rs    - VariableStore + single-pass substitution
//! ├── subpackage.rs   - Sub-package function lookup and body parsing
//! ├── comments.rs     - Maintainer / Archived tags
//! └── builders/       - Multi-line construct builders
//!     ├── quoted.rs   - QuotedValueBuilder
//!     ├── function.rs - FunctionBuilder
//!     └── comment.rs  - CommentBlockBuilder
//! ```
//!
//! ## Pass Order
//!
//! 1. Top-level assignments in file order. Each value is substituted with
//!    the variables seen before it, then recorded.
//! 2. Sub-packages, once all top-level variables are known.
//! 3. Leading comment tags.
//! 4. Identity checks requested in [`ParseOptions`].
//!
//! ## Usage
//!
//! ```
//! use apkmeta::parser::{parse, ParseOptions};
//!
//! let text = "# Maintainer: A <a@example.org>\n\
//!             pkgname=hello\n\
//!             pkgver=1.0\n\
//!             pkgrel=2\n\
//!             depends=\"musl\n\tzlib\"\n\
//!             subpackages=\"$pkgname-doc\"\n";
//! let lines = apkmeta::utils::lines_from_str(text);
//! let doc = parse(&lines, "main/hello/APKBUILD", &ParseOptions::default()).unwrap();
//!
//! assert_eq!(doc.pkgname, "hello");
//! assert_eq!(doc.depends, vec!["musl", "zlib"]);
//! assert_eq!(doc.full_version(), "1.0-r2");
//! assert!(doc.subpackages.contains_key("hello-doc"));
//! assert_eq!(doc.maintainers, vec!["A <a@example.org>"]);
//! ```

mod attribute;
pub mod builders;
pub mod comments;
pub mod patterns;
pub mod subpackage;
mod variables;

pub use attribute::{parse_next_attribute, Attribute};
pub use comments::{archived, maintainers};
pub use subpackage::{resolve, SubpackageToken};
pub use variables::{substitute, VariableStore};

use std::path::Path;

use crate::checker;
use crate::error::Result;
use crate::model::{Document, FunctionMatch, ParserConfig};
use crate::utils::read_lines;
use crate::utils::strings::{split_words, split_words_unique};

/// Options for one parse.
///
/// The default performs no identity checks; the CLI starts from
/// [`ParseOptions::from_config`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// `pkgname` must equal the recipe's directory name
    pub check_pkgname: bool,
    /// `pkgver` must follow the Alpine version grammar
    pub check_pkgver: bool,
    pub function_match: FunctionMatch,
}

impl ParseOptions {
    pub fn from_config(config: &ParserConfig) -> Self {
        Self {
            check_pkgname: config.check_pkgname,
            check_pkgver: config.check_pkgver,
            function_match: config.function_match,
        }
    }
}

/// Assemble a [`Document`] from recipe lines.
///
/// `path` is only used for error messages and the `pkgname` check.
///
/// # Errors
///
/// - [`crate::error::ApkbuildError::Syntax`] for an unterminated quote or
///   function body
/// - [`crate::error::ApkbuildError::Validation`] when a requested check fails
pub fn parse<S: AsRef<str>>(lines: &[S], path: &str, opts: &ParseOptions) -> Result<Document> {
    let mut store = VariableStore::new();
    let mut doc = Document::default();
    let mut subpackages_value = None;

    let mut index = 0;
    while let Some(attr) = parse_next_attribute(lines, index, path)? {
        index = attr.next_index();
        let value = store.substitute(&attr.value);

        match attr.key.as_str() {
            "pkgname" => doc.pkgname = value.clone(),
            "pkgver" => doc.pkgver = value.clone(),
            "pkgrel" => match value.parse::<u32>() {
                Ok(pkgrel) => {
                    doc.pkgrel = pkgrel;
                    doc.attributes.remove("pkgrel");
                }
                Err(_) => {
                    tracing::warn!(
                        path,
                        line = attr.line + 1,
                        value = %value,
                        "pkgrel is not a non-negative integer, using 0"
                    );
                    doc.pkgrel = 0;
                    doc.attributes.insert("pkgrel".into(), value.clone());
                }
            },
            "pkgdesc" => doc.pkgdesc = value.clone(),
            "url" => doc.url = value.clone(),
            "arch" => doc.arch = split_words_unique(&value),
            "depends" => doc.depends = split_words(&value),
            "subpackages" => subpackages_value = Some(value.clone()),
            _ => {
                doc.attributes.insert(attr.key.clone(), value.clone());
            }
        }

        store.set(attr.key, value);
    }

    if let Some(value) = subpackages_value {
        doc.subpackages = resolve(lines, &value, &doc, &store, opts.function_match, path)?;
    }

    doc.maintainers = maintainers(lines);
    doc.archived = archived(lines);

    checker::validate(&doc, path, opts)?;

    tracing::debug!(
        path,
        pkgname = %doc.pkgname,
        subpackages = doc.subpackages.len(),
        "parsed recipe"
    );
    Ok(doc)
}

/// Read and parse a recipe file.
///
/// # Errors
///
/// Everything [`parse`] returns, plus I/O and line-ending errors.
pub fn parse_file(path: impl AsRef<Path>, opts: &ParseOptions) -> Result<Document> {
    let file = read_lines(path.as_ref())?;
    parse(&file.lines, &file.display_path(), opts)
}
