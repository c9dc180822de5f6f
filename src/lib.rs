//! apkmeta - APKBUILD metadata extractor
//!
//! Reads Alpine/postmarketOS package recipes as a restricted shell subset
//! and produces structured metadata without executing anything.
//!
//! # Features
//!
//! - Top-level `KEY=VALUE` assignments with single, double and multi-line quoting
//! - Single-pass `$var`, `${var}` and `${var/search/replace}` substitution
//! - Sub-package metadata from shell function bodies
//! - Maintainer, co-maintainer and archival comment tags
//! - Kernel variant discovery for device recipes
//! - `pkgname`/`pkgver` validation and lint checks

pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod kernels;
pub mod model;
pub mod parser;
pub mod utils;

pub use checker::check_all;
pub use error::{ApkbuildError, Result};
pub use kernels::kernels;
pub use model::{Config, Document, SubpackageMetadata};
pub use parser::{parse, parse_file, ParseOptions};
