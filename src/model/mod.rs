//! Core data models for apkmeta

mod config;
mod document;
mod ordered;

pub use config::{Config, FunctionMatch, OutputConfig, OutputFormat, ParserConfig};
pub use document::{arch_matches, Document, SubpackageMetadata};
pub use ordered::OrderedMap;
