//! Utility modules

pub mod lines;
pub mod strings;

pub use lines::{lines_from_str, read_lines, RecipeFile};
