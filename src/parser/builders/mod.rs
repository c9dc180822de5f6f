//! # Builders
//!
//! Builders for constructs that span several lines.
//!
//! ## Module Structure
//!
//! ```text
//! builders/
//! ├── mod.rs          - This file: exports
//! ├── quoted.rs       - QuotedValueBuilder for multi-line quoted values
//! ├── function.rs     - FunctionBuilder for sub-package function bodies
//! └── comment.rs      - CommentBlockBuilder for the leading comment block
//! ```
//!
//! ## Builder Pattern
//!
//! All builders follow this lifecycle:
//!
//! 1. **`new(..)`** - Initialize at the starting line
//! 2. **`add_line(line)`** - Feed subsequent lines; returns whether the
//!    construct is complete (or, for comments, whether the block continues)
//! 3. **`build()` / accessors** - Read the assembled result
//!
//! ## Available Builders
//!
//! | Builder | Used for | End Detection |
//! |---------|----------|---------------|
//! | [`QuotedValueBuilder`] | `KEY="..."`, `KEY='...'` | Matching unescaped quote |
//! | [`FunctionBuilder`] | `name() {` bodies | Line starting with `}` |
//! | [`CommentBlockBuilder`] | Maintainer/Archived tags | First non-comment line |

mod comment;
mod function;
mod quoted;

pub use comment::CommentBlockBuilder;
pub use function::FunctionBuilder;
pub use quoted::QuotedValueBuilder;
