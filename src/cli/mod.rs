//! CLI module

pub mod args;
pub mod commands;
pub mod context;

pub use args::Cli;
pub use commands::run;
pub use context::Context;
