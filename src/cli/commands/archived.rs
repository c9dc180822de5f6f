//! Archived command implementation

use anyhow::Result;
use std::path::Path;

use crate::cli::Context;
use crate::parser::archived;

/// Execute the archived command; exits successfully either way.
pub fn execute(ctx: &Context, path: &Path) -> Result<()> {
    let lines = ctx.read_recipe(path)?;
    let reason = archived(&lines);

    if ctx.json {
        return ctx.print_json(&reason);
    }

    match reason {
        Some(reason) => ctx.print_warning(&format!("Archived: {}", reason)),
        None => ctx.print_success("Not archived"),
    }
    Ok(())
}
