//! Maintainers command implementation

use anyhow::Result;
use std::path::Path;

use crate::cli::Context;
use crate::parser::maintainers;

/// Execute the maintainers command
pub fn execute(ctx: &Context, path: &Path) -> Result<()> {
    let lines = ctx.read_recipe(path)?;
    let found = maintainers(&lines);

    if ctx.json {
        return ctx.print_json(&found);
    }

    for maintainer in &found {
        println!("{}", maintainer);
    }
    Ok(())
}
