//! Kernels command implementation

use anyhow::{Context as _, Result};
use colored::Colorize;
use std::path::Path;

use crate::cli::Context;
use crate::kernels::{kernels, kernels_for_device};
use crate::parser::ParseOptions;

/// Execute the kernels command
///
/// `target` is a recipe path, or a device name when `aports` is given.
pub fn execute(ctx: &Context, target: &str, aports: Option<&Path>, opts: &ParseOptions) -> Result<()> {
    let flavors = match aports {
        Some(aports) => kernels_for_device(aports, target, opts)
            .with_context(|| format!("Failed to read kernels of device '{}'", target))?,
        None => kernels(&ctx.parse_recipe(Path::new(target), opts)?),
    };

    if ctx.json {
        return ctx.print_json(&flavors);
    }

    match flavors {
        None => println!("{}", "hardcoded".dimmed()),
        Some(flavors) => {
            let width = flavors.keys().map(str::len).max().unwrap_or(0);
            for (flavor, pkgdesc) in flavors.iter() {
                println!("{:<width$}  {}", flavor.green(), pkgdesc);
            }
        }
    }
    Ok(())
}
