//! Config command implementation

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::cli::Context;
use crate::model::Config;

#[derive(Serialize)]
struct ConfigReport<'a> {
    path: String,
    exists: bool,
    config: &'a Config,
}

/// Execute the config command
pub fn execute(ctx: &Context, init: bool) -> Result<()> {
    if init {
        if crate::config::init_config(&ctx.config_path)? {
            ctx.print_success(&format!("Created: {}", ctx.config_path.display()));
        } else {
            ctx.print_warning(&format!("Already exists: {}", ctx.config_path.display()));
        }
    }

    if ctx.json {
        return ctx.print_json(&ConfigReport {
            path: ctx.config_path.display().to_string(),
            exists: ctx.config_path.exists(),
            config: &ctx.config,
        });
    }

    let note = if ctx.config_path.exists() {
        String::new()
    } else {
        " (not found, using defaults)".dimmed().to_string()
    };
    println!("{} {}{}", "#".dimmed(), ctx.config_path.display(), note);
    print!("{}", toml::to_string_pretty(&ctx.config)?);
    Ok(())
}
