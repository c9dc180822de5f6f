//! CLI command implementations

pub mod archived;
pub mod check;
pub mod config;
pub mod kernels;
pub mod maintainers;
pub mod show;

use anyhow::Result;

use crate::cli::args::{Cli, Commands};
use crate::cli::Context;

/// Dispatch the parsed command line
pub fn run(cli: &Cli) -> Result<()> {
    let ctx = Context::from_cli(cli)?;

    match &cli.command {
        Commands::Show { path, parse } => show::execute(&ctx, path, &ctx.parse_options(parse)),
        Commands::Kernels {
            target,
            aports,
            parse,
        } => kernels::execute(&ctx, target, aports.as_deref(), &ctx.parse_options(parse)),
        Commands::Maintainers { path } => maintainers::execute(&ctx, path),
        Commands::Archived { path } => archived::execute(&ctx, path),
        Commands::Check { paths, parse } => check::execute(&ctx, paths, &ctx.parse_options(parse)),
        Commands::Config { init } => config::execute(&ctx, *init),
    }
}
