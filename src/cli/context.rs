//! Command execution context

use anyhow::{Context as _, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, ParseArgs};
use crate::model::{Config, OutputFormat};
use crate::parser::ParseOptions;

/// Common context for command execution
pub struct Context {
    pub config: Config,
    /// Where `config` was (or would be) loaded from
    pub config_path: PathBuf,
    pub json: bool,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
        let config = crate::config::load_config(&config_path)?;

        if !config.output.color {
            colored::control::set_override(false);
        }
        let json = cli.json || config.output.format == OutputFormat::Json;

        Ok(Self {
            config,
            config_path,
            json,
        })
    }

    /// Parse options from the configuration, overridden by CLI flags.
    pub fn parse_options(&self, args: &ParseArgs) -> ParseOptions {
        let mut opts = ParseOptions::from_config(&self.config.parser);
        if args.check_pkgname {
            opts.check_pkgname = true;
        }
        if args.no_check_pkgver {
            opts.check_pkgver = false;
        }
        if let Some(policy) = args.function_match {
            opts.function_match = policy;
        }
        opts
    }

    /// Parse a recipe file with `opts`.
    pub fn parse_recipe(&self, path: &Path, opts: &ParseOptions) -> Result<crate::model::Document> {
        crate::parser::parse_file(path, opts)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Read just the lines of a recipe (for comment-only queries).
    pub fn read_recipe(&self, path: &Path) -> Result<Vec<String>> {
        Ok(crate::utils::read_lines(path)?.lines)
    }

    /// Print a value as pretty JSON
    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }
}
