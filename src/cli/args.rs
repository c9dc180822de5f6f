//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::model::FunctionMatch;

#[derive(Parser)]
#[command(name = "apkmeta")]
#[command(about = "Read package metadata from APKBUILD recipes without running them")]
#[command(version)]
#[command(author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Use this configuration file instead of the default one
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Overrides for the `[parser]` configuration section
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ParseArgs {
    /// Require pkgname to match the recipe's directory name
    #[arg(long)]
    pub check_pkgname: bool,

    /// Skip the pkgver grammar check
    #[arg(long)]
    pub no_check_pkgver: bool,

    /// Sub-package function lookup: exact-then-suffix, exact-only, suffix-only
    #[arg(long, value_name = "POLICY")]
    pub function_match: Option<FunctionMatch>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the parsed metadata of a recipe
    #[command(visible_alias = "s")]
    Show {
        /// Path to an APKBUILD
        path: PathBuf,
        #[command(flatten)]
        parse: ParseArgs,
    },

    /// List selectable kernel variants of a device recipe
    Kernels {
        /// Path to a device APKBUILD, or a device name with --aports
        target: String,
        /// Look up device/*/device-<TARGET>/APKBUILD in this aports tree
        #[arg(long, value_name = "DIR")]
        aports: Option<PathBuf>,
        #[command(flatten)]
        parse: ParseArgs,
    },

    /// Print the maintainers of a recipe, one per line
    Maintainers {
        /// Path to an APKBUILD
        path: PathBuf,
    },

    /// Print the archival notice of a recipe, if any
    Archived {
        /// Path to an APKBUILD
        path: PathBuf,
    },

    /// Parse, validate and lint recipes
    Check {
        /// Paths to APKBUILDs
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        #[command(flatten)]
        parse: ParseArgs,
    },

    /// Show the effective configuration
    Config {
        /// Write the default configuration file if it does not exist
        #[arg(long)]
        init: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show_flags() {
        let cli = Cli::try_parse_from([
            "apkmeta",
            "show",
            "APKBUILD",
            "--check-pkgname",
            "--function-match",
            "suffix-only",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Show { path, parse } => {
                assert_eq!(path, PathBuf::from("APKBUILD"));
                assert!(parse.check_pkgname);
                assert!(!parse.no_check_pkgver);
                assert_eq!(parse.function_match, Some(FunctionMatch::SuffixOnly));
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn test_check_requires_paths() {
        assert!(Cli::try_parse_from(["apkmeta", "check"]).is_err());
    }
}
