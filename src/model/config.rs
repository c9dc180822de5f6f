//! Application configuration structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Defaults for parse options (CLI flags override these)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ParserConfig {
    #[serde(default)]
    pub check_pkgname: bool,
    #[serde(default = "default_true")]
    pub check_pkgver: bool,
    #[serde(default)]
    pub function_match: FunctionMatch,
}

/// How a `subpackages` token is mapped to the shell function describing it.
///
/// An explicit `name:function` token always uses `function` and nothing else.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FunctionMatch {
    /// Try `<token>()`, then `<pkgname>_<token>()`, then the text after the
    /// token's last `-` (`$pkgname-doc` → `doc()`).
    #[default]
    ExactThenSuffix,
    /// Only `<token>()` and `<pkgname>_<token>()`
    ExactOnly,
    /// Only the text after the last `-`
    SuffixOnly,
}

impl std::fmt::Display for FunctionMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FunctionMatch::ExactThenSuffix => write!(f, "exact-then-suffix"),
            FunctionMatch::ExactOnly => write!(f, "exact-only"),
            FunctionMatch::SuffixOnly => write!(f, "suffix-only"),
        }
    }
}

impl std::str::FromStr for FunctionMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exact-then-suffix" | "both" => Ok(FunctionMatch::ExactThenSuffix),
            "exact-only" | "exact" => Ok(FunctionMatch::ExactOnly),
            "suffix-only" | "suffix" => Ok(FunctionMatch::SuffixOnly),
            _ => Err(format!("Unknown function match policy: {}", s)),
        }
    }
}

/// Output configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_true")]
    pub color: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn default_true() -> bool {
    true
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            check_pkgname: false,
            check_pkgver: true,
            function_match: FunctionMatch::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl Config {
    /// Get the apkmeta configuration directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("~"))
                    .join(".config")
            })
            .join("apkmeta")
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from `path`, or return default if it doesn't exist
    pub fn load_from(path: &std::path::Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}
