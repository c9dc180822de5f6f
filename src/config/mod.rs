//! Configuration management module

use anyhow::{Context, Result};
use std::path::Path;

use crate::model::Config;

/// Load the configuration at `path`, or defaults if it does not exist
pub fn load_config(path: &Path) -> Result<Config> {
    let config = Config::load_from(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    tracing::debug!(path = %path.display(), exists = path.exists(), "loaded configuration");
    Ok(config)
}

/// Write the default configuration to `path` unless a file already exists.
///
/// Returns `true` if a file was written.
pub fn init_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let content = toml::to_string_pretty(&Config::default())?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert!(init_config(&path).unwrap());
        assert!(!init_config(&path).unwrap());

        let config = load_config(&path).unwrap();
        assert!(config.parser.check_pkgver);
    }

    #[test]
    fn test_invalid_config_names_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[parser]\ncheck_pkgver = \"maybe\"\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains("config.toml"));
    }
}
