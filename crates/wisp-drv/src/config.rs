//! Optional `wisp.toml` configuration: current directory, then
//! `~/.config/wisp/`, then the platform config directory, falling back to
//! defaults if none is found.

use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};

use crate::error::{DriverError, Result};

pub const CONFIG_FILE_NAME: &str = "wisp.toml";

/// Driver-level configuration. Every toolchain stage is fixed (no tunable
/// knobs), so this only covers ambient driver behavior: default verbosity
/// and the working scale used by `ir`'s pretty-printer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    /// Search the standard locations and load the first config found, or
    /// fall back to `Config::default()` if none exists.
    pub fn load() -> Result<Self> {
        match Self::find_config_file()? {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| DriverError::Config(format!("failed to parse configuration: {e}")))
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("wisp").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("wisp").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Result<Option<PathBuf>> {
        Ok(Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_not_verbose() {
        assert!(!Config::default().verbose);
    }

    #[test]
    fn load_from_path_reads_verbose_flag() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wisp.toml");
        std::fs::write(&path, "verbose = true\n").unwrap();
        let config = Config::load_from_path(&path).unwrap();
        assert!(config.verbose);
    }

    #[test]
    fn load_from_nonexistent_path_fails() {
        let result = Config::load_from_path(Path::new("/nonexistent/wisp.toml"));
        assert!(result.is_err());
    }
}
