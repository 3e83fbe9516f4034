//! Configuration module for the cfgt CLI.
//!
//! This module handles loading, saving, and managing configuration
//! settings for the cfgt application.

use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{CfgtError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "cfgt.toml";

/// Fallback worker count if the CPU count does not fit.
const DEFAULT_THREAD_COUNT: u32 = 4;

/// Application configuration structure.
///
/// Command-line flags take precedence over every value here.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Settings for `cfgt tokens`.
    #[serde(default)]
    pub tokens: TokensConfig,

    /// Settings for `cfgt check`.
    #[serde(default)]
    pub check: CheckConfig,
}

/// Token dump options.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TokensConfig {
    /// Output format, `text` or `json`.
    #[serde(default = "default_format")]
    pub format: String,

    /// Whether comments appear in the dump.
    #[serde(default = "default_true")]
    pub include_comments: bool,
}

/// File check options.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CheckConfig {
    /// Number of files scanned in parallel.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: u32,
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

/// Get the default number of parallel jobs based on CPU count.
fn default_parallel_jobs() -> u32 {
    get_num_cpus().try_into().unwrap_or(DEFAULT_THREAD_COUNT)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            tokens: TokensConfig::default(),
            check: CheckConfig::default(),
        }
    }
}

impl Default for TokensConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            include_comments: true,
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            jobs: default_parallel_jobs(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/cfgt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CfgtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CfgtError::Config(format!("Failed to parse configuration: {}", e))
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("cfgt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("cfgt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_config() -> Config {
        Config {
            verbose: true,
            tokens: TokensConfig {
                format: "json".to_string(),
                include_comments: false,
            },
            check: CheckConfig { jobs: 2 },
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert_eq!(config.tokens.format, "text");
        assert!(config.tokens.include_comments);
        assert!(config.check.jobs >= 1);
    }

    #[test]
    fn test_full_config_loads() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("cfgt.toml");
        std::fs::write(
            &config_path,
            "verbose = true\n\n[tokens]\nformat = \"json\"\ninclude_comments = false\n\n[check]\njobs = 2\n",
        )
        .unwrap();

        let loaded_config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded_config, create_test_config());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("cfgt.toml");
        std::fs::write(&config_path, "[tokens]\nformat = \"json\"\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(config.tokens.format, "json");
        assert!(config.tokens.include_comments);
        assert_eq!(config.check, CheckConfig::default());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("cfgt.toml");
        std::fs::write(&config_path, "verbose = \"yes\"").unwrap();

        let result = Config::load_from_path(&config_path);
        assert!(matches!(result, Err(CfgtError::Config(_))));
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/cfgt.toml"));
        assert!(result.is_err());
    }
}
