//! Configuration module for the pasct CLI.
//!
//! This module handles loading, saving, and discovering `pasct.toml`.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PasctError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "pasct.toml";

/// How the token report is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One `<lexeme, KIND>` line per token, then the unrecognized-character summary
    #[default]
    Text,
    /// A JSON document with tokens, unrecognized characters and diagnostics
    Json,
}

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Report settings for the `lex` command.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Report options for the `lex` command.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    /// Report format used when `--format` is not given.
    #[serde(default)]
    pub format: ReportFormat,

    /// Append an end-of-input line after the last token.
    #[serde(default)]
    pub show_end_of_input: bool,

    /// File the report is also written to when `--output` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/pasct/`
    /// 3. The platform configuration directory
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
            return Err(PasctError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| PasctError::file(path, e))?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            PasctError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| PasctError::file(parent, e))?;
            }
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            PasctError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content).map_err(|e| PasctError::file(path, e))?;
        Ok(())
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("pasct").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("pasct").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
