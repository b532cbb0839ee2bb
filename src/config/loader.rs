// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{ConfigError, LintgateError, Result};
use std::path::{Path, PathBuf};

use super::schema::LintgateConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["lintgate.toml", ".lintgate.toml", ".config/lintgate.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // Try parent directory
        if !current.pop() {
            break;
        }
    }

    // Also check user's home directory
    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }
    }

    // Check XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("lintgate").join("config.toml");
        if config_path.exists() {
            return Some(config_path);
        }
    }

    None
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<LintgateConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(LintgateConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<LintgateConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(LintgateError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        LintgateError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<LintgateConfig> {
    toml::from_str(content).map_err(|e| {
        LintgateError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}
