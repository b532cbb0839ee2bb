// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the lintgate application.
//!
//! This module defines all error types used throughout the application,
//! with proper error categorization and context propagation.
//!
//! The delegation engine itself never surfaces these errors to its caller:
//! evaluation problems are folded into a failing [`RuleOutcome`]. The types
//! here carry failures of the surrounding tooling (configuration files, git
//! access, provider loading).
//!
//! [`RuleOutcome`]: crate::engine::RuleOutcome

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for lintgate operations.
#[derive(Error, Debug)]
pub enum LintgateError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Provider errors
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // A checked commit did not pass
    #[error("Commit rejected: {message}")]
    Rejected { message: String },

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },
}

/// Provider-resolution errors.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not found: {name}")]
    NotFound { name: String },

    #[error("Failed to load provider: {name} - {message}")]
    LoadFailed { name: String, message: String },
}

/// Result type alias for lintgate operations.
pub type Result<T> = std::result::Result<T, LintgateError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LintgateError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/config"),
        };
        assert!(err.to_string().contains("/path/to/config"));
    }

    #[test]
    fn test_provider_error_display() {
        let err = ProviderError::NotFound {
            name: "commitlint-rules".to_string(),
        };
        assert!(err.to_string().contains("commitlint-rules"));

        let err = ProviderError::LoadFailed {
            name: "commitlint-rules".to_string(),
            message: "bad manifest".to_string(),
        };
        assert!(err.to_string().contains("bad manifest"));
    }

    #[test]
    fn test_lintgate_error_from_config_error() {
        let config_err = ConfigError::InvalidValue {
            key: "bypass_patterns".to_string(),
            message: "expected an array".to_string(),
        };
        let err: LintgateError = config_err.into();
        assert!(err.to_string().contains("bypass_patterns"));
    }

    #[test]
    fn test_result_ext_context() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing file",
        ));
        let err = result.context("reading message").unwrap_err();
        assert!(err.to_string().contains("reading message"));
        assert!(err.to_string().contains("missing file"));
    }
}
