// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! lintgate - Conditional Rule Delegation for Commit Linting
//!
//! A rule-delegation layer for commit-message linting: bypass or
//! conditionally enforce externally-defined rules based on who authored a
//! commit.
//!
//! # How it works
//!
//! - **Bypass check**: patterns matched against the raw commit message or
//!   its `Signed-off-by:` trailers decide whether a commit is exempt
//! - **Rule delegation**: non-exempt commits run through a configured list
//!   of rules, resolved by name through a provider registry at runtime
//! - **First failure wins**: rules run in declared order and the first
//!   failing rule decides the verdict
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use lintgate::commit::CommitRecord;
//! use lintgate::engine::{DelegationEngine, EngineOptions, EvaluationCondition};
//! use lintgate::providers::ProviderRegistry;
//! use serde_json::json;
//!
//! let registry = Arc::new(ProviderRegistry::with_builtin());
//! let engine = DelegationEngine::new(registry);
//!
//! let options = EngineOptions {
//!     bypass_patterns: Some(vec![json!("dependabot[bot]")]),
//!     ..Default::default()
//! };
//!
//! let commit = CommitRecord::from_message("fix(deps): update by dependabot[bot]");
//! let outcome = engine.evaluate(&commit, EvaluationCondition::Always, &options);
//! assert!(outcome.passed);
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod engine;
pub mod error;
pub mod git;
pub mod host;
pub mod providers;

// Re-exports for convenience
pub use config::LintgateConfig;
pub use engine::{DelegationEngine, EngineOptions, EvaluationCondition, RuleOutcome};
pub use error::{LintgateError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of lintgate.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
