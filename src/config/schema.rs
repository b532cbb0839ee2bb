// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the configuration structure loaded from lintgate.toml.

use serde::{Deserialize, Serialize};

use crate::engine::{EngineOptions, EvaluationCondition};

/// The main configuration structure for lintgate.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LintgateConfig {
    /// When the gate applies. `never` disables it entirely.
    pub condition: EvaluationCondition,

    /// Bypass patterns and the delegated rule list.
    pub delegation: EngineOptions,
}

impl LintgateConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BypassMode;

    #[test]
    fn test_default_config() {
        let config = LintgateConfig::default();
        assert_eq!(config.condition, EvaluationCondition::Always);
        assert!(config.delegation.bypass_patterns.is_none());
        assert_eq!(config.delegation.bypass_mode, BypassMode::Substring);
        assert!(config.delegation.rules_to_enforce.is_none());
    }
}
