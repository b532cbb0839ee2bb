// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Engine options and the shared evaluation vocabulary.
//!
//! Options arrive either from lintgate's own TOML configuration or as a plain
//! JSON value from a host framework's config loader. Field names are
//! `snake_case` with serde aliases for the camelCase spellings hosts tend to
//! produce. Bypass-pattern entries are kept as raw values on purpose: entry
//! validation is an evaluation-time concern reported through the outcome, not
//! a deserialization failure.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, LintgateError, Result};

/// When a rule applies.
///
/// `Never` is the host framework's convention for disabling a rule entirely:
/// the engine reports success with an empty message without inspecting the
/// commit at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationCondition {
    #[default]
    Always,
    Never,
}

/// How bypass patterns are matched against the commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BypassMode {
    /// A pattern matches if it occurs anywhere in the raw message text.
    #[default]
    Substring,
    /// A pattern matches if it is a substring of any extracted
    /// `Signed-off-by:` trailer value.
    Trailer,
}

/// Configuration recognized by the delegation engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Patterns tested under `bypass_mode`; a match skips enforcement.
    /// An empty or absent list means no bypass is possible.
    #[serde(alias = "bypassPatterns")]
    pub bypass_patterns: Option<Vec<Value>>,

    /// Matching mode for `bypass_patterns`.
    #[serde(alias = "bypassMode")]
    pub bypass_mode: BypassMode,

    /// Rules invoked, in order, when no bypass pattern matched. Kept as a
    /// raw value: a non-array here means "nothing to enforce", not an error.
    #[serde(alias = "rulesToEnforce")]
    pub rules_to_enforce: Option<Value>,
}

impl EngineOptions {
    /// Parse options from a plain value, as supplied by a host framework.
    ///
    /// Null means defaults. Anything other than an object or null is a
    /// configuration error.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(_) => serde_json::from_value(value.clone()).map_err(|e| {
                LintgateError::Config(ConfigError::InvalidValue {
                    key: "options".to_string(),
                    message: e.to_string(),
                })
            }),
            other => Err(LintgateError::Config(ConfigError::InvalidValue {
                key: "options".to_string(),
                message: format!("expected an object, found: {}", other),
            })),
        }
    }
}

/// One entry of `rules_to_enforce`: which provider to load, which rule within
/// it to invoke, and the opaque option value to pass it.
#[derive(Debug, Clone, PartialEq)]
pub struct DelegatedRuleSpec {
    pub source: String,
    pub rule: String,
    pub options: Value,
}

impl DelegatedRuleSpec {
    pub fn new(source: impl Into<String>, rule: impl Into<String>, options: Value) -> Self {
        Self {
            source: source.into(),
            rule: rule.into(),
            options,
        }
    }

    /// Parse a spec from a raw list entry. `None` means the entry is
    /// malformed (not an object, or source/rule missing or non-string),
    /// which is fatal to the whole evaluation.
    pub fn from_value(value: &Value) -> Option<Self> {
        let entry = value.as_object()?;
        let source = string_field(entry, &["source", "sourceName", "source_name"])?;
        let rule = string_field(entry, &["rule", "ruleName", "rule_name"])?;
        let options = entry.get("options").cloned().unwrap_or(Value::Null);

        Some(Self {
            source: source.to_string(),
            rule: rule.to_string(),
            options,
        })
    }
}

fn string_field<'a>(
    entry: &'a serde_json::Map<String, Value>,
    names: &[&str],
) -> Option<&'a str> {
    names.iter().find_map(|name| entry.get(*name)).and_then(Value::as_str)
}
