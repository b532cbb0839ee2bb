// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The delegation engine's evaluation loop.

use std::sync::Arc;

use serde_json::Value;

use crate::commit::CommitRecord;
use crate::error::LintgateError;
use crate::providers::ProviderRegistry;

use super::bypass;
use super::options::{BypassMode, DelegatedRuleSpec, EngineOptions, EvaluationCondition};
use super::outcome::RuleOutcome;

/// Evaluates a commit against the configured bypass patterns and delegated
/// rules.
///
/// Evaluation never panics and never returns an error: every failure kind
/// (malformed configuration, provider resolution, a delegated rule saying
/// no) is folded into a failing [`RuleOutcome`] at the point of detection.
#[derive(Debug, Clone)]
pub struct DelegationEngine {
    registry: Arc<ProviderRegistry>,
}

impl DelegationEngine {
    /// Create an engine resolving providers through the given registry.
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this engine resolves providers through.
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Evaluate a commit.
    ///
    /// Order of business: the `never` short-circuit, raw-message validation,
    /// the bypass check, then the delegated rules in declared order with a
    /// short-circuit on the first failure. Delegated rules can be expensive
    /// to resolve and may have side effects; stopping at the first failure
    /// reports one actionable problem and skips work that no longer matters.
    pub fn evaluate(
        &self,
        commit: &CommitRecord,
        condition: EvaluationCondition,
        options: &EngineOptions,
    ) -> RuleOutcome {
        if condition == EvaluationCondition::Never {
            return RuleOutcome::pass("");
        }

        let raw = match commit.raw() {
            Some(raw) => raw,
            None => {
                return RuleOutcome::fail("Raw commit message is not available or is invalid.")
            }
        };

        if let Some(patterns) = &options.bypass_patterns {
            let mut entries: Vec<&str> = Vec::with_capacity(patterns.len());
            for entry in patterns {
                match entry.as_str() {
                    Some(pattern) => entries.push(pattern),
                    None => {
                        return RuleOutcome::fail("bypass_patterns must be an array of strings.")
                    }
                }
            }

            if let Some(pattern) = bypass::first_match(raw, &entries, options.bypass_mode) {
                tracing::debug!("Bypass pattern matched: {:?}", pattern);
                let message = match options.bypass_mode {
                    BypassMode::Substring => format!(
                        "Commit message matched bypass pattern {:?}; rules_to_enforce bypassed.",
                        pattern
                    ),
                    BypassMode::Trailer => format!(
                        "Signed-off-by trailer matched bypass pattern {:?}; rules_to_enforce bypassed.",
                        pattern
                    ),
                };
                return RuleOutcome::pass(message);
            }
        }

        let specs = match &options.rules_to_enforce {
            Some(Value::Array(list)) if !list.is_empty() => list,
            // Absent, not a list, or empty: nothing to enforce for this
            // commit. That is success, not an error.
            _ => return RuleOutcome::pass("No rules configured in rules_to_enforce; rule passes."),
        };

        for (index, entry) in specs.iter().enumerate() {
            let spec = match DelegatedRuleSpec::from_value(entry) {
                Some(spec) => spec,
                None => {
                    return RuleOutcome::fail(format!(
                        "rules_to_enforce[{}] must provide string \"source\" and \"rule\" fields.",
                        index
                    ))
                }
            };

            tracing::debug!("Delegating to {}/{}", spec.source, spec.rule);

            let module = match self.registry.resolve(&spec.source) {
                Ok(module) => module,
                Err(e) => {
                    let detail = match &e {
                        LintgateError::Provider(provider_error) => provider_error.to_string(),
                        other => other.to_string(),
                    };
                    return RuleOutcome::fail(format!(
                        "Could not load rule provider {:?}: {}",
                        spec.source, detail
                    ));
                }
            };

            let rule = match module.resolve(&spec.rule) {
                Some(rule) => rule,
                None => {
                    return RuleOutcome::fail(format!(
                        "Rule {:?} was not found in provider {:?}.",
                        spec.rule, spec.source
                    ))
                }
            };

            // An enforced rule always runs with the `always` condition,
            // whatever condition this engine itself was invoked with.
            let (passed, message) = match rule.invoke(commit, EvaluationCondition::Always, &spec.options)
            {
                Ok(result) => result,
                Err(e) => {
                    return RuleOutcome::fail(format!(
                        "Rule {:?} from provider {:?} failed: {}",
                        spec.rule, spec.source, e
                    ))
                }
            };

            if !passed {
                return RuleOutcome::fail(format!(
                    "[via {}/{}] {}",
                    spec.source, spec.rule, message
                ));
            }
        }

        RuleOutcome::pass("All configured rules_to_enforce passed for this author.")
    }
}
