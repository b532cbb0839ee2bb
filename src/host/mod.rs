// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Host framework boundary.
//!
//! A linting framework consumes this crate as a plugin: an object exposing a
//! `rules` map, with each rule invoked as `(commit, condition, options)` and
//! returning a `(passed, message)` tuple. The structured [`RuleOutcome`] is
//! marshalled to that wire shape here and nowhere else.
//!
//! [`RuleOutcome`]: crate::engine::RuleOutcome

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::commit::CommitRecord;
use crate::engine::{DelegationEngine, EngineOptions, EvaluationCondition};
use crate::providers::ProviderRegistry;

/// The fixed rule name hosts look this engine up under.
pub const RULE_NAME: &str = "ignore-for-authors";

/// A host-callable rule: tuple-shaped outcomes, never panics.
pub type HostRule =
    Box<dyn Fn(&CommitRecord, EvaluationCondition, &Value) -> (bool, String) + Send + Sync>;

/// The plugin object handed to a host framework.
pub struct HostPlugin {
    /// Rules this plugin exposes, by name.
    pub rules: HashMap<String, HostRule>,
}

impl HostPlugin {
    /// Look up an exposed rule by name.
    pub fn rule(&self, name: &str) -> Option<&HostRule> {
        self.rules.get(name)
    }
}

/// Build the plugin surface around a provider registry.
///
/// The host's options value is parsed leniently here; a malformed value is
/// reported as a failing tuple rather than an error, matching the propagation
/// policy of the engine itself.
pub fn plugin(registry: Arc<ProviderRegistry>) -> HostPlugin {
    let engine = DelegationEngine::new(registry);

    let rule: HostRule = Box::new(move |commit, condition, options| {
        // `never` disables the rule before the options value is even parsed:
        // it must succeed regardless of how invalid the configuration is.
        if condition == EvaluationCondition::Never {
            return (true, String::new());
        }
        let options = match EngineOptions::from_value(options) {
            Ok(options) => options,
            Err(e) => return (false, format!("Invalid configuration for {}: {}", RULE_NAME, e)),
        };
        engine.evaluate(commit, condition, &options).into_tuple()
    });

    let mut rules = HashMap::new();
    rules.insert(RULE_NAME.to_string(), rule);
    HostPlugin { rules }
}
