// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Provider module shapes and rule capabilities.
//!
//! Third-party rule packages do not agree on how they expose their catalog:
//! some nest it under a default-export wrapper's rules table, some make the
//! default export the table itself, and some export a top-level rules table.
//! [`ProviderModule::catalog`] accommodates all three, trying each shape in a
//! fixed order.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::commit::CommitRecord;
use crate::engine::EvaluationCondition;

/// Error type delegated rules may fail with.
pub type CapabilityError = Box<dyn std::error::Error + Send + Sync>;

/// The wire-format outcome a delegated rule returns: pass/fail plus message.
pub type RuleTuple = (bool, String);

/// A callable rule capability.
///
/// Invoked as `(commit, condition, options)`; the options value is owned by
/// the target rule and never interpreted by the engine. Implemented for any
/// matching closure, so providers register plain functions.
pub trait RuleCapability: Send + Sync {
    fn invoke(
        &self,
        commit: &CommitRecord,
        condition: EvaluationCondition,
        options: &Value,
    ) -> Result<RuleTuple, CapabilityError>;
}

impl<F> RuleCapability for F
where
    F: Fn(&CommitRecord, EvaluationCondition, &Value) -> Result<RuleTuple, CapabilityError>
        + Send
        + Sync,
{
    fn invoke(
        &self,
        commit: &CommitRecord,
        condition: EvaluationCondition,
        options: &Value,
    ) -> Result<RuleTuple, CapabilityError> {
        self(commit, condition, options)
    }
}

/// Wrap a closure as a shareable [`RuleCapability`].
pub fn capability<F>(f: F) -> Arc<dyn RuleCapability>
where
    F: Fn(&CommitRecord, EvaluationCondition, &Value) -> Result<RuleTuple, CapabilityError>
        + Send
        + Sync
        + 'static,
{
    Arc::new(f)
}

/// A provider's mapping from rule names to capabilities.
pub type RuleCatalog = HashMap<String, Arc<dyn RuleCapability>>;

/// The default export of a provider module.
#[derive(Clone)]
pub enum DefaultExport {
    /// A plugin-style wrapper object that may carry a rules table.
    Wrapper { rules: Option<RuleCatalog> },
    /// The export is the rule table itself.
    Catalog(RuleCatalog),
}

/// A loaded provider module.
///
/// Mirrors the export surface of an installable rule package: an optional
/// default export plus an optional top-level rules table.
#[derive(Clone, Default)]
pub struct ProviderModule {
    default_export: Option<DefaultExport>,
    rules: Option<RuleCatalog>,
}

impl ProviderModule {
    /// A module whose default export is a plugin wrapper carrying `rules`.
    pub fn plugin(rules: RuleCatalog) -> Self {
        Self {
            default_export: Some(DefaultExport::Wrapper { rules: Some(rules) }),
            rules: None,
        }
    }

    /// A module whose default export is the rule table itself.
    pub fn default_catalog(rules: RuleCatalog) -> Self {
        Self {
            default_export: Some(DefaultExport::Catalog(rules)),
            rules: None,
        }
    }

    /// A module exposing a top-level rules table.
    pub fn named_rules(rules: RuleCatalog) -> Self {
        Self {
            default_export: None,
            rules: Some(rules),
        }
    }

    /// Set the default export explicitly (for heterogeneous shapes).
    pub fn with_default_export(mut self, export: DefaultExport) -> Self {
        self.default_export = Some(export);
        self
    }

    /// Set the top-level rules table.
    pub fn with_rules(mut self, rules: RuleCatalog) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Extract the rule catalog, trying each packaging shape in order:
    /// the default-export wrapper's rules table, the default export itself
    /// when it is a table, then the top-level rules table. The first shape
    /// yielding a non-empty table wins.
    pub fn catalog(&self) -> Option<&RuleCatalog> {
        if let Some(DefaultExport::Wrapper { rules: Some(rules) }) = &self.default_export {
            if !rules.is_empty() {
                return Some(rules);
            }
        }
        if let Some(DefaultExport::Catalog(rules)) = &self.default_export {
            if !rules.is_empty() {
                return Some(rules);
            }
        }
        if let Some(rules) = &self.rules {
            if !rules.is_empty() {
                return Some(rules);
            }
        }
        None
    }

    /// Look up a named rule through the catalog.
    pub fn resolve(&self, rule_name: &str) -> Option<&dyn RuleCapability> {
        self.catalog()?.get(rule_name).map(Arc::as_ref)
    }
}

impl std::fmt::Debug for ProviderModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rules: Vec<&str> = self
            .catalog()
            .map(|catalog| catalog.keys().map(String::as_str).collect())
            .unwrap_or_default();
        f.debug_struct("ProviderModule").field("rules", &rules).finish()
    }
}
