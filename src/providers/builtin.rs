// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Builtin capability-provider.
//!
//! Ships a handful of basic commit rules under the source name `builtin` so
//! the CLI works without third-party packages. The engine treats this
//! provider exactly like any external one: rules are resolved through the
//! registry and invoked with the standard calling convention.

use serde_json::Value;

use crate::commit::CommitRecord;
use crate::engine::EvaluationCondition;

use super::module::{capability, ProviderModule, RuleCatalog, RuleTuple};

/// Source name the builtin provider is registered under.
pub const SOURCE_NAME: &str = "builtin";

/// Build the builtin provider module.
///
/// Exposed through the plugin-wrapper catalog shape, the most common
/// packaging convention among rule providers.
pub fn module() -> ProviderModule {
    let mut catalog = RuleCatalog::new();
    catalog.insert(
        "header-max-length".to_string(),
        capability(|commit, condition, options| Ok(header_max_length(commit, condition, options))),
    );
    catalog.insert(
        "header-not-empty".to_string(),
        capability(|commit, condition, _options| Ok(header_not_empty(commit, condition))),
    );
    catalog.insert(
        "body-leading-blank".to_string(),
        capability(|commit, condition, _options| Ok(body_leading_blank(commit, condition))),
    );
    ProviderModule::plugin(catalog)
}

/// Default header length limit when the rule gets no options.
const DEFAULT_HEADER_LIMIT: u64 = 72;

fn header_of(commit: &CommitRecord) -> Option<String> {
    commit
        .header()
        .map(str::to_string)
        .or_else(|| commit.raw().map(|raw| raw.lines().next().unwrap_or("").to_string()))
}

fn header_max_length(
    commit: &CommitRecord,
    condition: EvaluationCondition,
    options: &Value,
) -> RuleTuple {
    if condition == EvaluationCondition::Never {
        return (true, String::new());
    }

    let limit = options.as_u64().unwrap_or(DEFAULT_HEADER_LIMIT) as usize;
    let header = match header_of(commit) {
        Some(header) => header,
        None => return (false, "Commit header is not available.".to_string()),
    };

    if header.chars().count() > limit {
        (
            false,
            format!(
                "Header is too long: {} characters (max: {})",
                header.chars().count(),
                limit
            ),
        )
    } else {
        (true, String::new())
    }
}

fn header_not_empty(commit: &CommitRecord, condition: EvaluationCondition) -> RuleTuple {
    if condition == EvaluationCondition::Never {
        return (true, String::new());
    }

    match header_of(commit) {
        Some(header) if !header.trim().is_empty() => (true, String::new()),
        _ => (false, "Commit header must not be empty".to_string()),
    }
}

fn body_leading_blank(commit: &CommitRecord, condition: EvaluationCondition) -> RuleTuple {
    if condition == EvaluationCondition::Never {
        return (true, String::new());
    }

    let raw = match commit.raw() {
        Some(raw) => raw,
        None => return (false, "Raw commit message is not available.".to_string()),
    };

    let mut lines = raw.lines();
    let _header = lines.next();
    match lines.next() {
        Some(line) if !line.trim().is_empty() => (
            false,
            "Body must be separated from the header by a blank line".to_string(),
        ),
        _ => (true, String::new()),
    }
}
