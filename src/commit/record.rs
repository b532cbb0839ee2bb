// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The parsed-commit record consumed by the delegation engine.
//!
//! The host framework parses commit messages before the engine runs; lintgate
//! only ever reads the `raw` and `body` fields. Everything else in the record
//! is carried opaquely and handed through to delegated rules untouched, which
//! is why the record wraps a [`serde_json::Value`] rather than a fixed struct.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A parsed commit as supplied by the host framework.
///
/// Immutable for the duration of an evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitRecord(Value);

impl CommitRecord {
    /// Wrap a host-supplied commit value as-is.
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Build a record from a raw commit message.
    ///
    /// This is the minimal parse the CLI needs: the full text becomes `raw`,
    /// the first line becomes `header`, and everything after the first blank
    /// line becomes `body` (or null when there is none). Structural parsing
    /// of type/scope/subject is the host framework's job, not lintgate's.
    pub fn from_message(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let header = raw.lines().next().unwrap_or("").to_string();
        let body = raw
            .split_once("\n\n")
            .map(|(_, rest)| rest.trim_end().to_string())
            .filter(|rest| !rest.is_empty());

        Self(json!({
            "raw": raw,
            "header": header,
            "body": body,
        }))
    }

    /// The full original commit message, if present and a string.
    pub fn raw(&self) -> Option<&str> {
        self.0.get("raw").and_then(Value::as_str)
    }

    /// The commit body, if present and a string.
    pub fn body(&self) -> Option<&str> {
        self.0.get("body").and_then(Value::as_str)
    }

    /// The first line of the message, if present and a string.
    pub fn header(&self) -> Option<&str> {
        self.0.get("header").and_then(Value::as_str)
    }

    /// Opaque access to any other parsed field, for delegated rules.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// The underlying host value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}
