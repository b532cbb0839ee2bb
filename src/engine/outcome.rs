// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Evaluation outcome type.

use crate::cli::args::OutputFormat;
use console::style;

/// The universal result shape: the engine's own verdict and every delegated
/// rule's verdict both reduce to this.
///
/// At the host boundary the outcome travels as a `(bool, String)` tuple;
/// [`RuleOutcome::into_tuple`] and [`RuleOutcome::from_tuple`] marshal
/// between the two shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Whether the commit passed.
    pub passed: bool,
    /// Human-readable explanation of the verdict.
    pub message: String,
}

impl RuleOutcome {
    /// A passing outcome.
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
        }
    }

    /// A failing outcome.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }

    /// Marshal to the host wire format.
    pub fn into_tuple(self) -> (bool, String) {
        (self.passed, self.message)
    }

    /// Marshal from the host wire format.
    pub fn from_tuple((passed, message): (bool, String)) -> Self {
        Self { passed, message }
    }

    /// Print the outcome to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(),
        }
    }

    /// Print in text format.
    fn print_text(&self) {
        let status = if self.passed {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };

        if self.message.is_empty() {
            println!("{}", status);
        } else {
            println!("{} {}", status, self.message);
        }
    }

    /// Print in JSON format.
    fn print_json(&self) {
        let json = serde_json::json!({
            "passed": self.passed,
            "message": self.message,
        });

        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
    }
}

impl From<(bool, String)> for RuleOutcome {
    fn from(tuple: (bool, String)) -> Self {
        Self::from_tuple(tuple)
    }
}

impl From<RuleOutcome> for (bool, String) {
    fn from(outcome: RuleOutcome) -> Self {
        outcome.into_tuple()
    }
}
