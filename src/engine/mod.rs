// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The rule-delegation engine.
//!
//! Decides whether a commit qualifies for bypass, resolves configured rules
//! to callable capabilities through the provider registry, invokes them in
//! order, and folds their results into a single [`RuleOutcome`].

mod bypass;
mod evaluate;
mod options;
mod outcome;

pub use evaluate::DelegationEngine;
pub use options::{BypassMode, DelegatedRuleSpec, EngineOptions, EvaluationCondition};
pub use outcome::RuleOutcome;
