// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Capability-provider system.
//!
//! A provider is an external package exposing a catalog of named rules. The
//! set of providers to delegate to is determined entirely by end-user
//! configuration, so resolution is name-indirected through a registry at
//! evaluation time rather than wired up at build time.

pub mod builtin;
mod module;
mod registry;

pub use module::{capability, CapabilityError, DefaultExport, ProviderModule, RuleCapability, RuleCatalog, RuleTuple};
pub use registry::{ProviderRegistry, ProviderSource};
