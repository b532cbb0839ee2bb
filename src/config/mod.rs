// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for lintgate.
//!
//! This module handles loading and parsing configuration from files and
//! defaults.

pub mod default;
mod loader;
mod schema;

pub use default::{default_config, starter_toml};
pub use loader::{find_config_file, load_config, load_config_from, parse_config};
pub use schema::LintgateConfig;
