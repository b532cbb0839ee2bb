// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Provides the commit-message lookups the CLI needs.

mod repo;

pub use repo::{get_commit_message, is_git_repo, Repository};
