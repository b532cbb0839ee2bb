// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::sync::Arc;

use crate::commit::CommitRecord;
use crate::config::LintgateConfig;
use crate::engine::DelegationEngine;
use crate::error::{LintgateError, Result, ResultExt};
use crate::providers::ProviderRegistry;

use super::args::{CheckArgs, Cli, Commands, InitArgs};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        LintgateConfig::load_from(config_path)?
    } else {
        LintgateConfig::load()?
    };

    // Dispatch to the appropriate command handler
    match cli.effective_command() {
        Commands::Check(args) => run_check(&cli, &config, args),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Run the check command.
fn run_check(cli: &Cli, config: &LintgateConfig, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let raw = if let Some(message) = args.message {
        message
    } else if let Some(ref file) = args.file {
        std::fs::read_to_string(file).context("Failed to read message file")?
    } else {
        crate::git::get_commit_message(&args.target)?
    };

    let commit = CommitRecord::from_message(raw);
    let registry = Arc::new(ProviderRegistry::with_builtin());
    let engine = DelegationEngine::new(registry);

    let outcome = engine.evaluate(&commit, config.condition, &config.delegation);
    outcome.print(cli.format);

    if outcome.passed {
        Ok(())
    } else {
        Err(LintgateError::Rejected {
            message: outcome.message,
        })
    }
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);

    let path = std::path::Path::new("lintgate.toml");
    if path.exists() && !args.force {
        return Err(LintgateError::WithContext {
            context: "init".to_string(),
            message: "lintgate.toml already exists (use --force to overwrite)".to_string(),
        });
    }

    std::fs::write(path, crate::config::starter_toml())
        .context("Failed to write lintgate.toml")?;
    println!("✓ Created lintgate.toml");

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("lintgate {}", crate::version::version_string());
    Ok(())
}
