// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// lintgate - Conditional rule delegation for commit linting
///
/// Bypass or conditionally enforce commit rules based on who authored the
/// commit.
#[derive(Parser, Debug)]
#[command(name = "lintgate")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Conditional rule delegation for commit linting", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to check if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Check a commit message (default command)
    Check(CheckArgs),

    /// Initialize lintgate configuration
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Commit reference to check
    #[arg(default_value = "HEAD")]
    pub target: String,

    /// Check this message instead of a commit
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    /// Read the message from a file (e.g. .git/COMMIT_EDITMSG)
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Check if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Check(CheckArgs::default()))
    }
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            target: "HEAD".to_string(),
            message: None,
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check() {
        let args = Cli::parse_from(["lintgate", "check", "HEAD~1"]);
        if let Some(Commands::Check(check_args)) = args.command {
            assert_eq!(check_args.target, "HEAD~1");
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_parse_check_with_message() {
        let args = Cli::parse_from(["lintgate", "check", "-m", "fix: a thing"]);
        if let Some(Commands::Check(check_args)) = args.command {
            assert_eq!(check_args.message.as_deref(), Some("fix: a thing"));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_parse_init() {
        let args = Cli::parse_from(["lintgate", "init", "--force"]);
        assert!(matches!(args.command, Some(Commands::Init(InitArgs { force: true }))));
    }

    #[test]
    fn test_global_flags() {
        let args = Cli::parse_from(["lintgate", "--debug", "--format", "json", "check"]);
        assert!(args.debug);
        assert_eq!(args.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_default_command() {
        let args = Cli::parse_from(["lintgate"]);
        assert!(args.command.is_none());
        assert!(matches!(args.effective_command(), Commands::Check(_)));
    }
}
