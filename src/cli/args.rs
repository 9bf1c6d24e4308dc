// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// cklint - Commit Message Linter
///
/// Checks a commit message against per-section regular expressions.
/// Intended to be run from a commit-msg hook.
#[derive(Parser, Debug, Default)]
#[command(name = "cklint")]
#[command(author = "Eshan Roy")]
#[command(version = crate::version::long_version())]
#[command(about = "Regex-driven commit message linter", long_about = None)]
pub struct Cli {
    /// Path to the commit message file ("-" reads stdin)
    #[arg(value_name = "MESSAGE")]
    pub message: Option<PathBuf>,

    /// Path to the JSON rules file
    #[arg(value_name = "RULES")]
    pub rules: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, value_enum, env = "CKLINT_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parsing() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_paths() {
        let cli = Cli::try_parse_from(["cklint", ".git/COMMIT_EDITMSG", "rules.json"]).unwrap();
        assert_eq!(cli.message, Some(PathBuf::from(".git/COMMIT_EDITMSG")));
        assert_eq!(cli.rules, Some(PathBuf::from("rules.json")));
        assert!(!cli.debug);
    }

    #[test]
    fn test_missing_paths_parse() {
        let cli = Cli::try_parse_from(["cklint"]).unwrap();
        assert!(cli.message.is_none());
        assert!(cli.rules.is_none());
    }

    #[test]
    fn test_format_flag() {
        let cli = Cli::try_parse_from(["cklint", "--format", "json", "msg", "rules.json"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_version_includes_build_metadata() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(crate::version::long_version()));
    }

    #[test]
    fn test_debug_flag() {
        let cli = Cli::try_parse_from(["cklint", "-d", "msg", "rules.json"]).unwrap();
        assert!(cli.debug);
    }
}
