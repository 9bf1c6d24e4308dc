// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command execution.

use crate::commit::CommitSections;
use crate::config::{load_rules_document, read_input, RulesDocument, STDIN_PATH};
use crate::error::{ConfigError, LintError, Result, ValidationError};
use crate::rules::{RuleEngine, RuleSet};
use console::style;
use std::path::{Path, PathBuf};
use std::thread;

use super::args::Cli;

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    tracing::debug!("Running cklint {}", crate::version::version_string());

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let message_path = required(cli.message, "MESSAGE")?;
    let rules_path = required(cli.rules, "RULES")?;
    // Only the message may come from stdin.
    if rules_path == Path::new(STDIN_PATH) {
        return Err(LintError::Config(ConfigError::RulesFromStdin));
    }

    let (message, document) = read_inputs(&message_path, &rules_path)?;

    let sections = CommitSections::parse(&message)?;
    let rules = RuleSet::from_document(&document)?;
    for key in rules.ignored_keys() {
        eprintln!(
            "{} {}",
            style("⚠").yellow().bold(),
            style(format!("Ignoring unknown rule '{}'", key)).yellow()
        );
    }
    let engine = RuleEngine::new(rules);

    let result = engine.validate(&sections);
    result.print(cli.format);

    tracing::debug!("Validation finished: {}", result.summary());

    if result.is_valid() {
        Ok(())
    } else {
        Err(LintError::Validation(ValidationError::InvalidLines {
            count: result.invalid_lines.len(),
        }))
    }
}

fn required(path: Option<PathBuf>, name: &str) -> Result<PathBuf> {
    path.ok_or_else(|| {
        LintError::Config(ConfigError::MissingArgument {
            name: name.to_string(),
        })
    })
}

/// Read the commit message and the rules document in parallel.
///
/// Both inputs are required; the first failure wins.
fn read_inputs(message_path: &Path, rules_path: &Path) -> Result<(String, RulesDocument)> {
    thread::scope(|scope| -> Result<(String, RulesDocument)> {
        let message = scope.spawn(|| read_input(message_path));
        let document = scope.spawn(|| load_rules_document(rules_path));

        let message = message.join().map_err(|_| reader_panicked(message_path))??;
        let document = document.join().map_err(|_| reader_panicked(rules_path))??;
        Ok((message, document))
    })
}

fn reader_panicked(path: &Path) -> LintError {
    LintError::WithContext {
        context: "read".to_string(),
        message: format!("Reader thread panicked while reading {}", path.display()),
    }
}
