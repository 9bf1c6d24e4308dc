// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use crate::cli::args::OutputFormat;
use crate::commit::Section;
use console::style;
use serde::Serialize;

/// A line that did not match its section's pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidLine {
    /// Section the line belongs to.
    pub section: Section,
    /// The offending line, as written.
    pub line: String,
}

impl InvalidLine {
    /// Format the line for terminal output.
    pub fn format(&self) -> String {
        format!(
            "{} {} {}",
            style("✗").red().bold(),
            style(format!("[{}]", self.section)).red(),
            self.line
        )
    }
}

/// Result of validating a commit message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// No rules were configured, so nothing was checked.
    pub skipped: bool,
    /// Failing lines in subject, body, footer order.
    pub invalid_lines: Vec<InvalidLine>,
}

impl ValidationResult {
    /// Result of a run with no rules configured.
    pub fn skipped() -> Self {
        Self {
            skipped: true,
            invalid_lines: Vec::new(),
        }
    }

    /// Check if the validation passed (no invalid lines).
    pub fn is_valid(&self) -> bool {
        self.invalid_lines.is_empty()
    }

    /// Check if validation was skipped for lack of rules.
    pub fn is_skipped(&self) -> bool {
        self.skipped
    }

    /// Print the result to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => println!("{}", self.render_json()),
            _ => println!("{}", self.render_text()),
        }
    }

    /// Render in text format.
    pub fn render_text(&self) -> String {
        if self.skipped {
            return format!(
                "{} {}",
                style("⚠").yellow().bold(),
                style("No rules configured, skipping validation").yellow()
            );
        }

        if self.is_valid() {
            return format!("{} Commit message is valid", style("✓").green().bold());
        }

        let mut output = format!(
            "{} {}",
            style("✗").red().bold(),
            style("Commit message does not match the configured rules:").red()
        );
        for invalid in &self.invalid_lines {
            output.push_str("\n  ");
            output.push_str(&invalid.format());
        }
        output
    }

    /// Render in JSON format.
    pub fn render_json(&self) -> String {
        let json = serde_json::json!({
            "valid": self.is_valid(),
            "skipped": self.skipped,
            "invalid_lines": self.invalid_lines,
        });

        serde_json::to_string_pretty(&json).unwrap_or_default()
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.skipped {
            "Skipped (no rules)".to_string()
        } else if self.is_valid() {
            "Valid".to_string()
        } else {
            format!("Invalid ({} lines)", self.invalid_lines.len())
        }
    }
}
