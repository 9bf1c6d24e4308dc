// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::{CommitSections, Section};
use crate::error::Result;

use super::ruleset::RuleSet;
use super::validator::{InvalidLine, ValidationResult};

/// Validate segmented commit sections against a rule set.
///
/// Every failing line is collected before returning; an empty rule set
/// yields a skipped (but passing) result.
pub fn validate(sections: &CommitSections, rules: &RuleSet) -> ValidationResult {
    if rules.is_empty() {
        tracing::debug!("No rules configured, skipping validation");
        return ValidationResult::skipped();
    }

    let mut result = ValidationResult::default();

    for section in Section::ALL {
        let Some(pattern) = rules.pattern(section) else {
            continue;
        };

        let lines = sections.lines(section);
        tracing::debug!("Checking {} line(s) of {} against {}", lines.len(), section, pattern);

        for line in lines {
            // Blank footer lines, including the leading separator, are exempt.
            if section == Section::Footer && line.is_empty() {
                continue;
            }
            if !pattern.is_match(line) {
                result.invalid_lines.push(InvalidLine {
                    section,
                    line: line.clone(),
                });
            }
        }
    }

    result
}

/// Rule engine for validating commit messages.
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    rules: RuleSet,
}

impl RuleEngine {
    /// Create a new rule engine with the given rules.
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Validate already segmented sections.
    pub fn validate(&self, sections: &CommitSections) -> ValidationResult {
        validate(sections, &self.rules)
    }

    /// Segment and validate a raw commit message.
    pub fn validate_string(&self, message: &str) -> Result<ValidationResult> {
        let sections = CommitSections::parse(message)?;
        Ok(self.validate(&sections))
    }
}
