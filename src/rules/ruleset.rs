// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Compiled per-section line patterns.

use crate::commit::Section;
use crate::config::RulesDocument;
use crate::error::ConfigError;
use regex::Regex;

/// Rules document key for a section's pattern.
pub fn rule_key(section: Section) -> &'static str {
    match section {
        Section::Subject => "subjectPattern",
        Section::Body => "bodyPattern",
        Section::Footer => "footerPattern",
    }
}

/// One optional line pattern per section.
///
/// Patterns are applied with `Regex::is_match`, so an unanchored pattern
/// matches anywhere in the line. Use `^` and `$` to match whole lines.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    subject: Option<Regex>,
    body: Option<Regex>,
    footer: Option<Regex>,
    ignored_keys: Vec<String>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pattern for a section.
    pub fn with_pattern(mut self, section: Section, pattern: Regex) -> Self {
        *self.slot_mut(section) = Some(pattern);
        self
    }

    /// Compile the patterns of a rules document.
    ///
    /// Unrecognised keys are dropped and listed in `ignored_keys` for the
    /// caller to report. A pattern that fails to compile fails the whole
    /// document.
    pub fn from_document(document: &RulesDocument) -> Result<Self, ConfigError> {
        let mut rules = Self::new();

        for key in document.unknown.keys() {
            tracing::debug!("Ignoring unknown rule '{}'", key);
            rules.ignored_keys.push(key.clone());
        }

        let sources = [
            (Section::Subject, &document.subject_pattern),
            (Section::Body, &document.body_pattern),
            (Section::Footer, &document.footer_pattern),
        ];

        for (section, source) in sources {
            let Some(source) = source else { continue };
            let pattern = Regex::new(source).map_err(|e| ConfigError::InvalidPattern {
                key: rule_key(section).to_string(),
                message: e.to_string(),
            })?;
            tracing::debug!("Compiled {} pattern: {}", section, source);
            *rules.slot_mut(section) = Some(pattern);
        }

        Ok(rules)
    }

    /// Get the pattern configured for a section.
    pub fn pattern(&self, section: Section) -> Option<&Regex> {
        match section {
            Section::Subject => self.subject.as_ref(),
            Section::Body => self.body.as_ref(),
            Section::Footer => self.footer.as_ref(),
        }
    }

    /// Check whether no section has a pattern.
    pub fn is_empty(&self) -> bool {
        Section::ALL.iter().all(|s| self.pattern(*s).is_none())
    }

    /// Keys of the source document that were not recognised.
    pub fn ignored_keys(&self) -> &[String] {
        &self.ignored_keys
    }

    fn slot_mut(&mut self, section: Section) -> &mut Option<Regex> {
        match section {
            Section::Subject => &mut self.subject,
            Section::Body => &mut self.body,
            Section::Footer => &mut self.footer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_rules_document;

    fn rules_from(json: &str) -> Result<RuleSet, ConfigError> {
        RuleSet::from_document(&parse_rules_document(json).unwrap())
    }

    #[test]
    fn test_empty_document() {
        let rules = rules_from("{}").unwrap();
        assert!(rules.is_empty());
        assert!(rules.ignored_keys().is_empty());
    }

    #[test]
    fn test_known_keys_are_compiled() {
        let rules = rules_from(r#"{"subjectPattern": "^feat", "footerPattern": ":"}"#).unwrap();
        assert!(!rules.is_empty());
        assert!(rules.pattern(Section::Subject).unwrap().is_match("feat: x"));
        assert!(rules.pattern(Section::Body).is_none());
        assert!(rules.pattern(Section::Footer).is_some());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let rules = rules_from(r#"{"typePattern": "x", "subjectPattern": "."}"#).unwrap();
        assert_eq!(rules.ignored_keys(), &["typePattern".to_string()]);
        assert!(rules.pattern(Section::Subject).is_some());
    }

    #[test]
    fn test_only_unknown_keys_is_empty() {
        let rules = rules_from(r#"{"headerPattern": "^x$"}"#).unwrap();
        assert!(rules.is_empty());
        assert_eq!(rules.ignored_keys().len(), 1);
    }

    #[test]
    fn test_malformed_pattern() {
        let err = rules_from(r#"{"bodyPattern": "(unclosed"}"#).unwrap_err();
        match err {
            ConfigError::InvalidPattern { key, .. } => assert_eq!(key, "bodyPattern"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_with_pattern() {
        let rules = RuleSet::new().with_pattern(Section::Body, Regex::new("^-").unwrap());
        assert!(rules.pattern(Section::Body).is_some());
        assert!(rules.pattern(Section::Subject).is_none());
    }

    #[test]
    fn test_rule_keys() {
        let keys: Vec<_> = Section::ALL.iter().map(|s| rule_key(*s)).collect();
        assert_eq!(keys, vec!["subjectPattern", "bodyPattern", "footerPattern"]);
    }
}
