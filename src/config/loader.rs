// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Input loading: the commit message and the rules document.

use crate::error::{ConfigError, LintError, Result};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

use super::schema::RulesDocument;

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Read a text input, either from a file or from stdin when `path` is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    tracing::debug!("Reading input from: {:?}", path);

    let unreadable = |e: std::io::Error| {
        LintError::Config(ConfigError::Unreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    };

    if path == Path::new(STDIN_PATH) {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(unreadable)?;
        return Ok(content);
    }

    std::fs::read_to_string(path).map_err(unreadable)
}

/// Load the rules document from a specific path.
pub fn load_rules_document(path: &Path) -> Result<RulesDocument> {
    let content = read_input(path)?;
    parse_rules_document(&content)
}

/// Parse the rules document from a JSON string.
pub fn parse_rules_document(content: &str) -> Result<RulesDocument> {
    let value: Value = serde_json::from_str(content).map_err(|e| {
        LintError::Config(ConfigError::MalformedJson {
            message: e.to_string(),
        })
    })?;

    if !value.is_object() {
        return Err(LintError::Config(ConfigError::NotAnObject));
    }

    serde_json::from_value(value).map_err(|e| {
        LintError::Config(ConfigError::MalformedJson {
            message: e.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_empty_document() {
        let doc = parse_rules_document("{}").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_parse_full_document() {
        let json = r#"{
            "subjectPattern": "^(feat|fix|docs)(\\(.+\\))?: .{1,50}$",
            "bodyPattern": "^.{0,72}$",
            "footerPattern": "^(Refs|Closes): #\\d+$"
        }"#;
        let doc = parse_rules_document(json).unwrap();
        assert_eq!(
            doc.subject_pattern.as_deref(),
            Some(r"^(feat|fix|docs)(\(.+\))?: .{1,50}$")
        );
        assert!(doc.body_pattern.is_some());
        assert!(doc.footer_pattern.is_some());
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = parse_rules_document("{ not json").unwrap_err();
        assert!(matches!(
            err,
            LintError::Config(ConfigError::MalformedJson { .. })
        ));
    }

    #[test]
    fn test_parse_non_object() {
        for json in ["[]", "\"^feat\"", "null", "7"] {
            let err = parse_rules_document(json).unwrap_err();
            assert!(matches!(err, LintError::Config(ConfigError::NotAnObject)));
        }
    }

    #[test]
    fn test_parse_non_string_pattern() {
        let err = parse_rules_document(r#"{"bodyPattern": ["a", "b"]}"#).unwrap_err();
        assert!(matches!(
            err,
            LintError::Config(ConfigError::MalformedJson { .. })
        ));
    }

    #[test]
    fn test_load_rules_document_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"subjectPattern": "^feat"}}"#).unwrap();

        let doc = load_rules_document(file.path()).unwrap();
        assert_eq!(doc.subject_pattern.as_deref(), Some("^feat"));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("COMMIT_EDITMSG");

        let err = read_input(&missing).unwrap_err();
        match err {
            LintError::Config(ConfigError::Unreadable { path, .. }) => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }
}
