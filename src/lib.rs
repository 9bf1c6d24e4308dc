// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cklint - Commit Message Linter
//!
//! Validates a commit message against user-supplied regular expressions,
//! one per section of the conventional subject / body / footer layout.
//!
//! # Features
//!
//! - **Segmenter**: Splits a message into subject, body and footer, rejecting
//!   empty messages and bodies glued to the subject
//! - **Rule Engine**: Matches every line of a section against its pattern and
//!   reports all offending lines at once
//! - **Hook Friendly**: Two file arguments and a meaningful exit status
//!
//! # Example
//!
//! ```
//! use cklint::commit::CommitSections;
//! use cklint::config::parse_rules_document;
//! use cklint::rules::{validate, RuleSet};
//!
//! let document = parse_rules_document(r#"{"subjectPattern": "^(feat|fix): "}"#).unwrap();
//! let rules = RuleSet::from_document(&document).unwrap();
//!
//! let sections = CommitSections::parse("fix: handle CRLF input\n\nLines ending in \\r\\n.").unwrap();
//! assert!(validate(&sections, &rules).is_valid());
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod rules;

// Re-exports for convenience
pub use commit::{segment, CommitSections, Section};
pub use error::{LintError, Result};
pub use rules::{validate, RuleSet, ValidationResult};

/// Version information embedded at compile time.
pub mod version {
    use lazy_static::lazy_static;

    lazy_static! {
        /// Version string shown by `--version`.
        static ref VERSION_STRING: String = version_string();
    }

    /// The current version of cklint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }

    /// Get the version string with build metadata, for clap.
    pub fn long_version() -> &'static str {
        VERSION_STRING.as_str()
    }

}
