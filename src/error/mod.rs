// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for cklint.
//!
//! Every failure class is terminal: configuration problems, structural
//! violations of the commit message and rule mismatches all end the run
//! with a non-zero exit status.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cklint operations.
#[derive(Error, Debug)]
pub enum LintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Commit structure errors
    #[error("Structural error: {0}")]
    Structure(#[from] StructuralError),

    // Rule mismatches
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required argument: {name}")]
    MissingArgument { name: String },

    #[error("Failed to read {path}: {message}")]
    Unreadable { path: PathBuf, message: String },

    #[error("Rules cannot be read from stdin")]
    RulesFromStdin,

    #[error("Failed to parse rules document: {message}")]
    MalformedJson { message: String },

    #[error("Rules document must be a JSON object")]
    NotAnObject,

    #[error("Invalid pattern for '{key}': {message}")]
    InvalidPattern { key: String, message: String },
}

/// Violations of the subject / blank line / body / footer grammar.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralError {
    #[error("Commit message is empty")]
    EmptyMessage,

    #[error("Commit subject is empty")]
    EmptySubject,

    #[error("Subject and body must be separated by a blank line")]
    MissingBodySeparator,
}

/// Rule mismatch errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{count} line(s) do not match the configured rules")]
    InvalidLines { count: usize },
}

/// Result type alias for cklint operations.
pub type Result<T> = std::result::Result<T, LintError>;
