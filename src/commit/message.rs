// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message segmentation.

use crate::error::StructuralError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;

lazy_static! {
    /// Line boundaries, either Unix or Windows style.
    static ref LINE_BREAK: Regex = Regex::new(r"\r?\n").unwrap();
}

/// One of the three sections of a commit message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Subject,
    Body,
    Footer,
}

impl Section {
    /// All sections, in message order.
    pub const ALL: [Section; 3] = [Section::Subject, Section::Body, Section::Footer];

    /// Get the section name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Subject => "subject",
            Section::Body => "body",
            Section::Footer => "footer",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A commit message split into subject, body and footer.
///
/// The footer, when present, starts with the blank line that ended the body.
/// An empty footer means the body ran to the end of the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSections {
    /// The mandatory first line. Never blank.
    pub subject: String,
    /// Lines after the blank separator, up to the next blank line.
    pub body: Vec<String>,
    /// Everything from the first blank line after the body.
    pub footer: Vec<String>,
}

impl CommitSections {
    /// Split a raw commit message into its sections.
    pub fn parse(text: &str) -> Result<Self, StructuralError> {
        segment(text)
    }

    /// Get the lines of a section, in order.
    pub fn lines(&self, section: Section) -> &[String] {
        match section {
            Section::Subject => std::slice::from_ref(&self.subject),
            Section::Body => &self.body,
            Section::Footer => &self.footer,
        }
    }
}

/// Split `text` into lines, turning whitespace-only lines into empty strings.
///
/// This is the only place blankness is decided; everything downstream
/// compares against the empty string.
pub fn normalize_lines(text: &str) -> Vec<String> {
    LINE_BREAK
        .split(text)
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                line.to_string()
            }
        })
        .collect()
}

/// Split a raw commit message into subject, body and footer.
pub fn segment(text: &str) -> Result<CommitSections, StructuralError> {
    if text.trim().is_empty() {
        return Err(StructuralError::EmptyMessage);
    }

    let mut lines = normalize_lines(text).into_iter();

    let subject = match lines.next() {
        Some(line) if !line.is_empty() => line,
        _ => return Err(StructuralError::EmptySubject),
    };

    // A second line with content is body text glued to the subject.
    let separator = lines.next();
    if separator.as_deref().is_some_and(|line| !line.is_empty()) {
        return Err(StructuralError::MissingBodySeparator);
    }

    let rest: Vec<String> = lines.collect();
    let Some(body_start) = rest.iter().position(|line| !line.is_empty()) else {
        tracing::debug!("Message has a subject only");
        return Ok(CommitSections {
            subject,
            body: Vec::new(),
            footer: Vec::new(),
        });
    };

    let mut body = Vec::new();
    let mut footer = Vec::new();
    for line in rest.into_iter().skip(body_start) {
        if footer.is_empty() && !line.is_empty() {
            body.push(line);
        } else {
            footer.push(line);
        }
    }

    tracing::debug!(
        "Segmented message: {} body line(s), {} footer line(s)",
        body.len(),
        footer.len()
    );

    Ok(CommitSections {
        subject,
        body,
        footer,
    })
}
