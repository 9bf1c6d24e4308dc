// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rules document schema.
//!
//! Defines the JSON shape accepted as the rules file.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Raw rules document, as written by the user.
///
/// ```json
/// { "subjectPattern": "^(feat|fix): .+$", "footerPattern": "^[A-Z][a-z-]+: .+$" }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RulesDocument {
    /// Pattern every subject must match.
    #[serde(rename = "subjectPattern", default)]
    pub subject_pattern: Option<String>,

    /// Pattern every body line must match.
    #[serde(rename = "bodyPattern", default)]
    pub body_pattern: Option<String>,

    /// Pattern every non-blank footer line must match.
    #[serde(rename = "footerPattern", default)]
    pub footer_pattern: Option<String>,

    /// Keys cklint does not understand.
    #[serde(flatten)]
    pub unknown: BTreeMap<String, Value>,
}

impl RulesDocument {
    /// Check whether the document sets no pattern at all.
    pub fn is_empty(&self) -> bool {
        self.subject_pattern.is_none()
            && self.body_pattern.is_none()
            && self.footer_pattern.is_none()
    }
}
