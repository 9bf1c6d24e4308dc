// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for cklint.
//!
//! This module reads the two inputs of a run (the commit message and the
//! JSON rules document) and deserializes the rules document.

mod loader;
mod schema;

pub use loader::{load_rules_document, parse_rules_document, read_input, STDIN_PATH};
pub use schema::RulesDocument;
