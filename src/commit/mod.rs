// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure: subject, body and footer.

mod message;

pub use message::{normalize_lines, segment, CommitSections, Section};
