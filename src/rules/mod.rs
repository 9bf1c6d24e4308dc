// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! Each section of a commit message may carry one line pattern. Every line
//! of the section is matched against it and all failing lines are reported.

mod engine;
mod ruleset;
mod validator;

pub use engine::{validate, RuleEngine};
pub use ruleset::{rule_key, RuleSet};
pub use validator::{InvalidLine, ValidationResult};
