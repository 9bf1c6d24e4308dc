// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command-line interface for cklint.

pub mod args;
mod dispatch;

pub use args::{Cli, OutputFormat};
pub use dispatch::run;
