// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Embeds git metadata for `cklint::version`.

use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=build.rs");

    // Falls back to the bare package version outside a git checkout.
    EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .emit()?;
    Ok(())
}
