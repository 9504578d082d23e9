// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn sc() -> Command {
    cargo_bin_cmd!("smartcommit")
}

/// Command running inside an empty temp directory, so no stray
/// `.smartcommit.toml` from the surrounding checkout is picked up.
pub fn sc_in(temp: &TempDir) -> Command {
    let mut cmd = sc();
    cmd.current_dir(temp.path());
    cmd
}

/// Write `.smartcommit.toml` into `temp`.
pub fn write_config(temp: &TempDir, content: &str) {
    std::fs::write(temp.path().join(".smartcommit.toml"), content).unwrap();
}

/// Write a commit message file into `temp` and return its path.
pub fn write_message(temp: &TempDir, content: &str) -> std::path::PathBuf {
    let path = temp.path().join("COMMIT_EDITMSG");
    std::fs::write(&path, content).unwrap();
    path
}
