// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reading the commit message from an argument, a file, or stdin.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::cli::MessageArgs;
use crate::error::{Error, Result};

/// Read the commit message selected by `args`.
///
/// Precedence: positional text, then `--file` (`-` meaning stdin), then stdin.
pub fn read_message(args: &MessageArgs) -> Result<String> {
    if let Some(message) = &args.message {
        return Ok(message.clone());
    }

    match args.file.as_deref() {
        Some(path) if path != Path::new("-") => read_file(path),
        _ => read_stdin(),
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::ReadMessage {
        path: path.display().to_string(),
        source,
    })
}

fn read_stdin() -> Result<String> {
    let mut message = String::new();
    std::io::stdin().read_to_string(&mut message)?;
    Ok(message)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
