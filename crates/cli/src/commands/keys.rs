// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use sc_core::directive::split_message;
use sc_core::{extract_issue_keys, IssueKey};

use crate::cli::MessageArgs;
use crate::error::Result;
use crate::input::read_message;

/// Run the keys command.
///
/// Never fails on message content: `#time` durations are not evaluated.
pub fn run(input: &MessageArgs) -> Result<()> {
    let message = read_message(input)?;
    for key in issue_keys(&message) {
        println!("{}", key);
    }
    Ok(())
}

/// Issue keys referenced before the first directive of `message`.
pub(crate) fn issue_keys(message: &str) -> Vec<IssueKey> {
    let (prefix, _) = split_message(message);
    extract_issue_keys(prefix).unwrap_or_default()
}

#[cfg(test)]
#[path = "keys_tests.rs"]
mod tests;
