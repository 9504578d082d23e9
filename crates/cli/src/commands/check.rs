// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Commit message validation for `commit-msg` hooks.

use crate::cli::MessageArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::input::read_message;

/// Run the check command. Prints nothing on success.
pub fn run(config: &Config, input: &MessageArgs, require_issue_key: bool) -> Result<()> {
    let message = read_message(input)?;
    check(&message, config, require_issue_key || config.require_issue_key)
}

/// Validate `message`: every `#time` duration must parse, and when
/// `require_issue_key` is set the message must reference an issue.
pub(crate) fn check(message: &str, config: &Config, require_issue_key: bool) -> Result<()> {
    let result = sc_core::parse_with(message, &config.parse_options(false))?;

    if require_issue_key && !result.has_issue_keys() {
        return Err(Error::MissingIssueKey);
    }

    tracing::debug!(
        commands = result.commands.len(),
        seconds = result.total_seconds(),
        "commit message ok"
    );
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
