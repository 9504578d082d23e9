// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Commit message parsing entry point.
//!
//! The message is split at its first directive. Issue keys are read from the
//! text before it, then each directive is classified and tagged with those
//! keys.
//!
//! ```rust,ignore
//! let result = sc_core::parse("ABC-1 Fix login #time 1h 30m #done")?;
//! assert_eq!(result.commands.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::command::{classify, Action, Command};
use crate::directive::{split_directives, split_message};
use crate::duration::DurationPolicy;
use crate::error::Result;
use crate::issue_key::{extract_issue_keys, IssueKey};

/// Knobs for [`parse_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// How malformed `#time` durations are handled.
    pub duration_policy: DurationPolicy,
}

impl ParseOptions {
    /// Sets the duration policy (builder pattern).
    pub fn with_duration_policy(mut self, duration_policy: DurationPolicy) -> Self {
        self.duration_policy = duration_policy;
        self
    }
}

/// Everything extracted from one commit message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Issue keys found before the first directive, or `None` if there are none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_keys: Option<Vec<IssueKey>>,
    /// Directives in source order.
    pub commands: Vec<Command>,
}

impl ParseResult {
    /// Returns true if the message had neither issue keys nor directives.
    pub fn is_empty(&self) -> bool {
        self.issue_keys.is_none() && self.commands.is_empty()
    }

    /// Returns true if at least one issue key was referenced.
    pub fn has_issue_keys(&self) -> bool {
        self.issue_keys.as_ref().is_some_and(|keys| !keys.is_empty())
    }

    /// Total seconds logged by all `#time` directives.
    pub fn total_seconds(&self) -> u64 {
        self.commands
            .iter()
            .filter_map(|command| match command.action {
                Action::Worklog { seconds, .. } => Some(seconds),
                _ => None,
            })
            .fold(0, u64::saturating_add)
    }
}

/// Parse a commit message with default options.
///
/// # Errors
///
/// Returns [`crate::Error::MalformedDuration`] (or a sibling duration error)
/// when a `#time` directive carries a duration that cannot be converted.
pub fn parse(message: &str) -> Result<ParseResult> {
    parse_with(message, &ParseOptions::default())
}

/// Parse a commit message.
///
/// # Errors
///
/// Fails only on malformed `#time` durations, and never under
/// [`DurationPolicy::Zero`].
pub fn parse_with(message: &str, options: &ParseOptions) -> Result<ParseResult> {
    let (prefix, directives) = split_message(message);

    let issue_keys = extract_issue_keys(prefix);
    tracing::debug!(
        count = issue_keys.as_ref().map_or(0, Vec::len),
        "extracted issue keys"
    );

    let segments = directives.map(split_directives).unwrap_or_default();
    let commands = segments
        .into_iter()
        .map(|segment| {
            classify(segment, options.duration_policy).map(|action| Command {
                issue_keys: issue_keys.clone(),
                action,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        commands = commands.len(),
        policy = %options.duration_policy,
        "parsed commit message"
    );

    Ok(ParseResult {
        issue_keys,
        commands,
    })
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
