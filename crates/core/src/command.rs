// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Directive commands and their classification.
//!
//! Each directive segment becomes one [`Action`]:
//!
//! - `#comment <text>` posts a comment
//! - `#time <duration> [text]` logs work
//! - `#<anything else> [text]` requests a workflow transition

use serde::{Deserialize, Serialize};

use crate::directive::Segment;
use crate::duration::{parse_duration, split_duration_prefix, DurationPolicy};
use crate::error::Result;
use crate::issue_key::IssueKey;

const COMMENT_TOKEN: &str = "#comment";
const TIME_TOKEN: &str = "#time";

/// What a single directive asks the issue tracker to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// Add a comment. The text may be empty but is always present.
    Comment { text: String },
    /// Log work against the issue.
    Worklog {
        seconds: u64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
    /// Move the issue to the named workflow state.
    Transition {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
}

impl Action {
    /// Returns the kind name used in serialized output.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Comment { .. } => "comment",
            Action::Worklog { .. } => "worklog",
            Action::Transition { .. } => "transition",
        }
    }

    /// Returns the free text attached to the action, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Action::Comment { text } => Some(text.as_str()),
            Action::Worklog { text, .. } | Action::Transition { text, .. } => text.as_deref(),
        }
    }
}

/// A parsed directive, tagged with the issue keys of its message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Issue keys referenced before the first directive; identical for every
    /// command of one message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_keys: Option<Vec<IssueKey>>,
    #[serde(flatten)]
    pub action: Action,
}

/// Classify one trimmed directive segment.
///
/// # Errors
///
/// Only `#time` can fail, when its duration is malformed and `policy` is
/// [`DurationPolicy::Reject`].
pub fn classify(segment: &str, policy: DurationPolicy) -> Result<Action> {
    let Segment {
        token,
        remaining,
        has_argument,
    } = Segment::new(segment);

    let action = match token {
        COMMENT_TOKEN => Action::Comment {
            text: remaining.to_string(),
        },
        TIME_TOKEN => worklog(remaining, policy)?,
        _ => Action::Transition {
            name: token.strip_prefix('#').unwrap_or(token).to_string(),
            text: has_argument.then(|| remaining.to_string()),
        },
    };

    tracing::trace!(token, kind = action.kind(), "classified directive");
    Ok(action)
}

fn worklog(remaining: &str, policy: DurationPolicy) -> Result<Action> {
    let (seconds, text) = match split_duration_prefix(remaining) {
        Some((duration, rest)) => (parse_duration(duration.trim(), policy)?, rest),
        None => (0, remaining),
    };

    Ok(Action::Worklog {
        seconds,
        text: (!text.trim().is_empty()).then(|| text.to_string()),
    })
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
