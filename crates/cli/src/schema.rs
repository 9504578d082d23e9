// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for JSON output structures.
//!
//! These mirror the serialized shape of [`sc_core::ParseResult`] so the
//! parser crate does not need a schemars dependency. `parse --output json`
//! serializes through these types, keeping the published schema and the
//! actual output in lockstep.

use schemars::JsonSchema;
use serde::Serialize;

/// JSON output of `smartcommit parse`.
#[derive(JsonSchema, Serialize)]
pub struct ParseOutputJson {
    /// Issue keys referenced before the first directive. Omitted when none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_keys: Option<Vec<String>>,
    /// Directives in the order they appear in the message.
    pub commands: Vec<CommandJson>,
}

/// A single directive, tagged with the issue keys of its message.
#[derive(JsonSchema, Serialize)]
pub struct CommandJson {
    /// Same value as the top-level `issue_keys`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_keys: Option<Vec<String>>,
    #[serde(flatten)]
    pub action: ActionJson,
}

/// What the directive asks the tracker to do.
#[derive(JsonSchema, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionJson {
    /// `#comment <text>`
    Comment {
        /// Comment body; empty for a bare `#comment`.
        text: String,
    },
    /// `#time <duration> [text]`
    Worklog {
        /// Logged time in seconds.
        seconds: u64,
        /// Work description following the duration.
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
    /// `#<state> [text]`
    Transition {
        /// Target workflow state, without the leading `#`.
        name: String,
        /// Text following the state name.
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
}

fn key_strings(keys: Option<&[sc_core::IssueKey]>) -> Option<Vec<String>> {
    keys.map(|keys| keys.iter().map(|k| k.to_string()).collect())
}

impl From<&sc_core::Action> for ActionJson {
    fn from(action: &sc_core::Action) -> Self {
        match action {
            sc_core::Action::Comment { text } => ActionJson::Comment { text: text.clone() },
            sc_core::Action::Worklog { seconds, text } => ActionJson::Worklog {
                seconds: *seconds,
                text: text.clone(),
            },
            sc_core::Action::Transition { name, text } => ActionJson::Transition {
                name: name.clone(),
                text: text.clone(),
            },
        }
    }
}

impl From<&sc_core::Command> for CommandJson {
    fn from(command: &sc_core::Command) -> Self {
        CommandJson {
            issue_keys: key_strings(command.issue_keys.as_deref()),
            action: (&command.action).into(),
        }
    }
}

impl From<&sc_core::ParseResult> for ParseOutputJson {
    fn from(result: &sc_core::ParseResult) -> Self {
        ParseOutputJson {
            issue_keys: key_strings(result.issue_keys.as_deref()),
            commands: result.commands.iter().map(CommandJson::from).collect(),
        }
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
