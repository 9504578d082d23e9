// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use sc_core::{format_duration, Action, IssueKey, ParseResult};

/// Indent used for continuation lines of multi-line text.
const CONTINUATION_INDENT: &str = "    ";

/// Format the issue key line, e.g. `issue keys: ABC-1, DEF-2`.
pub fn format_issue_keys(keys: Option<&[IssueKey]>) -> String {
    match keys {
        Some(keys) if !keys.is_empty() => {
            let joined: Vec<&str> = keys.iter().map(IssueKey::as_str).collect();
            format!("issue keys: {}", joined.join(", "))
        }
        _ => "issue keys: (none)".to_string(),
    }
}

/// Format one action as a single logical line.
///
/// ```text
/// comment: looks good
/// worklog: 1h 30m (5400s) - fixed bug
/// transition: done - closing ABC-1
/// ```
pub fn format_action(action: &Action) -> String {
    match action {
        Action::Comment { text } => format!("comment: {}", indent_continuation(text)),
        Action::Worklog { seconds, text } => with_text(
            format!("worklog: {} ({}s)", format_duration(*seconds), seconds),
            text.as_deref(),
        ),
        Action::Transition { name, text } => {
            with_text(format!("transition: {}", name), text.as_deref())
        }
    }
}

fn with_text(head: String, text: Option<&str>) -> String {
    match text {
        Some(text) => format!("{} - {}", head, indent_continuation(text)),
        None => head,
    }
}

/// Format a full parse result, issue keys first, then one line per command.
pub fn format_result(result: &ParseResult) -> Vec<String> {
    let mut lines = vec![format_issue_keys(result.issue_keys.as_deref())];
    lines.extend(result.commands.iter().map(|c| format_action(&c.action)));
    lines
}

/// Indent every line after the first so multi-line text stays grouped.
fn indent_continuation(text: &str) -> String {
    text.replace('\n', &format!("\n{CONTINUATION_INDENT}"))
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
