// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    empty_duration = { Error::EmptyDuration, "empty duration" },
    malformed = { Error::MalformedDuration { atom: "1h30m".into() }, "1h30m" },
    overflow = { Error::DurationOverflow { atom: "99999999999999w".into() }, "too large" },
    issue_key = { Error::InvalidIssueKey("abc-1".into()), "abc-1" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn malformed_duration_hint_mentions_units() {
    let msg = Error::MalformedDuration { atom: "3x".into() }.to_string();
    assert!(msg.contains("hint:"));
    assert!(msg.contains("w, d, h or m"));
}
