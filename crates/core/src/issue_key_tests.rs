// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn keys(text: &str) -> Option<Vec<String>> {
    extract_issue_keys(text).map(|keys| keys.iter().map(|k| k.to_string()).collect())
}

#[parameterized(
    sentence = { "Fix ABC-123 and DEF-45.", &["ABC-123", "DEF-45"] },
    comma_separated = { "FOO-1,BAR-2", &["FOO-1", "BAR-2"] },
    whole_text = { "ABC-1", &["ABC-1"] },
    parenthesised = { "(ABC-1)", &["ABC-1"] },
    bracketed = { "[JIRA-42] fix login", &["JIRA-42"] },
    digits_in_project = { "A1-9 and B2C-10", &["A1-9", "B2C-10"] },
    underscore_project = { "MY_PROJ-7", &["MY_PROJ-7"] },
    underscore_boundary = { "x_ABC-1_", &["ABC-1"] },
    hyphen_boundary = { "-ABC-1-", &["ABC-1"] },
    newline_boundary = { "line\nABC-1\nmore", &["ABC-1"] },
    tab_boundary = { "\tABC-1\t", &["ABC-1"] },
    duplicates_kept = { "ABC-1 ABC-1", &["ABC-1", "ABC-1"] },
    unicode_neighbours = { "é ABC-1 ü", &["ABC-1"] },
)]
fn extracts_keys(text: &str, expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    assert_eq!(keys(text), Some(expected));
}

#[parameterized(
    empty = { "" },
    plain_text = { "just a plain message" },
    lowercase = { "fix abc-123" },
    mixed_case = { "fix Abc-123" },
    single_letter_project = { "A-1" },
    letter_before = { "fooFOO-1" },
    digit_before = { "1ABC-1" },
    letter_after = { "ABC-1x" },
    no_number = { "ABC-" },
    no_hyphen = { "ABC123" },
    unicode_letter_before = { "éABC-1" },
)]
fn rejects_non_keys(text: &str) {
    assert_eq!(keys(text), None);
}

#[test]
fn absent_rather_than_empty() {
    assert!(extract_issue_keys("nothing here").is_none());
}

#[test]
fn boundary_failure_retries_inside_candidate() {
    // "xAB-1" fails its leading boundary; nothing inside it can match either,
    // but the scan must continue to the real key afterwards.
    assert_eq!(keys("xAB-1 CD-2"), Some(vec!["CD-2".to_string()]));
}

#[test]
fn trailing_hyphen_chain_matches_first_key_only() {
    // "AB-1" is followed by '-', a boundary; "1-2" cannot start a key.
    assert_eq!(keys("AB-1-2"), Some(vec!["AB-1".to_string()]));
}

#[test]
fn shared_boundary_between_adjacent_keys() {
    assert_eq!(
        keys("AB-1 CD-2/EF-3"),
        Some(vec!["AB-1".to_string(), "CD-2".to_string(), "EF-3".to_string()])
    );
}

#[test]
fn issue_key_parts() {
    let key: IssueKey = "PROJ_X-1234".parse().unwrap();
    assert_eq!(key.as_str(), "PROJ_X-1234");
    assert_eq!(key.project(), "PROJ_X");
    assert_eq!(key.number(), Some(1234));
}

#[test]
fn issue_key_number_overflow_is_none() {
    let key: IssueKey = "AB-99999999999999999999999".parse().unwrap();
    assert_eq!(key.number(), None);
}

#[parameterized(
    lowercase = { "ab-1" },
    trailing_text = { "AB-1 " },
    leading_text = { " AB-1" },
    empty = { "" },
    single_letter = { "A-1" },
)]
fn issue_key_from_str_invalid(input: &str) {
    let err = input.parse::<IssueKey>().unwrap_err();
    assert_eq!(err, Error::InvalidIssueKey(input.to_string()));
}

#[test]
fn issue_key_serializes_as_string() {
    let key: IssueKey = "AB-1".parse().unwrap();
    assert_eq!(serde_json::to_string(&key).unwrap(), "\"AB-1\"");
}

#[test]
fn issue_key_deserializes_valid_key() {
    let key: IssueKey = serde_json::from_str("\"PROJ-7\"").unwrap();
    assert_eq!(key.as_str(), "PROJ-7");
}

#[parameterized(
    lowercase = { "\"abc\"" },
    trailing_text = { "\"AB-1 fix\"" },
    empty = { "\"\"" },
)]
fn issue_key_deserialize_rejects_bad_shape(json: &str) {
    let err = serde_json::from_str::<IssueKey>(json).unwrap_err();
    assert!(err.to_string().contains("invalid issue key"));
}
