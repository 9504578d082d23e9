// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue key extraction.
//!
//! An issue key is an external tracker identifier such as `PROJ-123`: an
//! uppercase letter, one or more uppercase letters, digits or underscores, a
//! hyphen, then digits. A key only counts when it stands on its own, i.e. the
//! characters on either side are whitespace, ASCII punctuation, or the edge of
//! the text. Those boundary characters are inspected but never consumed, so
//! `FOO-1,BAR-2` yields both keys.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{Error, Result};

// The regex crate has no lookaround; boundaries are checked by hand around
// each candidate match.
static ISSUE_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"[A-Z][A-Z0-9_]+-[0-9]+") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// An issue identifier referenced from a commit message (e.g. `ABC-123`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IssueKey(String);

impl IssueKey {
    /// Returns the key as written in the message.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the project part of the key (`ABC` for `ABC-123`).
    pub fn project(&self) -> &str {
        self.0.split_once('-').map_or(self.0.as_str(), |(p, _)| p)
    }

    /// Returns the numeric part of the key, or `None` if it does not fit a `u64`.
    pub fn number(&self) -> Option<u64> {
        self.0.split_once('-').and_then(|(_, n)| n.parse().ok())
    }
}

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for IssueKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match ISSUE_KEY_RE.find(s) {
            Some(m) if m.start() == 0 && m.end() == s.len() => Ok(IssueKey(s.to_string())),
            _ => Err(Error::InvalidIssueKey(s.to_string())),
        }
    }
}

impl TryFrom<String> for IssueKey {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<IssueKey> for String {
    fn from(key: IssueKey) -> Self {
        key.0
    }
}

impl AsRef<str> for IssueKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Extract every issue key from `text`, in order of appearance.
///
/// Duplicates are kept. Returns `None` (rather than an empty vector) when the
/// text references no issue at all.
pub fn extract_issue_keys(text: &str) -> Option<Vec<IssueKey>> {
    let mut keys = Vec::new();
    let mut pos = 0;

    while let Some(m) = ISSUE_KEY_RE.find_at(text, pos) {
        if is_boundary_before(text, m.start()) && is_boundary_after(text, m.end()) {
            keys.push(IssueKey(m.as_str().to_string()));
            pos = m.end();
        } else {
            // Candidates start with an ASCII letter, so one byte on is still a
            // char boundary.
            pos = m.start() + 1;
        }
    }

    if keys.is_empty() {
        None
    } else {
        Some(keys)
    }
}

/// Whitespace or one of `!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~`.
fn is_boundary_char(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_punctuation()
}

fn is_boundary_before(text: &str, idx: usize) -> bool {
    text[..idx].chars().next_back().is_none_or(is_boundary_char)
}

fn is_boundary_after(text: &str, idx: usize) -> bool {
    text[idx..].chars().next().is_none_or(is_boundary_char)
}

#[cfg(test)]
#[path = "issue_key_tests.rs"]
mod tests;
