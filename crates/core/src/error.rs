// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for sc-core operations.

use thiserror::Error;

/// All possible errors that can occur while parsing a commit message.
///
/// Only `#time` directives can fail; everything else degrades to "no match".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("empty duration\n  hint: #time expects durations like 1w 2d 4h 30m")]
    EmptyDuration,

    #[error("malformed duration '{atom}'\n  hint: each part is a number followed by w, d, h or m, separated by spaces (e.g. '1h 30m')")]
    MalformedDuration { atom: String },

    #[error("duration '{atom}' is too large")]
    DurationOverflow { atom: String },

    #[error("invalid issue key: '{0}'\n  hint: issue keys look like PROJ-123")]
    InvalidIssueKey(String),
}

/// A specialized Result type for sc-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
