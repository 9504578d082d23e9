// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Worklog durations.
//!
//! A duration is one or more whitespace separated atoms, each a number
//! followed by a unit:
//!
//! ```text
//! 1w      one week   (604800s)
//! 2d      two days   (172800s)
//! 4h      four hours (14400s)
//! 30m     thirty minutes (1800s)
//! 1h 30m  ninety minutes (5400s)
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::IntErrorKind;
use std::sync::LazyLock;

use crate::error::{Error, Result};

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;
pub const SECONDS_PER_WEEK: u64 = 7 * SECONDS_PER_DAY;

static DURATION_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"^\s*(?:[0-9]+[wdhm]\s*)+\s*") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// What to do with a duration atom that cannot be converted to seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationPolicy {
    /// Fail with [`Error::MalformedDuration`] (or a sibling variant).
    #[default]
    Reject,
    /// Count the atom as zero seconds and keep going.
    Zero,
}

impl DurationPolicy {
    /// Returns the string representation used in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationPolicy::Reject => "reject",
            DurationPolicy::Zero => "zero",
        }
    }
}

impl fmt::Display for DurationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Split a leading duration off `text`.
///
/// Leading whitespace is skipped. Returns `(duration, rest)` where `duration`
/// includes the whitespace around it, or `None` if the first word of `text` is
/// not a duration atom.
pub fn split_duration_prefix(text: &str) -> Option<(&str, &str)> {
    DURATION_PREFIX_RE
        .find(text)
        .map(|m| (m.as_str(), &text[m.end()..]))
}

/// Parse a duration like `"1h 30m"` into seconds.
///
/// # Errors
///
/// Under [`DurationPolicy::Reject`], returns [`Error::EmptyDuration`] for
/// blank input, [`Error::MalformedDuration`] naming the first atom that is not
/// `<number><unit>`, and [`Error::DurationOverflow`] when the total does not
/// fit a `u64`. Under [`DurationPolicy::Zero`] this never fails.
pub fn parse_duration(text: &str, policy: DurationPolicy) -> Result<u64> {
    let mut atoms = text.split_whitespace().peekable();
    if atoms.peek().is_none() {
        return match policy {
            DurationPolicy::Reject => Err(Error::EmptyDuration),
            DurationPolicy::Zero => Ok(0),
        };
    }

    let mut total: u64 = 0;
    for atom in atoms {
        let seconds = match atom_seconds(atom) {
            Ok(seconds) => seconds,
            Err(e) if policy == DurationPolicy::Zero => {
                tracing::debug!(atom, error = %e, "counting malformed duration atom as zero");
                0
            }
            Err(e) => return Err(e),
        };
        total = match total.checked_add(seconds) {
            Some(sum) => sum,
            None if policy == DurationPolicy::Zero => u64::MAX,
            None => {
                return Err(Error::DurationOverflow {
                    atom: atom.to_string(),
                })
            }
        };
    }

    Ok(total)
}

/// Convert a single atom such as `"30m"` to seconds.
fn atom_seconds(atom: &str) -> Result<u64> {
    let (num_str, unit) = split_number_unit(atom)?;

    let factor = unit_seconds(unit).ok_or_else(|| malformed(atom))?;
    let num: u64 = num_str.parse().map_err(|e: std::num::ParseIntError| {
        if *e.kind() == IntErrorKind::PosOverflow {
            overflow(atom)
        } else {
            malformed(atom)
        }
    })?;

    num.checked_mul(factor).ok_or_else(|| overflow(atom))
}

/// Split an atom into its number and its trailing single-character unit.
fn split_number_unit(atom: &str) -> Result<(&str, char)> {
    match atom.char_indices().next_back() {
        Some((idx, unit)) => Ok((&atom[..idx], unit)),
        None => Err(malformed(atom)),
    }
}

fn unit_seconds(unit: char) -> Option<u64> {
    match unit {
        'w' => Some(SECONDS_PER_WEEK),
        'd' => Some(SECONDS_PER_DAY),
        'h' => Some(SECONDS_PER_HOUR),
        'm' => Some(SECONDS_PER_MINUTE),
        _ => None,
    }
}

fn malformed(atom: &str) -> Error {
    Error::MalformedDuration {
        atom: atom.to_string(),
    }
}

fn overflow(atom: &str) -> Error {
    Error::DurationOverflow {
        atom: atom.to_string(),
    }
}

/// Render seconds back into atoms, largest unit first (`5400` → `"1h 30m"`).
///
/// Sub-minute remainders are shown as seconds; zero renders as `"0m"`.
pub fn format_duration(seconds: u64) -> String {
    const UNITS: [(u64, char); 4] = [
        (SECONDS_PER_WEEK, 'w'),
        (SECONDS_PER_DAY, 'd'),
        (SECONDS_PER_HOUR, 'h'),
        (SECONDS_PER_MINUTE, 'm'),
    ];

    let mut parts = Vec::new();
    let mut rest = seconds;
    for (size, unit) in UNITS {
        let count = rest / size;
        if count > 0 {
            parts.push(format!("{count}{unit}"));
            rest %= size;
        }
    }
    if rest > 0 {
        parts.push(format!("{rest}s"));
    }

    if parts.is_empty() {
        "0m".to_string()
    } else {
        parts.join(" ")
    }
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
