// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Splitting a commit message into its prefix and its directives.
//!
//! A directive starts at a `#` immediately followed by an ASCII letter or a
//! hyphen (`#comment`, `#time`, `#in-progress`). `#123` is not a directive.
//! Everything before the first directive is free text; everything from it
//! onward is cut into one segment per directive, each segment keeping its own
//! leading `#name`.

use regex::Regex;
use std::sync::LazyLock;

// Only the first name character is needed to locate a marker; the name
// itself is never consumed by the split.
static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"#[A-Za-z-]") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

/// Split `message` at its first directive marker.
///
/// Returns `(prefix, directives)`. `directives` is `None` when the message
/// contains no directive, in which case `prefix` is the whole message.
pub fn split_message(message: &str) -> (&str, Option<&str>) {
    match MARKER_RE.find(message) {
        Some(m) => (&message[..m.start()], Some(&message[m.start()..])),
        None => (message, None),
    }
}

/// Cut directive text into trimmed segments, one per marker, in source order.
///
/// Blank pieces are dropped, so empty input yields no segments.
pub fn split_directives(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;

    for m in MARKER_RE.find_iter(text) {
        if m.start() > start {
            segments.push(&text[start..m.start()]);
        }
        start = m.start();
    }
    segments.push(&text[start..]);

    segments
        .into_iter()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// A directive segment broken into its command token and argument text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Text up to the first whitespace character, e.g. `#time`.
    pub token: &'a str,
    /// Text after the first whitespace character; empty when there is none.
    pub remaining: &'a str,
    /// Whether anything followed the bare token.
    pub has_argument: bool,
}

impl<'a> Segment<'a> {
    /// Break a trimmed segment into token and remaining text.
    pub fn new(segment: &'a str) -> Self {
        match segment.char_indices().find(|(_, c)| c.is_whitespace()) {
            Some((idx, ws)) => Segment {
                token: &segment[..idx],
                remaining: &segment[idx + ws.len_utf8()..],
                has_argument: true,
            },
            None => Segment {
                token: segment,
                remaining: "",
                has_argument: false,
            },
        }
    }
}

#[cfg(test)]
#[path = "directive_tests.rs"]
mod tests;
