// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sc-core: Smart commit message parsing.
//!
//! Extracts issue keys (`ABC-123`) and `#` directives from a commit message:
//!
//! ```text
//! ABC-123 Fix login redirect
//!
//! #comment Redirect now honours the return URL
//! #time 1h 30m debugging
//! #resolve
//! ```
//!
//! The result is pure data; applying it to an issue tracker is up to the
//! caller.

pub mod command;
pub mod directive;
pub mod duration;
pub mod error;
pub mod issue_key;
pub mod parser;

pub use command::{classify, Action, Command};
pub use duration::{format_duration, parse_duration, DurationPolicy};
pub use error::{Error, Result};
pub use issue_key::{extract_issue_keys, IssueKey};
pub use parser::{parse, parse_with, ParseOptions, ParseResult};
