// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration management.
//!
//! Configuration is read from the nearest `.smartcommit.toml`, found by
//! walking up from the current directory, and includes:
//! - `duration_policy`: `reject` (default) or `zero` for malformed `#time` durations
//! - `format`: default output of `parse`, `text` or `json`
//! - `require_issue_key`: make `check` fail when no issue key is referenced

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use sc_core::{DurationPolicy, ParseOptions};

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".smartcommit.toml";

/// Settings stored in `.smartcommit.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// How malformed `#time` durations are handled.
    pub duration_policy: DurationPolicy,
    /// Default output format for `parse`.
    pub format: OutputFormat,
    /// Whether `check` requires at least one issue key.
    pub require_issue_key: bool,
}

impl Config {
    /// Loads configuration from the given file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            Error::Config(format!("failed to parse {}: {}", path.display(), e))
        })?;
        Ok(config)
    }

    /// Loads `explicit` if given, else the nearest config file above the
    /// current directory, else the defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Config::load(path);
        }

        let cwd = std::env::current_dir()?;
        match find_config_file(&cwd) {
            Some(path) => {
                tracing::debug!("using config {}", path.display());
                Config::load(&path)
            }
            None => Ok(Config::default()),
        }
    }

    /// Parser options, with `lenient` forcing the zero duration policy.
    pub fn parse_options(&self, lenient: bool) -> ParseOptions {
        let policy = if lenient {
            DurationPolicy::Zero
        } else {
            self.duration_policy
        };
        ParseOptions::default().with_duration_policy(policy)
    }
}

/// Find `.smartcommit.toml` by walking up from `start`.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
