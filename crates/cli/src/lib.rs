// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! smartcommit - Command line front end for smart commit parsing.
//!
//! Wraps [`sc_core`] for use from git hooks and scripts: read a commit
//! message, then print its issue keys and `#` directives as text or JSON, or
//! validate it.
//!
//! # Main Components
//!
//! - [`Cli`] - Argument parsing
//! - [`Config`] - Settings from `.smartcommit.toml`
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use clap::Parser;
//!
//! let cli = smartcommit::Cli::parse_from(["smartcommit", "keys", "ABC-1 fix"]);
//! smartcommit::run(cli)?;
//! ```

mod cli;
mod commands;
mod display;
mod input;
mod schema;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, MessageArgs, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process
/// execution.
pub fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Parse {
            input,
            output,
            lenient,
        } => {
            let config = Config::resolve(config_path)?;
            commands::parse::run(&config, &input, output, lenient)
        }
        Command::Check {
            input,
            require_issue_key,
        } => {
            let config = Config::resolve(config_path)?;
            commands::check::run(&config, &input, require_issue_key)
        }
        // keys and schema never read the config file.
        Command::Keys { input } => commands::keys::run(&input),
        Command::Schema => commands::schema::run(),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
