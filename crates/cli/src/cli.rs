// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

const QUICKSTART_HELP: &str = "\
Examples:
  smartcommit parse \"ABC-1 Fix login #time 1h 30m #resolve\"
  smartcommit parse -f .git/COMMIT_EDITMSG --output json
  git log -1 --format=%B | smartcommit keys
  smartcommit check --require-issue-key -f \"$1\"   (in .git/hooks/commit-msg)";

#[derive(Parser, Debug)]
#[command(name = "smartcommit", version)]
#[command(about = "Extract issue keys and #directives from commit messages")]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    /// Path to a config file (default: nearest .smartcommit.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log parser decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a commit message and print its issue keys and directives
    Parse {
        #[command(flatten)]
        input: MessageArgs,

        /// Output format (default from config, else text)
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,

        /// Count malformed #time durations as zero instead of failing
        #[arg(long)]
        lenient: bool,
    },

    /// Print the issue keys a commit message references, one per line
    Keys {
        #[command(flatten)]
        input: MessageArgs,
    },

    /// Validate a commit message, e.g. from a commit-msg hook
    Check {
        #[command(flatten)]
        input: MessageArgs,

        /// Fail when the message references no issue key
        #[arg(long)]
        require_issue_key: bool,
    },

    /// Print the JSON Schema of `parse --output json`
    Schema,
}

/// Where to read the commit message from.
#[derive(Args, Debug, Clone, Default)]
pub struct MessageArgs {
    /// Commit message text (reads --file or stdin when omitted)
    pub message: Option<String>,

    /// Read the commit message from a file ("-" for stdin)
    #[arg(short, long, value_name = "PATH", conflicts_with = "message")]
    pub file: Option<PathBuf>,
}
