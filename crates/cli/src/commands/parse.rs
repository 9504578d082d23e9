// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::cli::{MessageArgs, OutputFormat};
use crate::config::Config;
use crate::display::format_result;
use crate::error::Result;
use crate::input::read_message;
use crate::schema::ParseOutputJson;

/// Run the parse command.
pub fn run(
    config: &Config,
    input: &MessageArgs,
    output: Option<OutputFormat>,
    lenient: bool,
) -> Result<()> {
    let message = read_message(input)?;
    let format = output.unwrap_or(config.format);
    println!("{}", render(&message, config, format, lenient)?);
    Ok(())
}

/// Parse `message` and render it in `format`.
pub(crate) fn render(
    message: &str,
    config: &Config,
    format: OutputFormat,
    lenient: bool,
) -> Result<String> {
    let result = sc_core::parse_with(message, &config.parse_options(lenient))?;

    match format {
        OutputFormat::Text => Ok(format_result(&result).join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ParseOutputJson::from(
            &result,
        ))?),
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
