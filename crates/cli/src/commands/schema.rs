// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs the JSON Schema of `parse --output json`.

use crate::error::Result;
use crate::schema::ParseOutputJson;
use schemars::schema_for;

/// Run the schema command.
pub fn run() -> Result<()> {
    let schema = schema_for!(ParseOutputJson);
    let json = serde_json::to_string_pretty(&schema)?;
    println!("{}", json);
    Ok(())
}
