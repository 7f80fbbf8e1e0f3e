// SPDX-License-Identifier: MIT OR Apache-2.0

use anyhow::{Context, Result};
use std::io::BufRead;

/// Get the values to convert.
///
/// Values given on the command line win. Without any, each non-blank line
/// of `reader` is one value, with surrounding whitespace removed.
pub fn collect_values<R: BufRead>(args: &[String], reader: R) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }

    let mut values = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read input line {}", index + 1))?;
        let value = line.trim();
        if !value.is_empty() {
            values.push(value.to_owned());
        }
    }
    log::debug!("read {} values from stdin", values.len());
    Ok(values)
}
