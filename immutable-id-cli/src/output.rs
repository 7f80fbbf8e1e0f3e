// SPDX-License-Identifier: MIT OR Apache-2.0

use anyhow::{anyhow, Error, Result};
use immutable_id::{GuidRecord, ImmutableIdRecord};
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    /// Aligned columns with a header.
    #[default]
    Table,
    /// A JSON array of records.
    Json,
    /// Only the converted values, one per line.
    Value,
}

impl OutputFormat {
    fn all() -> &'static [Self] {
        &[Self::Table, Self::Json, Self::Value]
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Value => "value",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .find(|format| format.as_str() == s)
            .copied()
            .ok_or_else(|| anyhow!("invalid output format: {}", s))
    }
}

/// A conversion result with an input column and a converted column.
pub trait Record: Serialize {
    /// Column titles, input first.
    const HEADER: [&'static str; 2];

    /// Column values, input first.
    fn columns(&self) -> [&str; 2];
}

impl Record for GuidRecord {
    const HEADER: [&'static str; 2] = ["GUID", "ImmutableID"];

    fn columns(&self) -> [&str; 2] {
        [self.guid.as_str(), self.immutable_id.as_str()]
    }
}

impl Record for ImmutableIdRecord {
    const HEADER: [&'static str; 2] = ["ImmutableID", "GUID"];

    fn columns(&self) -> [&str; 2] {
        [self.immutable_id.as_str(), self.guid.as_str()]
    }
}

/// Print `records` to `writer` in the requested format.
pub fn write_records<R: Record, W: Write>(
    writer: &mut W,
    records: &[R],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(writer, records)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, records)?;
            writeln!(writer)?;
        }
        OutputFormat::Value => {
            for record in records {
                writeln!(writer, "{}", record.columns()[1])?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

fn write_table<R: Record, W: Write>(writer: &mut W, records: &[R]) -> Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    // Only the first column is padded.
    let [first, second] = R::HEADER;
    let width = records
        .iter()
        .map(|record| record.columns()[0].chars().count())
        .chain([first.len()])
        .max()
        .unwrap_or_default();

    writeln!(writer, "{first:width$} {second}")?;
    writeln!(
        writer,
        "{:width$} {}",
        "-".repeat(first.len()),
        "-".repeat(second.len())
    )?;
    for record in records {
        let [input, converted] = record.columns();
        writeln!(writer, "{input:width$} {converted}")?;
    }
    Ok(())
}
