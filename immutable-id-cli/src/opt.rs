// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::output::OutputFormat;
use clap::{ArgAction, Parser, Subcommand};
use immutable_id::GuidFormat;
use log::LevelFilter;

// Define some common options so that the doc strings don't have to be
// copy-pasted.

#[derive(Debug, Parser)]
pub struct VerbosityOpt {
    /// Log more details to stderr (-v info, -vv debug, -vvv trace).
    #[clap(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Don't log anything, not even errors.
    #[clap(short, long, action, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl VerbosityOpt {
    pub fn level_filter(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
pub struct InputOpt {
    /// Report and skip invalid values instead of failing before any output.
    #[clap(long, action)]
    pub keep_going: bool,
}

#[derive(Debug, Parser)]
pub struct OutputOpt {
    /// How to print results: table, json or value.
    #[clap(long, action, default_value_t)]
    pub output: OutputFormat,
}

/// Convert between GUIDs and their Base64 ImmutableID form.
#[derive(Debug, Parser)]
#[clap(name = "immutable-id", version)]
pub struct Opt {
    #[clap(flatten)]
    pub verbosity: VerbosityOpt,

    #[clap(subcommand)]
    pub action: Action,
}

#[derive(Debug, Subcommand)]
pub enum Action {
    ToImmutableId(ToImmutableIdOpt),
    ToGuid(ToGuidOpt),
}

/// Convert GUIDs to ImmutableIDs.
#[derive(Debug, Parser)]
pub struct ToImmutableIdOpt {
    /// GUIDs to convert. Read from stdin, one per line, if omitted.
    #[clap(value_name = "GUID")]
    pub values: Vec<String>,

    #[clap(flatten)]
    pub input: InputOpt,

    #[clap(flatten)]
    pub output: OutputOpt,
}

/// Convert ImmutableIDs to GUIDs.
#[derive(Debug, Parser)]
pub struct ToGuidOpt {
    /// ImmutableIDs to convert. Read from stdin, one per line, if omitted.
    #[clap(value_name = "IMMUTABLE_ID")]
    pub values: Vec<String>,

    /// GUID layout: d (hyphenated), n (no hyphens), b (braces) or p
    /// (parentheses).
    #[clap(long, action, default_value_t)]
    pub guid_format: GuidFormat,

    /// Print GUIDs with uppercase hex digits.
    #[clap(long, action)]
    pub uppercase: bool,

    #[clap(flatten)]
    pub input: InputOpt,

    #[clap(flatten)]
    pub output: OutputOpt,
}
