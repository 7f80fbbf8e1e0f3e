// SPDX-License-Identifier: MIT OR Apache-2.0

mod input;
mod opt;
mod output;

use anyhow::{bail, Context, Result};
use clap::Parser;
use immutable_id::batch::{
    each_guid_to_immutable_id, each_immutable_id_to_guid, guids_to_immutable_ids,
    immutable_ids_to_guids,
};
use immutable_id::InvalidInput;
use opt::{Action, Opt, ToGuidOpt, ToImmutableIdOpt};
use std::io::{self, BufRead, Write};

/// Keep the records that converted, logging the inputs that didn't.
///
/// Returns the records and the number of failures.
fn skip_invalid<T>(results: impl Iterator<Item = Result<T, InvalidInput>>) -> (Vec<T>, usize) {
    let mut failed = 0;
    let records = results
        .enumerate()
        .filter_map(|(index, result)| match result {
            Ok(record) => Some(record),
            Err(err) => {
                log::error!("value {}: {err}", index + 1);
                failed += 1;
                None
            }
        })
        .collect();
    (records, failed)
}

/// Fail after the output was written if some values had to be skipped.
fn check_failures(failed: usize, total: usize) -> Result<()> {
    if failed > 0 {
        bail!("{failed} of {total} values could not be converted");
    }
    Ok(())
}

fn to_immutable_id<R: BufRead, W: Write>(
    opt: &ToImmutableIdOpt,
    reader: R,
    writer: &mut W,
) -> Result<()> {
    let values = input::collect_values(&opt.values, reader)?;

    if opt.input.keep_going {
        let (records, failed) = skip_invalid(each_guid_to_immutable_id(&values));
        output::write_records(writer, &records, opt.output.output)?;
        check_failures(failed, values.len())
    } else {
        let records = guids_to_immutable_ids(&values).context("no GUIDs were converted")?;
        output::write_records(writer, &records, opt.output.output)
    }
}

fn to_guid<R: BufRead, W: Write>(opt: &ToGuidOpt, reader: R, writer: &mut W) -> Result<()> {
    let values = input::collect_values(&opt.values, reader)?;

    if opt.input.keep_going {
        let (records, failed) = skip_invalid(each_immutable_id_to_guid(
            &values,
            opt.guid_format,
            opt.uppercase,
        ));
        output::write_records(writer, &records, opt.output.output)?;
        check_failures(failed, values.len())
    } else {
        let records = immutable_ids_to_guids(&values, opt.guid_format, opt.uppercase)
            .context("no ImmutableIDs were converted")?;
        output::write_records(writer, &records, opt.output.output)
    }
}

fn main() -> Result<()> {
    let opt = Opt::parse();

    env_logger::Builder::new()
        .filter_level(opt.verbosity.level_filter())
        .parse_default_env()
        .init();

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    match &opt.action {
        Action::ToImmutableId(to_id_opt) => to_immutable_id(to_id_opt, stdin, &mut stdout),
        Action::ToGuid(to_guid_opt) => to_guid(to_guid_opt, stdin, &mut stdout),
    }
}
