// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversion of sequences of inputs.
//!
//! Each direction comes in two flavours:
//!
//! - All-or-nothing ([`guids_to_immutable_ids`],
//!   [`immutable_ids_to_guids`]): every input is validated before any
//!   record is produced. The first invalid input fails the whole call.
//! - Item by item ([`each_guid_to_immutable_id`],
//!   [`each_immutable_id_to_guid`]): a lazy iterator yielding one `Result`
//!   per input, so that callers can skip or report invalid items.
//!
//! In both cases the output has one entry per input, in input order.

use crate::convert::ImmutableId;
use crate::error::InvalidInput;
use crate::guid::{format_guid, parse_guid, GuidFormat};
use uguid::Guid;

/// Result of converting a GUID to an ImmutableID.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuidRecord {
    /// The GUID, exactly as it was given.
    #[cfg_attr(feature = "serde", serde(rename = "GUID"))]
    pub guid: String,

    /// The computed ImmutableID.
    #[cfg_attr(feature = "serde", serde(rename = "ImmutableID"))]
    pub immutable_id: String,
}

impl GuidRecord {
    fn new(input: &str, guid: Guid) -> Self {
        let immutable_id = ImmutableId::new(guid).to_string();
        log::trace!("{input} -> {immutable_id}");
        Self {
            guid: input.into(),
            immutable_id,
        }
    }
}

/// Result of converting an ImmutableID to a GUID.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImmutableIdRecord {
    /// The ImmutableID, exactly as it was given.
    #[cfg_attr(feature = "serde", serde(rename = "ImmutableID"))]
    pub immutable_id: String,

    /// The computed GUID.
    #[cfg_attr(feature = "serde", serde(rename = "GUID"))]
    pub guid: String,
}

impl ImmutableIdRecord {
    fn new(input: &str, id: ImmutableId, format: GuidFormat, uppercase: bool) -> Self {
        let guid = format_guid(id.guid(), format, uppercase);
        log::trace!("{input} -> {guid}");
        Self {
            immutable_id: input.into(),
            guid,
        }
    }
}

/// Convert every GUID in `inputs`, or none of them.
///
/// # Errors
///
/// Returns the [`InvalidInput`] of the first malformed GUID. No record is
/// produced in that case.
pub fn guids_to_immutable_ids<I>(inputs: I) -> Result<Vec<GuidRecord>, InvalidInput>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let parsed = inputs
        .into_iter()
        .map(|input| parse_guid(input.as_ref()).map(|guid| (input, guid)))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("converting {} GUIDs", parsed.len());
    Ok(parsed
        .iter()
        .map(|(input, guid)| GuidRecord::new(input.as_ref(), *guid))
        .collect())
}

/// Convert every ImmutableID in `inputs`, or none of them.
///
/// GUIDs are rendered in `format`, with uppercase hex digits if `uppercase`
/// is set.
///
/// # Errors
///
/// Returns the [`InvalidInput`] of the first ImmutableID that is not valid
/// Base64 or does not decode to 16 bytes. No record is produced in that
/// case.
pub fn immutable_ids_to_guids<I>(
    inputs: I,
    format: GuidFormat,
    uppercase: bool,
) -> Result<Vec<ImmutableIdRecord>, InvalidInput>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let parsed = inputs
        .into_iter()
        .map(|input| input.as_ref().parse::<ImmutableId>().map(|id| (input, id)))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("converting {} ImmutableIDs", parsed.len());
    Ok(parsed
        .iter()
        .map(|(input, id)| ImmutableIdRecord::new(input.as_ref(), *id, format, uppercase))
        .collect())
}

/// Lazily convert each GUID in `inputs`.
pub fn each_guid_to_immutable_id<I>(
    inputs: I,
) -> impl Iterator<Item = Result<GuidRecord, InvalidInput>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    inputs.into_iter().map(|input| {
        let input = input.as_ref();
        parse_guid(input).map(|guid| GuidRecord::new(input, guid))
    })
}

/// Lazily convert each ImmutableID in `inputs`, rendering GUIDs as
/// [`immutable_ids_to_guids`] does.
pub fn each_immutable_id_to_guid<I>(
    inputs: I,
    format: GuidFormat,
    uppercase: bool,
) -> impl Iterator<Item = Result<ImmutableIdRecord, InvalidInput>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    inputs.into_iter().map(move |input| {
        let input = input.as_ref();
        input
            .parse::<ImmutableId>()
            .map(|id| ImmutableIdRecord::new(input, id, format, uppercase))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Reason;

    const GUIDS: [&str; 3] = [
        "b0406578-caec-d544-ba80-cfd0ec0797d7",
        "{12345678-9abc-def0-1234-56789abcdef0}",
        "00000000000000000000000000000000",
    ];
    const IDS: [&str; 3] = [
        "eGVAsOzKRNW6gM/Q7AeX1w==",
        "eFY0Erya8N4SNFZ4mrze8A==",
        "AAAAAAAAAAAAAAAAAAAAAA==",
    ];

    #[test]
    fn test_guids_to_immutable_ids_order() {
        let records = guids_to_immutable_ids(GUIDS).unwrap();
        assert_eq!(records.len(), GUIDS.len());
        for ((record, guid), id) in records.iter().zip(GUIDS).zip(IDS) {
            assert_eq!(record.guid, guid);
            assert_eq!(record.immutable_id, id);
        }
    }

    #[test]
    fn test_guids_to_immutable_ids_all_or_nothing() {
        let err = guids_to_immutable_ids([GUIDS[0], "not-a-guid", GUIDS[1]]).unwrap_err();
        assert_eq!(err.input(), "not-a-guid");

        assert_eq!(
            guids_to_immutable_ids(Vec::<String>::new()).unwrap(),
            Vec::new()
        );
    }

    #[test]
    fn test_immutable_ids_to_guids() {
        let records = immutable_ids_to_guids(IDS, GuidFormat::Hyphenated, false).unwrap();
        let guids: Vec<_> = records.iter().map(|r| r.guid.as_str()).collect();
        assert_eq!(
            guids,
            [
                "b0406578-caec-d544-ba80-cfd0ec0797d7",
                "12345678-9abc-def0-1234-56789abcdef0",
                "00000000-0000-0000-0000-000000000000",
            ]
        );
        assert_eq!(records[1].immutable_id, IDS[1]);

        let records = immutable_ids_to_guids([IDS[1]], GuidFormat::Braced, false).unwrap();
        assert_eq!(records[0].guid, "{12345678-9abc-def0-1234-56789abcdef0}");
    }

    #[test]
    fn test_immutable_ids_to_guids_uppercase() {
        let records = immutable_ids_to_guids([IDS[0]], GuidFormat::Braced, true).unwrap();
        assert_eq!(records[0].guid, "{B0406578-CAEC-D544-BA80-CFD0EC0797D7}");
        assert_eq!(records[0].immutable_id, IDS[0]);

        let results: Vec<_> =
            each_immutable_id_to_guid([IDS[1]], GuidFormat::Simple, true).collect();
        assert_eq!(
            results[0].as_ref().unwrap().guid,
            "123456789ABCDEF0123456789ABCDEF0"
        );
    }

    #[test]
    fn test_immutable_ids_to_guids_all_or_nothing() {
        let err =
            immutable_ids_to_guids([IDS[0], "YWJjZA=="], GuidFormat::default(), false)
                .unwrap_err();
        assert_eq!(err.reason(), &Reason::Length(4));
    }

    #[test]
    fn test_each_reports_per_item() {
        let results: Vec<_> = each_guid_to_immutable_id(["not-a-guid", GUIDS[0]]).collect();
        assert!(results[0].is_err());
        assert_eq!(results[1].as_ref().unwrap().immutable_id, IDS[0]);

        let results: Vec<_> = each_immutable_id_to_guid(
            vec![String::from(IDS[2]), String::from("!!!not-base64!!!")],
            GuidFormat::Simple,
            false,
        )
        .collect();
        assert_eq!(
            results[0].as_ref().unwrap().guid,
            "00000000000000000000000000000000"
        );
        assert!(matches!(
            results[1].as_ref().unwrap_err().reason(),
            Reason::Base64(_)
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_record_field_names() {
        let record = GuidRecord {
            guid: GUIDS[0].into(),
            immutable_id: IDS[0].into(),
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"GUID":"b0406578-caec-d544-ba80-cfd0ec0797d7","ImmutableID":"eGVAsOzKRNW6gM/Q7AeX1w=="}"#
        );

        let record = ImmutableIdRecord {
            immutable_id: IDS[0].into(),
            guid: GUIDS[0].into(),
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"ImmutableID":"eGVAsOzKRNW6gM/Q7AeX1w==","GUID":"b0406578-caec-d544-ba80-cfd0ec0797d7"}"#
        );
    }
}
