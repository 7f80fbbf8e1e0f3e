// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversion between textual GUIDs and their "ImmutableID" form.
//!
//! An ImmutableID is the Base64 encoding of a GUID's raw 16-byte binary
//! layout. Identity providers use it as the hard-match key for objects
//! synchronized from a local directory, where the same object is known by
//! its textual GUID.
//!
//! # Byte order
//!
//! The binary layout is the mixed-endian one used by Windows and UEFI: the
//! first three fields (4, 2 and 2 bytes) are little endian, the remaining
//! eight bytes are stored in display order. Encoding the hex digits as a
//! plain big-endian byte dump gives a different, incompatible ImmutableID.
//!
//! ```
//! use immutable_id::{guid_to_immutable_id, immutable_id_to_guid};
//!
//! let id = guid_to_immutable_id("b0406578-caec-d544-ba80-cfd0ec0797d7").unwrap();
//! assert_eq!(id, "eGVAsOzKRNW6gM/Q7AeX1w==");
//!
//! let guid = immutable_id_to_guid(&id).unwrap();
//! assert_eq!(guid.to_string(), "b0406578-caec-d544-ba80-cfd0ec0797d7");
//! ```
//!
//! # Crate organisation
//!
//! - [`parse_guid`] and [`format_guid`] handle the textual GUID forms
//!   described by [`GuidFormat`].
//! - [`ImmutableId`] is the typed Base64 form of a [`Guid`].
//! - [`guid_to_immutable_id`] and [`immutable_id_to_guid`] are the two
//!   string-level conversions.
//! - The [`batch`] module converts sequences of inputs, either
//!   all-or-nothing or item by item.
//!
//! Every failure is reported as [`InvalidInput`].
//!
//! ## Optional crate features
//!
//! - `serde`: Implement `Serialize` and `Deserialize` for the record types
//!   in [`batch`], using the field names `GUID` and `ImmutableID`.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_docs, unused)]
#![deny(clippy::all)]
#![deny(clippy::must_use_candidate)]

pub mod batch;
mod convert;
mod error;
mod guid;

pub use self::batch::{GuidRecord, ImmutableIdRecord};
pub use self::convert::{guid_to_immutable_id, immutable_id_to_guid, ImmutableId};
pub use self::error::{GuidSyntaxError, InvalidInput, Reason};
pub use self::guid::{format_guid, parse_guid, GuidFormat, UnknownGuidFormat};
pub use uguid::Guid;
