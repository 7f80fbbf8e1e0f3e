// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::{InvalidInput, Reason};
use crate::guid::parse_guid;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use core::fmt::{self, Display, Formatter};
use core::str::FromStr;
use uguid::Guid;

/// The Base64 "ImmutableID" form of a [`Guid`].
///
/// The encoded bytes are the GUID's mixed-endian binary layout (see
/// [`Guid::to_bytes`]), rendered with the standard Base64 alphabet and `=`
/// padding. The result is always 24 characters long.
///
/// `Display` produces the Base64 text; `FromStr` accepts it back.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ImmutableId(Guid);

impl ImmutableId {
    /// Length of the Base64 text in bytes.
    pub const LEN: usize = 24;

    /// Create the ImmutableID of `guid`.
    #[must_use]
    pub const fn new(guid: Guid) -> Self {
        Self(guid)
    }

    /// The GUID this ImmutableID encodes.
    #[must_use]
    pub const fn guid(self) -> Guid {
        self.0
    }
}

impl From<Guid> for ImmutableId {
    fn from(guid: Guid) -> Self {
        Self::new(guid)
    }
}

impl From<ImmutableId> for Guid {
    fn from(id: ImmutableId) -> Self {
        id.guid()
    }
}

impl Display for ImmutableId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; Self::LEN];
        // 16 bytes always encode to exactly 24 characters.
        let written = STANDARD
            .encode_slice(self.0.to_bytes(), &mut buf)
            .map_err(|_| fmt::Error)?;
        let s = core::str::from_utf8(&buf[..written]).map_err(|_| fmt::Error)?;
        f.write_str(s)
    }
}

impl FromStr for ImmutableId {
    type Err = InvalidInput;

    /// Decode an ImmutableID.
    ///
    /// The input must be canonical standard Base64, with nothing around
    /// it, and decode to exactly 16 bytes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = STANDARD
            .decode(s)
            .map_err(|err| InvalidInput::new(s, Reason::Base64(err)))?;
        let bytes: [u8; 16] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| InvalidInput::new(s, Reason::Length(bytes.len())))?;
        Ok(Self(Guid::from_bytes(bytes)))
    }
}

/// Convert a textual GUID to its ImmutableID.
///
/// Any layout accepted by [`parse_guid`] may be used.
///
/// # Errors
///
/// Returns [`InvalidInput`] if `guid` is not a well-formed GUID.
pub fn guid_to_immutable_id(guid: &str) -> Result<String, InvalidInput> {
    let id = ImmutableId::new(parse_guid(guid)?);
    log::trace!("{guid} -> {id}");
    Ok(id.to_string())
}

/// Convert an ImmutableID back to the GUID it encodes.
///
/// # Errors
///
/// Returns [`InvalidInput`] if `immutable_id` is not valid Base64, or does
/// not decode to exactly 16 bytes.
pub fn immutable_id_to_guid(immutable_id: &str) -> Result<Guid, InvalidInput> {
    let guid = immutable_id.parse::<ImmutableId>()?.guid();
    log::trace!("{immutable_id} -> {guid}");
    Ok(guid)
}
