// SPDX-License-Identifier: MIT OR Apache-2.0

use base64::DecodeError;
use core::fmt::{self, Display, Formatter};
use uguid::GuidFromStrError;

/// Malformed GUID text, as reported by the GUID parser.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuidSyntaxError(pub(crate) GuidFromStrError);

impl GuidSyntaxError {
    /// The underlying parser error.
    #[must_use]
    pub const fn kind(&self) -> &GuidFromStrError {
        &self.0
    }
}

impl Display for GuidSyntaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GuidSyntaxError {}

/// Why an input was rejected.
///
/// The `Display` text is a short summary; details of a parse failure are
/// available through [`Error::source`](std::error::Error::source) on
/// [`InvalidInput`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Reason {
    /// The GUID was wrapped in unbalanced braces or parentheses.
    Wrapper,

    /// The GUID text is not 32 hex digits in one of the accepted layouts.
    Guid(GuidSyntaxError),

    /// The ImmutableID is not valid standard Base64.
    Base64(DecodeError),

    /// The ImmutableID decoded to this many bytes instead of 16.
    Length(usize),
}

impl Display for Reason {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wrapper => write!(f, "unbalanced braces or parentheses"),
            Self::Guid(_) => write!(f, "malformed GUID"),
            Self::Base64(_) => write!(f, "invalid base64"),
            Self::Length(len) => write!(f, "decoded to {len} bytes, expected 16"),
        }
    }
}

/// Error returned when an input cannot be converted.
///
/// This is the only error kind of the crate. It keeps a copy of the
/// offending input so that a failure in the middle of a batch can be
/// traced back to the item that caused it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvalidInput {
    input: String,
    reason: Reason,
}

impl InvalidInput {
    pub(crate) fn new(input: &str, reason: Reason) -> Self {
        Self {
            input: input.into(),
            reason,
        }
    }

    /// The rejected input, exactly as it was given.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Why the input was rejected.
    #[must_use]
    pub const fn reason(&self) -> &Reason {
        &self.reason
    }
}

impl Display for InvalidInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "invalid input {:?}: {}", self.input, self.reason)
    }
}

impl std::error::Error for InvalidInput {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.reason {
            Reason::Guid(err) => Some(err),
            Reason::Base64(err) => Some(err),
            Reason::Wrapper | Reason::Length(_) => None,
        }
    }
}
