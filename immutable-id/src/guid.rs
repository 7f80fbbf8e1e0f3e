// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::{GuidSyntaxError, InvalidInput, Reason};
use core::fmt::{self, Display, Formatter};
use core::str::FromStr;
use uguid::Guid;

/// Textual layouts of a GUID.
///
/// Parsing with [`parse_guid`] accepts all of them; [`format_guid`] renders
/// the one that is asked for. The single-letter names are the format
/// specifiers commonly used for GUIDs on Windows.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum GuidFormat {
    /// `D`: `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`
    #[default]
    Hyphenated,

    /// `N`: 32 hex digits without separators.
    Simple,

    /// `B`: hyphenated, wrapped in braces.
    Braced,

    /// `P`: hyphenated, wrapped in parentheses.
    Parenthesized,
}

impl GuidFormat {
    fn all() -> &'static [Self] {
        &[
            Self::Hyphenated,
            Self::Simple,
            Self::Braced,
            Self::Parenthesized,
        ]
    }

    /// Format specifier letter, in lowercase.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hyphenated => "d",
            Self::Simple => "n",
            Self::Braced => "b",
            Self::Parenthesized => "p",
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Hyphenated => "hyphenated",
            Self::Simple => "simple",
            Self::Braced => "braced",
            Self::Parenthesized => "parenthesized",
        }
    }
}

impl Display for GuidFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GuidFormat {
    type Err = UnknownGuidFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|format| {
                format.as_str().eq_ignore_ascii_case(s) || format.name().eq_ignore_ascii_case(s)
            })
            .copied()
            .ok_or_else(|| UnknownGuidFormat(s.into()))
    }
}

/// Error returned by [`GuidFormat::from_str`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownGuidFormat(String);

impl Display for UnknownGuidFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown GUID format {:?} (expected one of d, n, b, p)",
            self.0
        )
    }
}

impl std::error::Error for UnknownGuidFormat {}

/// Byte ranges of the five hex groups in the hyphenated layout.
const GROUPS: [(usize, usize); 5] = [(0, 8), (9, 13), (14, 18), (19, 23), (24, 36)];

/// Parse a GUID in any of the [`GuidFormat`] layouts.
///
/// Surrounding whitespace is ignored and hex digits may be in either case.
///
/// # Errors
///
/// Returns [`InvalidInput`] if `s` is not a well-formed GUID.
pub fn parse_guid(s: &str) -> Result<Guid, InvalidInput> {
    let inner = strip_wrapper(s.trim()).ok_or_else(|| InvalidInput::new(s, Reason::Wrapper))?;

    let parsed = if inner.len() == 32 && inner.is_ascii() {
        // Simple layout: put the separators back so that there is only one
        // parser to trust.
        let mut buf = [b'-'; 36];
        let mut digits = inner.as_bytes();
        for (start, end) in GROUPS {
            let (group, rest) = digits.split_at(end - start);
            buf[start..end].copy_from_slice(group);
            digits = rest;
        }
        match core::str::from_utf8(&buf) {
            Ok(hyphenated) => Guid::try_parse(hyphenated),
            Err(_) => Guid::try_parse(inner),
        }
    } else {
        Guid::try_parse(inner)
    };

    parsed.map_err(|err| InvalidInput::new(s, Reason::Guid(GuidSyntaxError(err))))
}

/// Remove a matching pair of braces or parentheses.
///
/// Returns `None` if only one side of a pair is present, or if the sides
/// don't match.
fn strip_wrapper(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(b'{'), Some(b'}')) | (Some(b'('), Some(b')')) => Some(&s[1..s.len() - 1]),
        (Some(b'{' | b'('), _) | (_, Some(b'}' | b')')) => None,
        _ => Some(s),
    }
}

/// Render a GUID in the given layout.
///
/// Hex digits are lowercase unless `uppercase` is set.
#[must_use]
pub fn format_guid(guid: Guid, format: GuidFormat, uppercase: bool) -> String {
    let mut s = match format {
        GuidFormat::Hyphenated => guid.to_string(),
        GuidFormat::Simple => guid.to_string().replace('-', ""),
        GuidFormat::Braced => format!("{{{guid}}}"),
        GuidFormat::Parenthesized => format!("({guid})"),
    };
    if uppercase {
        s.make_ascii_uppercase();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    const HYPHENATED: &str = "12345678-9abc-def0-1234-56789abcdef0";

    #[test]
    fn test_parse_all_layouts() {
        let expected = Guid::try_parse(HYPHENATED).unwrap();

        for s in [
            HYPHENATED,
            "123456789abcdef0123456789abcdef0",
            "{12345678-9abc-def0-1234-56789abcdef0}",
            "(12345678-9abc-def0-1234-56789abcdef0)",
            "12345678-9ABC-DEF0-1234-56789ABCDEF0",
            "{123456789ABCDEF0123456789ABCDEF0}",
            "  12345678-9abc-def0-1234-56789abcdef0\n",
        ] {
            assert_eq!(parse_guid(s).unwrap(), expected, "input: {s:?}");
        }
    }

    #[test]
    fn test_parse_invalid() {
        for s in [
            "",
            "not-a-guid",
            "12345678-9abc-def0-1234-56789abcdef",
            "12345678-9abc-def0-1234-56789abcdef0a",
            "12345678x9abc-def0-1234-56789abcdef0",
            "1234567g-9abc-def0-1234-56789abcdef0",
            "123456789abcdef0123456789abcdef",
            "123456789abcdef0123456789abcdefg",
            "{}",
        ] {
            let err = parse_guid(s).unwrap_err();
            assert!(matches!(err.reason(), Reason::Guid(_)), "input: {s:?}");
            assert_eq!(err.input(), s);
        }
    }

    #[test]
    fn test_parse_unbalanced_wrapper() {
        for s in [
            "{12345678-9abc-def0-1234-56789abcdef0",
            "12345678-9abc-def0-1234-56789abcdef0)",
            "{12345678-9abc-def0-1234-56789abcdef0)",
            "{",
        ] {
            assert_eq!(parse_guid(s).unwrap_err().reason(), &Reason::Wrapper);
        }
    }

    #[test]
    fn test_format_guid() {
        let guid = Guid::try_parse(HYPHENATED).unwrap();
        assert_eq!(format_guid(guid, GuidFormat::Hyphenated, false), HYPHENATED);
        assert_eq!(
            format_guid(guid, GuidFormat::Simple, false),
            "123456789abcdef0123456789abcdef0"
        );
        assert_eq!(
            format_guid(guid, GuidFormat::Braced, false),
            "{12345678-9abc-def0-1234-56789abcdef0}"
        );
        assert_eq!(
            format_guid(guid, GuidFormat::Parenthesized, true),
            "(12345678-9ABC-DEF0-1234-56789ABCDEF0)"
        );

        // Every rendering parses back to the same value.
        for &format in GuidFormat::all() {
            for uppercase in [false, true] {
                assert_eq!(parse_guid(&format_guid(guid, format, uppercase)).unwrap(), guid);
            }
        }
    }

    #[test]
    fn test_guid_format_from_str() {
        assert_eq!(GuidFormat::from_str("d").unwrap(), GuidFormat::Hyphenated);
        assert_eq!(GuidFormat::from_str("N").unwrap(), GuidFormat::Simple);
        assert_eq!(GuidFormat::from_str("braced").unwrap(), GuidFormat::Braced);
        assert_eq!(
            GuidFormat::from_str("Parenthesized").unwrap(),
            GuidFormat::Parenthesized
        );
        assert_eq!(
            GuidFormat::from_str("x").unwrap_err(),
            UnknownGuidFormat("x".into())
        );
        assert_eq!(GuidFormat::default().to_string(), "d");
    }
}
