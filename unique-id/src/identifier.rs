//! The 128-bit identifier and its canonical text form.
//!
//! - Text form: lowercase `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` (36 chars)
//! - Byte form: the 16 bytes in RFC 4122 field order
//!
//! Parsing is strict: only the hyphenated layout is accepted, so
//! `parse(format(id)) == id` and nothing else sneaks through.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::{Uuid, Variant, Version};

use crate::errors::{Result, UniqueIdError};

/// Length of the hyphenated text form.
pub const TEXT_LEN: usize = 36;

/// Byte offsets of the group separators in the text form.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// A universally unique identifier.
///
/// Produced by [`crate::generate`]; equal inputs always give equal values.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UniqueId(Uuid);

impl UniqueId {
    /// The all-zero identifier.
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Wraps raw bytes without validation; any 16 bytes are a valid value.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Borrows the canonical byte form.
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }

    /// Copies out the canonical byte form.
    pub fn to_bytes(self) -> [u8; 16] {
        self.0.into_bytes()
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// The 4-bit version field (high nibble of byte 6).
    pub fn version(&self) -> usize {
        self.0.get_version_num()
    }

    /// True when the version is 5 (SHA-1 name-based) and the variant is RFC 4122.
    pub fn is_name_based(&self) -> bool {
        self.0.get_version() == Some(Version::Sha1) && self.0.get_variant() == Variant::RFC4122
    }

    /// The canonical lowercase hyphenated text form.
    pub fn to_hyphenated(&self) -> String {
        self.to_string()
    }

    /// Parses the canonical hyphenated text form.
    ///
    /// Hex digits may be either case. Braced, URN, and unhyphenated forms are
    /// rejected, as is any surrounding whitespace.
    ///
    /// # Errors
    /// Returns [`UniqueIdError::InvalidIdentifierFormat`] if `text` is not
    /// exactly 36 characters in the `8-4-4-4-12` layout.
    pub fn parse(text: &str) -> Result<Self> {
        let bytes = text.as_bytes();
        if bytes.len() != TEXT_LEN {
            return Err(UniqueIdError::invalid_format(text, "expected 36 characters"));
        }
        for (i, b) in bytes.iter().enumerate() {
            let ok = if HYPHENS.contains(&i) {
                *b == b'-'
            } else {
                b.is_ascii_hexdigit()
            };
            if !ok {
                return Err(UniqueIdError::invalid_format(
                    text,
                    "expected hex digit groups 8-4-4-4-12",
                ));
            }
        }

        Uuid::try_parse(text)
            .map(Self)
            .map_err(|_| UniqueIdError::invalid_format(text, "expected hex digit groups 8-4-4-4-12"))
    }

    pub(crate) fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl fmt::Debug for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UniqueId({})", self.0.hyphenated())
    }
}

impl FromStr for UniqueId {
    type Err = UniqueIdError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<[u8; 16]> for UniqueId {
    fn from(bytes: [u8; 16]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<UniqueId> for [u8; 16] {
    fn from(id: UniqueId) -> Self {
        id.to_bytes()
    }
}

impl Serialize for UniqueId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for UniqueId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
