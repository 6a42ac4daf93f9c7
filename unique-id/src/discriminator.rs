//! Optional per-entity discriminator.
//!
//! A discriminator is either absent, an integer, or text that must parse as
//! an integer. `Absent` and `Integer(0)` are distinct cases and hash to
//! different identifiers.
//!
//! Text is not bounded by any machine integer type: `"18446744073709551616"`
//! is as valid as `"42"`.

use crate::errors::{Result, UniqueIdError};

/// The value that distinguishes identifiers within one namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Discriminator {
    /// No discriminator: the namespace alone is the canonical key.
    #[default]
    Absent,
    /// An integer id (e.g. an OpenStreetMap node id).
    Integer(i128),
    /// Text that must convert losslessly to an integer, e.g. `"0001"`.
    Text(String),
}

impl Discriminator {
    /// Resolves the discriminator to the canonical decimal form of its
    /// integer value, if any.
    ///
    /// # Errors
    /// Returns [`UniqueIdError::InvalidDiscriminator`] when a `Text` value is
    /// not a decimal integer.
    pub fn resolve(&self) -> Result<Option<String>> {
        match self {
            Self::Absent => Ok(None),
            Self::Integer(v) => Ok(Some(v.to_string())),
            Self::Text(s) => canonical_decimal(s).map(Some),
        }
    }

    /// True for [`Discriminator::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Normalizes integer text to base 10 with no leading zeros, `-` only for
/// negative values.
///
/// Surrounding whitespace is ignored; the rest must be an optional sign
/// followed by at least one ASCII decimal digit.
fn canonical_decimal(text: &str) -> Result<String> {
    let trimmed = text.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UniqueIdError::invalid_discriminator(text));
    }

    let significant = digits.trim_start_matches('0');
    Ok(match (significant.is_empty(), negative) {
        (true, _) => "0".to_owned(),
        (false, true) => format!("-{significant}"),
        (false, false) => significant.to_owned(),
    })
}

impl From<i128> for Discriminator {
    fn from(value: i128) -> Self {
        Self::Integer(value)
    }
}

impl From<i64> for Discriminator {
    fn from(value: i64) -> Self {
        Self::Integer(i128::from(value))
    }
}

impl From<u64> for Discriminator {
    fn from(value: u64) -> Self {
        Self::Integer(i128::from(value))
    }
}

impl From<i32> for Discriminator {
    fn from(value: i32) -> Self {
        Self::Integer(i128::from(value))
    }
}

impl From<u32> for Discriminator {
    fn from(value: u32) -> Self {
        Self::Integer(i128::from(value))
    }
}

impl From<&str> for Discriminator {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Discriminator {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T> From<Option<T>> for Discriminator
where
    T: Into<Discriminator>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(d: impl Into<Discriminator>) -> Result<Option<String>> {
        d.into().resolve()
    }

    #[test]
    fn absent_and_zero_stay_distinct() {
        assert!(Discriminator::default().is_absent());
        assert!(!Discriminator::Integer(0).is_absent());
        assert_eq!(Discriminator::Absent.resolve(), Ok(None));
        assert_eq!(Discriminator::Integer(0).resolve(), Ok(Some("0".into())));
        assert_eq!(Discriminator::from(None::<i64>), Discriminator::Absent);
        assert_eq!(Discriminator::from(Some(0_i64)), Discriminator::Integer(0));
    }

    #[test]
    fn text_follows_integer_conversion_rules() {
        let ok = [
            ("42", "42"),
            ("0001", "1"),
            ("-17", "-17"),
            ("-0017", "-17"),
            ("+8", "8"),
            (" 12\n", "12"),
            ("\u{a0}12", "12"),
            ("0", "0"),
            ("-0", "0"),
            ("+000", "0"),
            ("9223372036854775807", "9223372036854775807"),
            ("-9223372036854775808", "-9223372036854775808"),
        ];
        for (text, want) in ok {
            assert_eq!(resolved(text), Ok(Some(want.to_string())), "{text:?}");
        }
    }

    #[test]
    fn text_is_not_bounded_by_machine_integers() {
        let ok = [
            ("9223372036854775808", "9223372036854775808"),
            ("-9223372036854775809", "-9223372036854775809"),
            ("000340282366920938463463374607431768211456", "340282366920938463463374607431768211456"),
        ];
        for (text, want) in ok {
            assert_eq!(resolved(text), Ok(Some(want.to_string())), "{text:?}");
        }
    }

    #[test]
    fn wide_integers_render_in_decimal() {
        assert_eq!(resolved(u64::MAX), Ok(Some("18446744073709551615".into())));
        assert_eq!(resolved(i128::MIN), Ok(Some(i128::MIN.to_string())));
        assert_eq!(resolved(-5_i64), resolved("-05"));
    }

    #[test]
    fn non_integer_text_is_rejected_with_its_value() {
        for text in ["abc", "", "   ", "1 2", "1_000", "0x10", "1.5", "+-1", "-", "--1"] {
            let err = resolved(text).unwrap_err();
            assert_eq!(
                err,
                UniqueIdError::InvalidDiscriminator {
                    value: text.to_string()
                }
            );
        }
    }

    #[test]
    fn unicode_digits_are_not_decimal() {
        assert!(resolved("١٢").is_err());
    }
}
