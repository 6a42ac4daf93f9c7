//! Unified error handling for `unique-id`.
//!
//! Only two things can go wrong: a text discriminator that is not an integer,
//! and identifier text that is not in the canonical hyphenated layout.
//! Hashing and formatting of valid input never fail.
//!
//! All messages include the prefix `[Unique ID]` to simplify attribution in logs.

use thiserror::Error;

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, UniqueIdError>;

/// Top-level error for the `unique-id` crate.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UniqueIdError {
    /// A text discriminator could not be parsed as a decimal integer.
    #[error("[Unique ID] invalid discriminator {value:?}: expected a decimal integer")]
    InvalidDiscriminator {
        /// The offending text, exactly as supplied by the caller.
        value: String,
    },

    /// Identifier text is not in the `8-4-4-4-12` lowercase/uppercase hex layout.
    #[error("[Unique ID] invalid identifier {input:?}: {reason}")]
    InvalidIdentifierFormat {
        /// The rejected input text.
        input: String,
        /// What was wrong with it (e.g. `expected 36 characters`).
        reason: &'static str,
    },
}

impl UniqueIdError {
    pub(crate) fn invalid_discriminator(value: impl Into<String>) -> Self {
        Self::InvalidDiscriminator {
            value: value.into(),
        }
    }

    pub(crate) fn invalid_format(input: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidIdentifierFormat {
            input: input.into(),
            reason,
        }
    }
}
