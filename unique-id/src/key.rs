//! Canonical key builder: the exact string fed to the hash.

use crate::discriminator::Discriminator;
use crate::errors::Result;

/// Builds the canonical key for `namespace` and `discriminator`.
///
/// The decimal form of the discriminator is appended with no separator;
/// an absent discriminator leaves the namespace unchanged.
///
/// # Errors
/// Returns [`crate::UniqueIdError::InvalidDiscriminator`] if a text
/// discriminator is not an integer.
pub fn canonical_key(namespace: &str, discriminator: &Discriminator) -> Result<String> {
    Ok(match discriminator.resolve()? {
        None => namespace.to_owned(),
        Some(id) => format!("{namespace}{id}"),
    })
}
