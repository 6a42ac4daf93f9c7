//! Name-based identifier generation.
//!
//! `SHA-1(NAMESPACE_URL || canonical_key)`, truncated to 16 bytes, with the
//! version nibble set to 5 and the RFC 4122 variant bits set to `10`.

use tracing::trace;
use uuid::Uuid;

use crate::discriminator::Discriminator;
use crate::errors::Result;
use crate::identifier::UniqueId;
use crate::key::canonical_key;

/// Generates the identifier for `discriminator` within `namespace`.
///
/// ```
/// use unique_id::{generate, namespaces::OSM_NODE};
///
/// let a = generate(OSM_NODE, 1).unwrap();
/// let b = generate(OSM_NODE, "0001").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "ef362ac8-9659-5481-b954-88e9b741c8f9");
/// ```
///
/// # Errors
/// Returns [`crate::UniqueIdError::InvalidDiscriminator`] when a text
/// discriminator is not an integer.
pub fn generate(namespace: &str, discriminator: impl Into<Discriminator>) -> Result<UniqueId> {
    let key = canonical_key(namespace, &discriminator.into())?;
    Ok(from_key(&key))
}

/// Hashes an already-built canonical key.
pub fn from_key(canonical_key: &str) -> UniqueId {
    let id = UniqueId::from_uuid(Uuid::new_v5(&Uuid::NAMESPACE_URL, canonical_key.as_bytes()));
    trace!(key = canonical_key, %id, "generated name-based id");
    id
}

/// Identifier for a URL with no discriminator.
#[inline]
pub fn from_url(url: &str) -> UniqueId {
    from_key(url)
}
