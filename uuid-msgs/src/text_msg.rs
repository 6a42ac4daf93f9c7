//! String-payload identifier record.

use serde::{Deserialize, Serialize};
use tracing::debug;
use unique_id::{Discriminator, Result, UniqueId, generate};

/// Record holding the canonical text form of an identifier.
///
/// Uses more than twice the space of the byte form but stays readable in
/// logs and JSON dumps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UniqueIdentifier {
    /// Lowercase hyphenated identifier, e.g. `8e0b7d8a-c433-5c42-be2e-fbd97ddff9ac`.
    pub uuid: String,
}

impl UniqueIdentifier {
    /// Parses the payload back into an identifier.
    ///
    /// # Errors
    /// Returns [`unique_id::UniqueIdError::InvalidIdentifierFormat`] when the
    /// payload was not produced by this crate (or was tampered with).
    pub fn parse_id(&self) -> Result<UniqueId> {
        UniqueId::parse(&self.uuid)
    }
}

impl From<UniqueId> for UniqueIdentifier {
    fn from(id: UniqueId) -> Self {
        Self {
            uuid: id.to_hyphenated(),
        }
    }
}

/// Creates a [`UniqueIdentifier`] for `discriminator` within `namespace`.
///
/// # Errors
/// Propagates [`unique_id::UniqueIdError::InvalidDiscriminator`].
pub fn make_unique_identifier(
    namespace: &str,
    discriminator: impl Into<Discriminator>,
) -> Result<UniqueIdentifier> {
    let id = generate(namespace, discriminator)?;
    debug!(namespace, %id, "built UniqueIdentifier");
    Ok(id.into())
}
