//! Compact 16-byte identifier record.

use serde::{Deserialize, Serialize};
use unique_id::{Discriminator, Result, UniqueId, generate};

/// Record holding the raw 16 identifier bytes.
///
/// `Default` is the nil identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UniqueIdMsg {
    pub uuid: [u8; 16],
}

impl From<UniqueId> for UniqueIdMsg {
    fn from(id: UniqueId) -> Self {
        to_msg(id)
    }
}

impl From<UniqueIdMsg> for UniqueId {
    fn from(msg: UniqueIdMsg) -> Self {
        from_msg(&msg)
    }
}

pub fn to_msg(id: UniqueId) -> UniqueIdMsg {
    UniqueIdMsg {
        uuid: id.to_bytes(),
    }
}

pub fn from_msg(msg: &UniqueIdMsg) -> UniqueId {
    UniqueId::from_bytes(msg.uuid)
}

/// Canonical text form of the identifier in `msg`.
pub fn to_string(msg: &UniqueIdMsg) -> String {
    from_msg(msg).to_hyphenated()
}

/// Creates a [`UniqueIdMsg`] for `discriminator` within `namespace`.
///
/// # Errors
/// Propagates [`unique_id::UniqueIdError::InvalidDiscriminator`].
pub fn make_unique_id(
    namespace: &str,
    discriminator: impl Into<Discriminator>,
) -> Result<UniqueIdMsg> {
    generate(namespace, discriminator).map(to_msg)
}
