//! Message records that carry a [`UniqueId`] across a serialization boundary.
//!
//! Two payload shapes are provided:
//! - [`UniqueIdentifier`]: the human-readable 36-character text form
//! - [`UniqueIdMsg`]: the compact 16-byte form
//!
//! Both derive `serde` traits so they fit whatever envelope the surrounding
//! system uses.

mod bytes_msg;
mod text_msg;

pub use bytes_msg::{UniqueIdMsg, from_msg, make_unique_id, to_msg, to_string};
pub use text_msg::{UniqueIdentifier, make_unique_identifier};

pub use unique_id::{Discriminator, Result, UniqueId, UniqueIdError};
