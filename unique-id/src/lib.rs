//! Deterministic identifiers for real-world entities.
//!
//! Map nodes, ways, relations, and graph edges get RFC 4122 version-5
//! (SHA-1, name-based) identifiers derived from a URL namespace and an
//! optional integer id. The same `(namespace, id)` pair always yields the
//! same identifier, on any machine, with no stored state:
//!
//! ```text
//! namespace + decimal(id)  ->  SHA-1(NAMESPACE_URL || key)[..16]  ->  set version/variant
//! ```
//!
//! For example, OpenStreetMap entities use
//! `generate(OSM_NODE, node_id)`, `generate(OSM_WAY, way_id)` and
//! `generate(OSM_RELATION, rel_id)`; see [`namespaces`].
//!
//! Every function here is pure and safe to call from any thread.

mod discriminator;
mod errors;
mod generate;
mod identifier;
mod key;

pub mod namespaces;
pub mod telemetry;

pub use discriminator::Discriminator;
pub use errors::{Result, UniqueIdError};
pub use generate::{from_key, from_url, generate};
pub use identifier::{TEXT_LEN, UniqueId};
pub use key::canonical_key;
