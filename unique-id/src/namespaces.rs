//! Well-known namespaces.
//!
//! OpenStreetMap entities append their integer id to one of the `OSM_*`
//! prefixes. Route-segment graph edges have no integer id: the namespace
//! itself names the generating package and both end points.

/// OpenStreetMap nodes.
pub const OSM_NODE: &str = "http://openstreetmap.org/node/";
/// OpenStreetMap ways.
pub const OSM_WAY: &str = "http://openstreetmap.org/way/";
/// OpenStreetMap relations.
pub const OSM_RELATION: &str = "http://openstreetmap.org/relation/";

/// Namespace for a directed graph edge from `start` to `end`.
///
/// `start` and `end` are usually the hyphenated identifiers of the two way
/// points; swapping them names a different edge.
pub fn route_segment(package: &str, start: &str, end: &str) -> String {
    format!("http://ros.org/wiki/{package}/{start}/{end}")
}
