//! Route entries and advertisements.

use ns_core::NodeId;

/// One installed route: "to reach `dest`, send to `next_hop`."
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteEntry {
    pub dest: NodeId,
    pub next_hop: NodeId,
    /// Hop count, always >= 1.
    pub metric: u32,
    /// Freshness counter, monotonic within `dest`'s own advertisements.
    pub seq: u64,
}

/// What a node broadcasts each advertisement round: its own sequence number
/// and every `(dest, metric)` pair it currently knows about.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteAdvertisement {
    pub src: NodeId,
    pub seq: u64,
    pub routes: Vec<(NodeId, u32)>,
}
