//! The MAC-level packet.

use ns_core::NodeId;

/// A frame in flight on the channel.
///
/// `origin_id` and `src_id` exist as distinct fields precisely because
/// multi-hop forwarding rewrites one but not the other: `src_id` becomes
/// whichever node is the current transmitter at each hop, while `origin_id`
/// is set once at injection and never touched again. Duplicate detection
/// keys on `(origin_id, dst_id, seq)` — keying on `src_id` instead would
/// treat the same packet as a fresh arrival at every hop.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Packet {
    /// The node that originally injected this packet. Preserved across
    /// every forward.
    pub origin_id: NodeId,
    /// The node transmitting this packet on the current hop.
    pub src_id: NodeId,
    /// The final destination.
    pub dst_id: NodeId,
    /// The MAC-level next hop for this transmission. Equals `dst_id` for a
    /// direct (single-hop) send.
    pub next_hop_id: NodeId,
    pub size_bytes: u32,
    pub kind: String,
    pub seq: u64,
    pub t_created_s: f64,
}

impl Packet {
    /// Construct a new packet for direct transmission (`next_hop_id ==
    /// dst_id`). Multi-hop routing overwrites `next_hop_id` before the
    /// packet is enqueued.
    pub fn new(
        origin_id: NodeId,
        dst_id: NodeId,
        size_bytes: u32,
        kind: impl Into<String>,
        seq: u64,
        t_created_s: f64,
    ) -> Self {
        Self {
            origin_id,
            src_id: origin_id,
            dst_id,
            next_hop_id: dst_id,
            size_bytes,
            kind: kind.into(),
            seq,
            t_created_s,
        }
    }

    /// The dedup/delivery-tracking key for this packet.
    #[inline]
    pub fn dedup_key(&self) -> (NodeId, NodeId, u64) {
        (self.origin_id, self.dst_id, self.seq)
    }

    /// `true` once this packet has reached its final destination (as
    /// opposed to an intermediate forwarding hop).
    #[inline]
    pub fn is_final_hop(&self) -> bool {
        self.next_hop_id == self.dst_id
    }
}
