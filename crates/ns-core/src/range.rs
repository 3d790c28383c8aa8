//! Shared reachability capability.
//!
//! `ns-mac`, `ns-net`, and `ns-mqtt` all need the same answer to "can `a`
//! hear `b` right now" — physical distance versus PHY range. Rather than
//! each crate owning a slice of node state to compute it, the query is
//! expressed as a trait and implemented once by whoever owns the node
//! registry (`ns-engine::Store`). This is the read-only half of the
//! callback-driven coupling described for the MAC/network layers: the
//! capability is passed by shared reference, so it never conflicts with a
//! caller's own `&mut` access to its own state.
//!
//! Sleep state (a node's duty-cycle `awake` flag) governs energy draw only,
//! not reachability — two sleeping nodes within range of each other are
//! still in range.

use crate::NodeId;

/// Answers whether two nodes can currently exchange radio frames.
pub trait RangeCheck {
    /// `true` if `a` and `b` are within each other's PHY range.
    fn in_range(&self, a: NodeId, b: NodeId) -> bool;
}
