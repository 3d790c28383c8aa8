//! The `Mac` engine — slotted CSMA/CA arbitration across every node.
//!
//! # Per-slot arbitration is single-winner
//!
//! Each slot, nodes are scanned in registration order (ascending `NodeId` —
//! IDs are assigned monotonically and never reused, so this is a stable
//! total order). The first node found ready (non-empty queue, zero backoff,
//! not already awaiting resolution) claims the channel for the slot; every
//! node scanned after that simply continues without even decrementing its
//! backoff, exactly as if the channel were physically busy. One consequence
//! of this arbitration is that `MacStats::collisions` never actually
//! increments in normal operation — a slot never has more than one
//! transmitter to begin with. `collision_losses` stays honored in the
//! resolution step regardless, in case a future caller carries
//! `awaiting_ack` state across slot boundaries in a way that produces one.
//!
//! # The forward-callback problem
//!
//! The natural re-entrant design ("on successful delivery to an
//! intermediate hop, immediately call back into the owning store to
//! re-enqueue the packet toward its next hop") doesn't type-check in Rust:
//! the store owns the `Mac`, so a callback into the store from inside
//! `Mac::run_slot` would need simultaneous `&mut Mac` and `&mut Store`.
//! Instead `run_slot` returns every packet that needs forwarding in
//! `SlotOutcome::to_forward`; the caller resolves the next hop (via
//! `ns-net`) and calls `enqueue` again once `run_slot` has returned.

use std::collections::{BTreeMap, HashSet};

use ns_core::{NodeId, RangeCheck, SimRng};

use crate::queue::NodeMacState;
use crate::{MacConfig, MacStats, Packet};

/// What happened during one MAC slot.
#[derive(Default)]
pub struct SlotOutcome {
    /// Packets that reached their final destination this slot (successful
    /// deliveries and duplicate re-deliveries alike — callers distinguish
    /// via `MacStats::duplicates` if they care).
    pub delivered: Vec<Packet>,
    /// Packets that reached an intermediate hop and need their next hop
    /// resolved and re-enqueued by the caller.
    pub to_forward: Vec<Packet>,
}

/// Slotted CSMA/CA channel arbitration.
pub struct Mac {
    pub config: MacConfig,
    nodes: BTreeMap<NodeId, NodeMacState>,
    delivered_keys: HashSet<(NodeId, NodeId, u64)>,
    rng: SimRng,
    slot_index: u64,
    stats: MacStats,
}

impl Mac {
    pub fn new(config: MacConfig, seed: u64) -> Self {
        Self {
            config,
            nodes: BTreeMap::new(),
            delivered_keys: HashSet::new(),
            rng: SimRng::new(seed),
            slot_index: 0,
            stats: MacStats::default(),
        }
    }

    pub fn add_node(&mut self, id: NodeId) {
        self.nodes.entry(id).or_default();
    }

    pub fn remove_node(&mut self, id: NodeId) {
        self.nodes.remove(&id);
    }

    pub fn queue_len(&self, node: NodeId) -> usize {
        self.nodes.get(&node).map_or(0, |s| s.queue.len())
    }

    pub fn stats(&self) -> MacStats {
        self.stats
    }

    /// Enqueue `pkt` for transmission by `pkt.src_id`.
    ///
    /// Returns `false` (and drops the packet, bumping `stats.queue_drops`)
    /// if the node's queue is already at `queue_capacity` — capacity is
    /// signaled by return value, never by panic or `Result`, per this
    /// crate's error-handling contract.
    pub fn enqueue(&mut self, pkt: Packet) -> bool {
        self.stats.offered += 1;
        let cw_min = self.config.cw_min;
        let capacity = self.config.queue_capacity;
        let state = self.nodes.entry(pkt.src_id).or_default();
        if state.queue.len() >= capacity {
            self.stats.queue_drops += 1;
            return false;
        }
        state.enqueue(pkt, cw_min, &mut self.rng);
        true
    }

    /// Resolve one MAC slot: scan nodes in registration order, let the
    /// first ready node claim the channel, and resolve loss/delivery for
    /// whatever it was carrying.
    pub fn run_slot(&mut self, range: &dyn RangeCheck) -> SlotOutcome {
        self.slot_index += 1;
        let mut outcome = SlotOutcome::default();

        let mut channel_busy = false;
        let mut transmitter = None;
        for (&id, state) in self.nodes.iter_mut() {
            if state.awaiting_ack || state.queue.is_empty() {
                continue;
            }
            if channel_busy {
                continue;
            }
            if state.backoff_slots > 0 {
                state.backoff_slots -= 1;
                continue;
            }
            state.awaiting_ack = true;
            channel_busy = true;
            transmitter = Some(id);
        }

        let Some(node) = transmitter else {
            return outcome;
        };

        // A slot only ever has one transmitter under this arbitration (see
        // module docs), so this is always `false` in practice.
        let collision = false;
        if collision {
            self.stats.collisions += 1;
        }

        let pkt = self.nodes[&node].queue.front().cloned().expect("transmitter implies non-empty queue");

        let out_of_range = !range.in_range(pkt.src_id, pkt.next_hop_id);
        let rand_loss = self.rng.gen_bool(self.config.base_loss_prob);
        let failed = (collision && self.config.collision_losses) || rand_loss || out_of_range;

        let cw_min = self.config.cw_min;
        let cw_max = self.config.cw_max;
        let retry_limit = self.config.retry_limit;
        let state = self.nodes.get_mut(&node).expect("node present");

        if failed {
            self.stats.retries += 1;
            let dropped = state.fail(cw_min, cw_max, retry_limit, &mut self.rng);
            if dropped {
                self.stats.dropped += 1;
            }
            return outcome;
        }

        let delivered_pkt = state.succeed(cw_min, &mut self.rng).expect("head was present");
        let now_ms = self.slot_index as f64 * self.config.slot_ms as f64;

        if delivered_pkt.is_final_hop() {
            let key = delivered_pkt.dedup_key();
            if self.delivered_keys.insert(key) {
                self.stats.delivered += 1;
                self.stats.bytes_ok += delivered_pkt.size_bytes as u64;
                let rtt_ms = (now_ms - delivered_pkt.t_created_s * 1000.0).max(0.0);
                self.stats.record_rtt(rtt_ms);
            } else {
                self.stats.duplicates += 1;
            }
            outcome.delivered.push(delivered_pkt);
        } else {
            outcome.to_forward.push(delivered_pkt);
        }

        outcome
    }
}
