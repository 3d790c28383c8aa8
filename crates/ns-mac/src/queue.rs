//! Per-node MAC state: FIFO transmit queue plus contention-window backoff.

use std::collections::VecDeque;

use ns_core::SimRng;

use crate::Packet;

/// One node's view of the channel: its pending frames and its current
/// backoff countdown.
#[derive(Default)]
pub struct NodeMacState {
    pub queue: VecDeque<Packet>,
    /// Current contention window. `0` means the node hasn't drawn a backoff
    /// since it was last idle.
    pub cw: u32,
    /// Slots remaining before the head-of-queue packet is attempted.
    pub backoff_slots: u32,
    /// Retry count for the head-of-queue packet.
    pub retries: u32,
    /// `true` while this node's current head-of-queue packet is occupying
    /// the channel this slot, awaiting resolution.
    pub awaiting_ack: bool,
}

impl NodeMacState {
    /// Push `pkt` onto the queue. Draws a fresh backoff only if the node was
    /// previously idle (`cw == 0`) — once a node has transmitted at least
    /// once, later enqueues onto an idle queue inherit whatever `cw`/backoff
    /// its last resolution left behind.
    pub fn enqueue(&mut self, pkt: Packet, cw_min: u32, rng: &mut SimRng) -> bool {
        self.queue.push_back(pkt);
        if self.cw == 0 {
            self.cw = cw_min;
            self.backoff_slots = rng.gen_range(0..cw_min);
        }
        true
    }

    /// Resolve a failed transmission attempt: bump the retry count, drop the
    /// packet once `retry_limit` is exceeded, and draw a fresh backoff
    /// either way. Returns `true` if the packet was dropped.
    pub fn fail(&mut self, cw_min: u32, cw_max: u32, retry_limit: u32, rng: &mut SimRng) -> bool {
        self.retries += 1;
        let dropped = self.retries > retry_limit;
        if dropped {
            self.queue.pop_front();
            self.retries = 0;
            self.cw = cw_min;
        } else {
            self.cw = self.cw.saturating_mul(2).clamp(cw_min, cw_max);
        }
        self.backoff_slots = rng.gen_range(0..self.cw.max(1));
        self.awaiting_ack = false;
        dropped
    }

    /// Resolve a successful transmission: pop the delivered/forwarded packet
    /// and reset retry/cw/backoff state, drawing a fresh backoff for
    /// whatever is now at the head (if anything).
    pub fn succeed(&mut self, cw_min: u32, rng: &mut SimRng) -> Option<Packet> {
        let pkt = self.queue.pop_front();
        self.retries = 0;
        self.cw = cw_min;
        self.backoff_slots = rng.gen_range(0..cw_min.max(1));
        self.awaiting_ack = false;
        pkt
    }
}
