//! MAC-layer counters.

/// Channel-wide MAC counters. Everything derived (PDR, average RTT) is
/// computed lazily from these rather than tracked incrementally.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MacStats {
    pub offered: u64,
    pub delivered: u64,
    /// Packets popped after exceeding `retry_limit` (collision/loss/
    /// out-of-range attempts, not capacity rejections — see `queue_drops`).
    pub dropped: u64,
    /// Packets rejected at `enqueue` because the sender's queue was already
    /// at `queue_capacity`. Distinct from `dropped`: this never touches the
    /// channel at all.
    pub queue_drops: u64,
    /// Failed transmission attempts, whether or not they led to a drop.
    pub retries: u64,
    /// Slots where more than one node attempted to transmit at once. The
    /// per-slot arbitration in [`crate::Mac::run_slot`] admits at most one
    /// new transmitter per slot, so under normal operation this never
    /// leaves zero — see the module docs on `run_slot`.
    pub collisions: u64,
    pub duplicates: u64,
    /// Sum of `size_bytes` over unique final-hop deliveries.
    pub bytes_ok: u64,
    pub rtt_ms_total: f64,
    pub rtt_samples: u64,
}

impl MacStats {
    /// Packet delivery ratio over everything that ever left a sender's
    /// queue (delivered or retry-limit dropped). Capacity rejections never
    /// entered the channel, so they don't factor in.
    pub fn pdr(&self) -> f64 {
        let sent = self.delivered + self.dropped;
        if sent == 0 {
            0.0
        } else {
            self.delivered as f64 / sent as f64
        }
    }

    pub fn avg_rtt_ms(&self) -> f64 {
        if self.rtt_samples == 0 {
            0.0
        } else {
            self.rtt_ms_total / self.rtt_samples as f64
        }
    }

    pub fn record_rtt(&mut self, rtt_ms: f64) {
        self.rtt_ms_total += rtt_ms;
        self.rtt_samples += 1;
    }
}
