//! Externally visible metrics, computed lazily from per-layer counters.
//!
//! Nothing here is bookkept independently — `Metrics::compute` just reads
//! `MacStats`/`BrokerStats` at call time, per the engine's error-handling
//! design: every layer keeps its own counters and the view is assembled on
//! demand.

use ns_mac::MacStats;

/// The `{now, pdr, avg_latency_ms, delivered, duplicates}` view over the
/// whole simulation.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    pub now_s: f64,
    pub pdr: f64,
    pub avg_latency_ms: f64,
    pub delivered: u64,
    pub duplicates: u64,
    pub offered: u64,
    pub dropped: u64,
    pub retries: u64,
    pub collisions: u64,
}

impl Metrics {
    pub fn compute(now_s: f64, mac: &MacStats) -> Self {
        Self {
            now_s,
            pdr: mac.pdr(),
            avg_latency_ms: mac.avg_rtt_ms(),
            delivered: mac.delivered,
            duplicates: mac.duplicates,
            offered: mac.offered,
            dropped: mac.dropped,
            retries: mac.retries,
            collisions: mac.collisions,
        }
    }
}
