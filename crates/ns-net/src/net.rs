//! Distance-vector route advertisement and lookup.

use std::collections::HashMap;

use ns_core::{NodeId, RangeCheck};

use crate::{NetConfig, RouteAdvertisement, RouteEntry, RoutingTable};

/// Owns every node's routing table and runs periodic advertisement rounds.
pub struct Net {
    config: NetConfig,
    tables: HashMap<NodeId, RoutingTable>,
    seq_counters: HashMap<NodeId, u64>,
    accum_s: f32,
}

impl Net {
    pub fn new(config: NetConfig) -> Self {
        Self {
            config,
            tables: HashMap::new(),
            seq_counters: HashMap::new(),
            accum_s: 0.0,
        }
    }

    pub fn add_node(&mut self, id: NodeId) {
        self.tables.entry(id).or_default();
        self.seq_counters.entry(id).or_insert(0);
    }

    /// Drops `id`'s own table and purges every other table's routes that
    /// were reached via `id` as next hop.
    pub fn remove_node(&mut self, id: NodeId) {
        self.tables.remove(&id);
        self.seq_counters.remove(&id);
        for table in self.tables.values_mut() {
            table.purge_next_hop(id);
        }
    }

    pub fn next_hop(&self, from: NodeId, dest: NodeId) -> Option<NodeId> {
        self.tables.get(&from)?.next_hop(dest)
    }

    pub fn routing_table(&self, id: NodeId) -> Option<&RoutingTable> {
        self.tables.get(&id)
    }

    pub fn routes(&self, id: NodeId) -> Vec<RouteEntry> {
        self.tables.get(&id).map_or_else(Vec::new, |t| t.iter().copied().collect())
    }

    pub fn all_routes(&self) -> HashMap<NodeId, Vec<RouteEntry>> {
        self.tables.iter().map(|(&id, t)| (id, t.iter().copied().collect())).collect()
    }

    /// Accumulate elapsed simulated time and run one advertisement round
    /// every time `advertisement_interval_s` has elapsed, possibly multiple
    /// rounds if `dt_s` is large relative to the interval.
    pub fn maybe_emit_round(&mut self, dt_s: f32, range: &dyn RangeCheck) {
        self.accum_s += dt_s;
        while self.accum_s >= self.config.advertisement_interval_s {
            self.accum_s -= self.config.advertisement_interval_s;
            self.run_round(range);
        }
    }

    fn next_seq(&mut self, id: NodeId) -> u64 {
        let seq = self.seq_counters.entry(id).or_insert(0);
        *seq += 1;
        *seq
    }

    fn run_round(&mut self, range: &dyn RangeCheck) {
        let ids: Vec<NodeId> = self.tables.keys().copied().collect();

        // Snapshot every node's advertisement against its table as it stood
        // at the start of the round, before any node in this round has
        // processed another's advertisement.
        let advertisements: Vec<RouteAdvertisement> = ids
            .iter()
            .map(|&src| {
                let routes = self.tables[&src].iter().map(|e| (e.dest, e.metric)).collect();
                let seq = self.next_seq(src);
                RouteAdvertisement { src, seq, routes }
            })
            .collect();

        for adv in &advertisements {
            for &receiver in &ids {
                if receiver == adv.src || !range.in_range(adv.src, receiver) {
                    continue;
                }
                self.process_route_advertisement(receiver, adv);
            }
        }
    }

    fn process_route_advertisement(&mut self, receiver: NodeId, adv: &RouteAdvertisement) {
        let table = self.tables.entry(receiver).or_default();

        table.try_install(RouteEntry { dest: adv.src, next_hop: adv.src, metric: 1, seq: adv.seq });

        for &(dest, metric) in &adv.routes {
            if dest == receiver {
                continue;
            }
            table.try_install(RouteEntry { dest, next_hop: adv.src, metric: metric + 1, seq: adv.seq });
        }
    }
}
