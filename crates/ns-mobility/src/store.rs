//! `MobilityStore` — per-node movement state and RNG, sparse over the node
//! population (only mobile nodes have an entry).

use std::collections::HashMap;

use ns_core::{NodeId, NodeRng, Position, WorldBounds};

use crate::model::MobilityState;
use crate::Mobility;

struct Entry {
    state: MobilityState,
    rng: NodeRng,
}

/// Owns movement state for every mobile node.
///
/// Stationary nodes never get an entry — `advance` is simply never called
/// for them.
pub struct MobilityStore {
    entries: HashMap<NodeId, Entry>,
    bounds: WorldBounds,
    seed: u64,
}

impl MobilityStore {
    pub fn new(bounds: WorldBounds, seed: u64) -> Self {
        Self {
            entries: HashMap::new(),
            bounds,
            seed,
        }
    }

    /// Register `node` as mobile under `model`, seeding its RNG from the
    /// store's global seed mixed with its node ID (see `ns_core::NodeRng`).
    pub fn register(&mut self, node: NodeId, pos: Position, model: &dyn Mobility) {
        let mut rng = NodeRng::new(self.seed, node);
        let state = model.init_state(pos, self.bounds, &mut rng);
        self.entries.insert(node, Entry { state, rng });
    }

    pub fn unregister(&mut self, node: NodeId) {
        self.entries.remove(&node);
    }

    pub fn is_mobile(&self, node: NodeId) -> bool {
        self.entries.contains_key(&node)
    }

    /// Advance `node` by `dt_s` seconds under `model`, returning its new
    /// position. Returns `pos` unchanged (and does nothing) if `node` was
    /// never registered.
    pub fn advance(
        &mut self,
        node: NodeId,
        model: &dyn Mobility,
        pos: Position,
        dt_s: f32,
        speed_mps: f32,
    ) -> Position {
        let Some(entry) = self.entries.get_mut(&node) else {
            return pos;
        };
        model.advance(&mut entry.state, pos, dt_s, speed_mps, self.bounds, &mut entry.rng)
    }
}
