//! `NodeRegistry` — dynamic node storage.
//!
//! Unlike a fixed-population Structure-of-Arrays store, nodes are added and
//! removed at arbitrary points during a run (`add_node`/`remove_node`), so
//! the registry is a sparse `Vec<Option<Node>>` indexed by `NodeId`, not a
//! dense SoA layout. IDs are assigned monotonically and never reused —
//! removing a node leaves a `None` hole rather than shifting every later ID.

use ns_core::{NodeId, Phy, Position, Role};

use crate::Node;

/// Owns every `Node` in the simulation.
#[derive(Default)]
pub struct NodeRegistry {
    nodes: Vec<Option<Node>>,
    next_id: u32,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            next_id: 1,
        }
    }

    /// Create and insert a new node, returning its assigned `NodeId`.
    pub fn add_node(&mut self, role: Role, phy: Phy, pos: Position) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.push(Some(Node::new(id, role, phy, pos)));
        id
    }

    /// Remove a node. Returns `true` if it existed.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        match self.nodes.get_mut(id.index().saturating_sub(1)) {
            Some(slot) if slot.as_ref().is_some_and(|n| n.id == id) => {
                *slot = None;
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes
            .get(id.index().checked_sub(1)?)
            .and_then(|s| s.as_ref())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes
            .get_mut(id.index().checked_sub(1)?)
            .and_then(|s| s.as_mut())
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// All live nodes, in ascending `NodeId` order.
    pub fn list_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter_map(|s| s.as_ref())
    }

    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every node and reset ID assignment. Used by `Store::reset`.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.next_id = 1;
    }
}
