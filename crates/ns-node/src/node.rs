//! The `Node` record.

use ns_core::{NodeId, Phy, Position, Role};

/// Parameters for a node that moves under a mobility model. Stationary
/// nodes (most sensors) leave this `None`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MobileParams {
    /// Metres per second.
    pub speed_mps: f32,
}

/// A single node in the simulated network.
///
/// `Node` is a plain data record — runtime state that only some nodes need
/// (mobility waypoints, MAC queues) lives in the owning subsystem's own
/// store, keyed by `NodeId`, not inline here.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id: NodeId,
    pub role: Role,
    pub phy: Phy,
    pub pos: Position,
    pub energy: f32,
    pub awake: bool,
    pub sleep_ratio: f32,
    pub is_broker: bool,
    pub mobile: Option<MobileParams>,
}

impl Node {
    pub fn new(id: NodeId, role: Role, phy: Phy, pos: Position) -> Self {
        let is_broker = matches!(role, Role::Broker);
        Self {
            id,
            role,
            phy,
            pos,
            energy: 100.0,
            awake: true,
            sleep_ratio: 0.2,
            is_broker,
            mobile: None,
        }
    }

    pub fn with_sleep_ratio(mut self, sleep_ratio: f32) -> Self {
        self.sleep_ratio = sleep_ratio;
        self
    }

    pub fn with_mobile(mut self, speed_mps: f32) -> Self {
        self.mobile = Some(MobileParams { speed_mps });
        self
    }
}
