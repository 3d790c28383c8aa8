//! Network layer configuration.

/// Fixed-at-construction routing parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetConfig {
    /// How often (in simulated seconds) every node emits a route advertisement.
    pub advertisement_interval_s: f32,
}

impl Default for NetConfig {
    fn default() -> Self {
        Self { advertisement_interval_s: 2.0 }
    }
}
