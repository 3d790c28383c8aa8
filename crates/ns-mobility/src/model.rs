//! The `Mobility` trait — the pluggable movement-model extension point.

use ns_core::{NodeRng, Position, WorldBounds};

/// Per-node runtime state owned by whichever `Mobility` model placed the
/// node. A node is always driven by exactly one model for its lifetime, so
/// the variant a `MobilityStore` entry holds always matches the model it was
/// created by.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MobilityState {
    RandomWaypoint {
        target: Position,
        /// Seconds remaining in the current pause at `target`. `0.0` means
        /// "not pausing, keep heading toward target".
        pause_remaining_s: f32,
    },
    Grid {
        /// Unit-ish direction vector; one of the four cardinal directions.
        dir: (f32, f32),
    },
}

/// A pluggable node movement model.
///
/// Implementors own no per-node state themselves — all of it lives in the
/// `MobilityState` they hand back from [`init_state`][Self::init_state] and
/// mutate in [`advance`][Self::advance]. This keeps models `Send + Sync`
/// value types that `ns-engine` can hold by trait object.
pub trait Mobility: Send + Sync {
    /// Produce the initial movement state for a node placed at `pos`.
    fn init_state(&self, pos: Position, bounds: WorldBounds, rng: &mut NodeRng) -> MobilityState;

    /// Advance `state` by `dt_s` seconds and return the node's new position.
    fn advance(
        &self,
        state: &mut MobilityState,
        pos: Position,
        dt_s: f32,
        speed_mps: f32,
        bounds: WorldBounds,
        rng: &mut NodeRng,
    ) -> Position;
}
