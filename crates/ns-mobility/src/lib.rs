//! `ns-mobility` — pluggable node movement models.
//!
//! # Crate layout
//!
//! | Module             | Contents                                           |
//! |---------------------|----------------------------------------------------|
//! | [`model`]           | `Mobility` trait, `MobilityState`                  |
//! | [`random_waypoint`] | `RandomWaypoint`                                   |
//! | [`grid`]            | `Grid`                                             |
//! | [`store`]           | `MobilityStore` — per-node runtime state + RNG     |
//! | [`error`]           | `MobilityError`, `MobilityResult<T>`               |
//!
//! # Design
//!
//! Movement state (current waypoint/pause timer, or grid direction) only
//! exists for mobile nodes, so it lives in a sparse [`store::MobilityStore`]
//! keyed by `NodeId`, not as a field on every `ns_node::Node`. Each mobile
//! node owns its own deterministic RNG stream (`ns_core::NodeRng`, seeded by
//! node ID), so mobility is reproducible regardless of tick ordering.

pub mod error;
pub mod grid;
pub mod model;
pub mod random_waypoint;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{MobilityError, MobilityResult};
pub use grid::Grid;
pub use model::{Mobility, MobilityState};
pub use random_waypoint::RandomWaypoint;
pub use store::MobilityStore;
