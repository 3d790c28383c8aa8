//! `ns-core` — foundational types shared by the network simulation engine.
//!
//! This crate is a dependency of every other `ns-*` crate. It intentionally
//! has no `ns-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                            |
//! |-------------|------------------------------------------------------|
//! | [`ids`]     | `NodeId`                                            |
//! | [`position`]| `Position`, `WorldBounds`                           |
//! | [`time`]    | `Tick`, `SimClock`, `SimConfig`                     |
//! | [`rng`]     | `NodeRng` (per-node), `SimRng` (global)             |
//! | [`phy`]     | `Phy`, `PhyProfile` (radio range/energy constants)  |
//! | [`role`]    | `Role` (sensor/subscriber/mobile/broker)            |
//! | [`range`]   | `RangeCheck` — shared reachability capability       |
//! | [`error`]   | `CoreError`, `CoreResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod phy;
pub mod position;
pub mod range;
pub mod rng;
pub mod role;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::NodeId;
pub use phy::{Phy, PhyProfile};
pub use position::{Position, WorldBounds};
pub use range::RangeCheck;
pub use rng::{NodeRng, SimRng};
pub use role::Role;
pub use time::{SimClock, SimConfig, Tick};
