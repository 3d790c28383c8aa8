//! `ns-mac` — slotted CSMA/CA channel arbitration.
//!
//! A single shared channel per simulation: every node with a nonempty
//! queue contends for the same slots. Per slot, at most one node (the
//! first found ready, scanned in registration order) gets to attempt a
//! transmission — see `mac::Mac::run_slot` for why this makes collisions
//! structurally rare. This is a whole-channel model, not spatial reuse.
//!
//! | Module     | Contents                                  |
//! |------------|---------------------------------------------|
//! | [`packet`] | `Packet` — the frame in flight              |
//! | [`config`] | `MacConfig`                                 |
//! | [`queue`]  | `NodeMacState` — per-node queue + backoff   |
//! | [`stats`]  | `MacStats`                                  |
//! | [`mac`]    | `Mac`, `SlotOutcome` — the arbitration engine|
//! | [`error`]  | `MacError`, `MacResult`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to public data types. |

pub mod config;
pub mod error;
pub mod mac;
pub mod packet;
pub mod queue;
pub mod stats;

#[cfg(test)]
mod tests;

pub use config::MacConfig;
pub use error::{MacError, MacResult};
pub use mac::{Mac, SlotOutcome};
pub use packet::Packet;
pub use queue::NodeMacState;
pub use stats::MacStats;
