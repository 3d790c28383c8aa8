//! `ns-engine` — ties mobility, MAC, routing, and MQTT into one simulation
//! tick loop.
//!
//! # Store/Scheduler split
//!
//! [`store::Store`] owns every piece of domain state (nodes, MAC queues,
//! routing tables, MQTT brokers/clients) and exposes the CRUD/traffic/
//! routing/MQTT operations a caller drives the simulation with.
//! [`scheduler::Scheduler`] owns a `Store` plus a clock and drives it one
//! tick at a time, in the fixed order described on `Scheduler::tick`.
//!
//! Splitting it this way keeps `Store` usable on its own (e.g. from tests
//! that want to call `enqueue`/`publish` without advancing time) while
//! `Scheduler` owns nothing but orchestration.
//!
//! | Module        | Contents                                           |
//! |---------------|--------------------------------------------------------|
//! | [`store`]     | `Store` — node/MAC/routing/MQTT state               |
//! | [`scheduler`] | `Scheduler` — the tick loop                         |
//! | [`metrics`]   | `Metrics` — the externally visible metrics view     |
//! | [`observer`]  | `SchedulerObserver`, `NoopObserver`                  |
//! | [`error`]     | `EngineError`, `EngineResult`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|----------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to public data types, cascading |
//! |         | into every `ns-*` dependency.                                  |

pub mod error;
pub mod metrics;
pub mod observer;
pub mod scheduler;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{EngineError, EngineResult};
pub use metrics::Metrics;
pub use observer::{NoopObserver, SchedulerObserver};
pub use scheduler::Scheduler;
pub use store::Store;
