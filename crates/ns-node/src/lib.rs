//! `ns-node` — node registry and physical/energy duty-cycle model.
//!
//! # Crate layout
//!
//! | Module       | Contents                                             |
//! |--------------|--------------------------------------------------------|
//! | [`node`]     | `Node`, `MobileParams`                               |
//! | [`registry`] | `NodeRegistry` — dynamic, sparse node storage         |
//! | [`physical`] | duty-cycle/energy tick, range check                   |
//! | [`error`]    | `NodeError`, `NodeResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types.    |

pub mod error;
pub mod node;
pub mod physical;
pub mod registry;


pub use error::{NodeError, NodeResult};
pub use node::{MobileParams, Node};
pub use registry::NodeRegistry;
