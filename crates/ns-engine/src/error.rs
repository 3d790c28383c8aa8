//! Errors surfaced at the `Store`/`Scheduler` boundary.
//!
//! Per-layer transient outcomes (MAC retries, MQTT give-up) are never
//! errors — they're counters, per each sub-crate's own contract. What's
//! left here is semantic failures: operations referring to a node or
//! broker id that doesn't exist.

use thiserror::Error;

use ns_core::NodeId;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("node {0} is not a broker")]
    NotABroker(NodeId),

    #[error("no active broker is configured")]
    NoActiveBroker,
}

pub type EngineResult<T> = Result<T, EngineError>;
