//! Network-layer errors.

use thiserror::Error;

use ns_core::NodeId;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetError {
    #[error("node {0} has no routing table")]
    NotFound(NodeId),
}

pub type NetResult<T> = Result<T, NetError>;
