use thiserror::Error;

use ns_core::NodeId;

#[derive(Debug, Error)]
pub enum NodeError {
    #[error("node {0} not found")]
    NotFound(NodeId),
}

pub type NodeResult<T> = Result<T, NodeError>;
