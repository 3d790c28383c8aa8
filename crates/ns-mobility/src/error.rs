use thiserror::Error;

use ns_core::NodeId;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("node {0} is not registered with a mobility model")]
    NotRegistered(NodeId),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
