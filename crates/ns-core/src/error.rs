//! Framework error type.
//!
//! Sub-crates define their own error enums for their own fallible operations
//! and convert into `CoreError` via `From` impls where useful; both patterns
//! are used across this workspace depending on which keeps error sites clean.

use thiserror::Error;

use crate::NodeId;

/// The top-level error type for `ns-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `ns-core` consumers.
pub type CoreResult<T> = Result<T, CoreError>;
