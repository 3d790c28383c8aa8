//! MAC-layer errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MacError {
    #[error("invalid MAC config: {0}")]
    Config(String),
}

pub type MacResult<T> = Result<T, MacError>;
