use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the seamline workspace.
///
/// The segmentation entry points are total over well-formed input, so the only
/// failures are rejected arguments and explicitly requested series validation.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SeamlineError {
    /// Invalid input argument (e.g. a negative ingestion delay).
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Issues with the shape of a series (non-positive interval, unordered timestamps).
    #[error("data issue: {0}")]
    Data(String),
}

impl SeamlineError {
    /// Helper: build an `InvalidArg` error from a message.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `Data` error from a message.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }
}
