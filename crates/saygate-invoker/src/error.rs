//! Invocation error types.

use std::time::Duration;
use thiserror::Error;

/// Everything that can go wrong between building a payload and receiving
/// the function's result.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("failed to encode invocation payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("lambda invoke failed: {0}")]
    Service(String),

    #[error("function {function} raised {kind}")]
    Function {
        function: String,
        kind: String,
        payload: Vec<u8>,
    },

    #[error("invocation timed out after {0:?}")]
    Timeout(Duration),
}

pub type InvokeResult<T> = Result<T, InvokeError>;
