//! Flow Error Types
//!
//! The taxonomy the flows operate on: transport-level failures reported by
//! the API collaborator, plus failures detected locally before any request.

use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Failure reported by the API collaborator
///
/// The network/server distinction is not currently shown to the user (both
/// collapse into one error toast) but is preserved as a discriminant.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never produced a response (DNS, connect, timeout, ...)
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("server responded with status {status}")]
    Server { status: StatusCode, body: Value },
}

impl ApiError {
    /// Status code of a server failure, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Network(_) => None,
            ApiError::Server { status, .. } => Some(*status),
        }
    }
}

/// Failure of a single submission cycle
#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Reset token missing from the current URL (detected before any request)
    #[error("reset token missing from the current url")]
    MissingToken,
}
