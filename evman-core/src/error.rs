//! Error types for evman operations.

use thiserror::Error;

/// Errors from the remote events API.
///
/// Transport failures, non-2xx statuses and undecodable bodies are all
/// collapsed into this one taxonomy at the client boundary; callers treat
/// every variant as the same "operation failed" outcome.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Server returned status {0}")]
    Status(u16),

    #[error("Could not decode response: {0}")]
    Decode(String),
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
