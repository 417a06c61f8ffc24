//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Error type for catalog API calls
///
/// Transport failures and non-success HTTP statuses arrive through the same
/// type; callers tell them apart only by message text.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request never produced a response
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Local file could not be read for upload
    #[error("File error: {0}")]
    File(#[from] std::io::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
