//! Error types for the API clients

use thiserror::Error;

/// Result type alias for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while talking to the backend
///
/// Non-2xx responses carry only the status code; the response body is not
/// parsed for structured error details.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection, timeout or request construction failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status
    #[error("API returned error status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// Response body did not match the expected record
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Filters could not be encoded as a query string
    #[error("Failed to encode query: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// Configured base URL is not usable
    #[error("Invalid API base URL '{url}': {message}")]
    InvalidUrl {
        /// Rejected URL
        url: String,
        /// Parser message
        message: String,
    },

    /// A token was configured but is blank
    #[error("API token is blank; remove it or provide a value")]
    MissingToken,
}

impl ApiError {
    /// HTTP status code, when the backend answered
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }
}
