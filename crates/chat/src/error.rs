//! Chat completion errors

use thiserror::Error;

/// Errors from the chat completion client
#[derive(Debug, Error)]
pub enum ChatError {
    /// Configuration rejected at construction
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Transport-level failure
    #[error("Network error: {0}")]
    Network(String),

    /// Request timed out
    #[error("Chat request timeout after {0}ms")]
    Timeout(u64),

    /// Provider answered with a non-success status
    #[error("Request failed with status {code}: {body}")]
    Status {
        /// HTTP status code
        code: u16,
        /// Response body, if any
        body: String,
    },

    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Completion carried no usable choice
    #[error("Completion contained no content")]
    EmptyResponse,
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(30000)
        } else {
            Self::Network(err.to_string())
        }
    }
}
