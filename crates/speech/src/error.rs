//! Speech processing errors

use thiserror::Error;

/// Errors that can occur during speech synthesis or transcription
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Request input was rejected before any network activity
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Endpoint URL could not be constructed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Request body could not be serialized
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Transport-level failure (connection, protocol, aborted transfer)
    #[error("Network error: {0}")]
    Network(String),

    /// Timeout while waiting for the provider
    #[error("Speech request timeout after {0}ms")]
    Timeout(u64),

    /// Provider answered with a non-success HTTP status
    #[error("Request failed with status {code}: {body}")]
    Status {
        /// HTTP status code of the response
        code: u16,
        /// Response body text, empty if unreadable
        body: String,
    },

    /// Provider reported success but sent no audio
    #[error("Response body was empty")]
    EmptyBody,

    /// Response bytes could not be decoded as text
    #[error("Response decoding failed: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for SpeechError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(30000)
        } else {
            Self::Network(err.to_string())
        }
    }
}
