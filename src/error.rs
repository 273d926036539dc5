//! Error types for the Bleutrade client library.

use thiserror::Error;

/// The main error type for all Bleutrade client operations.
///
/// The variants form a closed set so callers can tell a local mistake
/// (configuration, validation) from a remote one (transport, protocol, API).
#[derive(Error, Debug)]
pub enum BleutradeError {
    /// A private endpoint was called on a client without credentials.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A caller-supplied enumerated parameter is outside its allowed set.
    #[error("Invalid {field} '{value}': expected one of {allowed}")]
    Validation {
        /// Query parameter the value was meant for (e.g. "type").
        field: &'static str,
        /// The rejected value.
        value: String,
        /// Comma-separated list of accepted values.
        allowed: String,
    },

    /// The HTTP layer could not produce a usable response.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest_middleware::Error),

    /// The response body is not JSON or lacks the expected envelope.
    #[error("Invalid response: {0}")]
    Protocol(String),

    /// Bleutrade answered with `success: false`.
    #[error("Bleutrade API error: {0}")]
    Api(ApiError),
}

impl From<reqwest::Error> for BleutradeError {
    fn from(err: reqwest::Error) -> Self {
        BleutradeError::Transport(reqwest_middleware::Error::Reqwest(err))
    }
}

impl BleutradeError {
    /// Error returned when a private call is attempted without key and secret.
    pub fn missing_credentials() -> Self {
        BleutradeError::Configuration("API key and secret are required".to_string())
    }

    /// Build a validation error for `field` listing the accepted values.
    pub fn invalid_value(field: &'static str, value: impl Into<String>, allowed: &[&str]) -> Self {
        BleutradeError::Validation {
            field,
            value: value.into(),
            allowed: allowed.join(", "),
        }
    }

    /// The remote message, if this is an API error.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            BleutradeError::Api(api) => Some(&api.message),
            _ => None,
        }
    }
}

/// Failure reported by the Bleutrade API in the response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The envelope's `message` field.
    pub message: String,
}

impl ApiError {
    /// Create a new API error from the envelope message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.message.is_empty() {
            write!(f, "request failed without a message")
        } else {
            write!(f, "{}", self.message)
        }
    }
}
