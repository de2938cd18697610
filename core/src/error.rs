//! Error types for the ServerPilot API client.
//!
//! # Design
//! Configuration problems are only ever produced while building a
//! `ClientConfig`, so they live in their own `ConfigError` and are wrapped by
//! `ApiError::Config`. Every non-200 response becomes `ApiError::Service`
//! with the status code and a message, either the one ServerPilot sent in
//! `error.message` or the fixed default from `default_message`. Network
//! failures never reach the status check and land in `ApiError::Transport`.

use thiserror::Error;

/// Errors raised while building a `ClientConfig`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration mapping was empty.
    #[error("Missing config data")]
    MissingConfig,

    /// `id` or `key` was absent.
    #[error("You must provide API credentials")]
    MissingCredentials,

    /// The mapping had the wrong shape, e.g. a non-boolean `decode`.
    #[error("invalid config: {0}")]
    Invalid(String),

    /// An environment variable held a value that could not be parsed.
    #[error("invalid environment value: {0}")]
    Env(String),
}

/// Errors returned by `ServerPilot` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The service answered with a status other than 200.
    #[error("ServerPilot error {code}: {message}")]
    Service { code: u16, message: String },

    /// The request never produced an HTTP status (DNS, connect, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The request parameters could not be encoded as JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// A successful response body could not be decoded.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

impl ApiError {
    /// HTTP status carried by a `Service` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Service { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Fallback message for a status code when the body carries no
/// `error.message`.
pub fn default_message(status: u16) -> &'static str {
    match status {
        400 => "We couldn't understand your request. Typically missing a parameter or header.",
        401 => "Either no authentication credentials were provided or they are invalid.",
        402 => "Method is restricted to users on the Coach or Business plan.",
        403 => "Forbidden.",
        404 => "You requested a resource that does not exist.",
        409 => "Typically when trying creating a resource that already exists.",
        500 => "Something unexpected happened on ServerPilot's end.",
        _ => "Unknown error.",
    }
}
