//! Client configuration.
//!
//! # Design
//! `ClientConfig` is built once and never mutated afterwards; the client
//! only reads from it, which is what makes a single `ServerPilot` safe to
//! share between threads. The credential checks live in one place
//! (`ClientConfig::new`) and every other constructor funnels into it.

use std::fmt;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ConfigError;

/// Versioned REST root of the ServerPilot API.
pub const DEFAULT_ENDPOINT: &str = "https://api.serverpilot.io/v1/";

/// Sent as `User-Agent` on every request.
pub const USER_AGENT: &str = concat!("ServerPilot-Rust/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_API_ID: &str = "SERVERPILOT_API_ID";
pub const ENV_API_KEY: &str = "SERVERPILOT_API_KEY";
pub const ENV_DECODE: &str = "SERVERPILOT_DECODE";
pub const ENV_ENDPOINT: &str = "SERVERPILOT_ENDPOINT";

/// Credentials and behavior switches for a `ServerPilot` client.
#[derive(Clone)]
pub struct ClientConfig {
    api_id: String,
    api_key: String,
    decode: bool,
    endpoint: String,
    timeout: Duration,
}

/// Shape of the `{id, key, decode}` configuration mapping.
#[derive(Deserialize)]
struct RawConfig {
    id: Option<String>,
    key: Option<String>,
    decode: Option<bool>,
}

impl ClientConfig {
    /// Build a configuration with decoding on and the default endpoint.
    ///
    /// Blank credentials are treated the same as missing ones.
    pub fn new(api_id: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_id = api_id.into();
        let api_key = api_key.into();
        if api_id.trim().is_empty() || api_key.trim().is_empty() {
            return Err(ConfigError::MissingCredentials);
        }
        Ok(Self {
            api_id,
            api_key,
            decode: true,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Build a configuration from a `{"id": .., "key": .., "decode": ..}`
    /// mapping. Unknown keys are ignored.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        match &value {
            Value::Null => return Err(ConfigError::MissingConfig),
            Value::Object(map) if map.is_empty() => return Err(ConfigError::MissingConfig),
            Value::Object(_) => {}
            other => {
                return Err(ConfigError::Invalid(format!(
                    "expected a mapping, got {}",
                    json_kind(other)
                )))
            }
        }
        let raw: RawConfig =
            serde_json::from_value(value).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        let (Some(id), Some(key)) = (raw.id, raw.key) else {
            return Err(ConfigError::MissingCredentials);
        };
        Ok(Self::new(id, key)?.with_decode(raw.decode.unwrap_or(true)))
    }

    /// Build a configuration from `SERVERPILOT_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let (Some(id), Some(key)) = (lookup(ENV_API_ID), lookup(ENV_API_KEY)) else {
            return Err(ConfigError::MissingCredentials);
        };
        let mut config = Self::new(id, key)?;
        if let Some(raw) = lookup(ENV_DECODE) {
            config = config.with_decode(parse_flag(&raw)?);
        }
        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            config = config.with_endpoint(&endpoint);
        }
        Ok(config)
    }

    /// Return decoded JSON (`true`) or the raw body text (`false`) on success.
    pub fn with_decode(mut self, decode: bool) -> Self {
        self.decode = decode;
        self
    }

    /// Point the client at another API root, e.g. a local mock server.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = format!("{}/", endpoint.trim_end_matches('/'));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn api_id(&self) -> &str {
        &self.api_id
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn decode(&self) -> bool {
        self.decode
    }

    /// API root, always ending in `/`.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Value of the `Authorization` header.
    pub fn basic_auth(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.api_id, self.api_key));
        format!("Basic {token}")
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_id", &self.api_id)
            .field("api_key", &"<redacted>")
            .field("decode", &self.decode)
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn parse_flag(raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Env(format!("{ENV_DECODE}={other}"))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
