//! Request executor and response parser shared by every endpoint.
//!
//! # Design
//! `ServerPilot` holds an immutable `ClientConfig` and a `Transport`, and no
//! per-call state. Each call is split in three: `build_request` turns a
//! path, verb and parameter struct into an `HttpRequest`; the transport runs
//! it; `parse_response` turns the `HttpResponse` into an `ApiResponse` or an
//! `ApiError`. Build and parse are pure, so they are public for callers that
//! want to run the I/O themselves.

use serde::Serialize;
use serde_json::Value;

use crate::config::{ClientConfig, USER_AGENT};
use crate::error::{default_message, ApiError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::ApiResponse;

/// Synchronous client for the ServerPilot API.
#[derive(Debug, Clone)]
pub struct ServerPilot<T = UreqTransport> {
    config: ClientConfig,
    transport: T,
}

impl ServerPilot<UreqTransport> {
    /// Client using the ureq transport with the configured timeout.
    pub fn new(config: ClientConfig) -> Self {
        let transport = UreqTransport::new(config.timeout());
        Self { config, transport }
    }

    /// Client from a `{"id": .., "key": .., "decode": ..}` mapping.
    pub fn from_value(value: Value) -> Result<Self, ApiError> {
        Ok(Self::new(ClientConfig::from_value(value)?))
    }

    /// Client from `SERVERPILOT_*` environment variables.
    pub fn from_env() -> Result<Self, ApiError> {
        Ok(Self::new(ClientConfig::from_env()?))
    }
}

impl<T> ServerPilot<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build the request for `path` relative to the configured endpoint.
    ///
    /// `params` is only serialized for `Post`; a `Post` without params sends
    /// `{}`. `Get` and `Delete` never carry a body.
    pub fn build_request<P: Serialize + ?Sized>(
        &self,
        path: &str,
        params: Option<&P>,
        method: HttpMethod,
    ) -> Result<HttpRequest, ApiError> {
        let mut headers = vec![
            ("User-Agent".to_string(), USER_AGENT.to_string()),
            ("Authorization".to_string(), self.config.basic_auth()),
        ];
        let body = match method {
            HttpMethod::Post => {
                headers.push(("Content-Type".to_string(), "application/json".to_string()));
                let body = match params {
                    Some(params) => serde_json::to_string(params)
                        .map_err(|e| ApiError::Serialization(e.to_string()))?,
                    None => "{}".to_string(),
                };
                Some(body)
            }
            HttpMethod::Get | HttpMethod::Delete => None,
        };
        Ok(HttpRequest {
            method,
            url: format!("{}{}", self.config.endpoint(), path.trim_start_matches('/')),
            headers,
            body,
        })
    }

    /// Interpret a response: 200 yields the payload, anything else an error.
    pub fn parse_response(&self, response: HttpResponse) -> Result<ApiResponse, ApiError> {
        if response.status != 200 {
            return Err(service_error(&response));
        }
        if !self.config.decode() {
            return Ok(ApiResponse::Raw(response.body));
        }
        if response.body.trim().is_empty() {
            return Ok(ApiResponse::Json(Value::Null));
        }
        serde_json::from_str(&response.body)
            .map(ApiResponse::Json)
            .map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

impl<T: Transport> ServerPilot<T> {
    /// Perform one round trip: build, execute, parse.
    pub fn send_request<P: Serialize + ?Sized>(
        &self,
        path: &str,
        params: Option<&P>,
        method: HttpMethod,
    ) -> Result<ApiResponse, ApiError> {
        let request = self.build_request(path, params, method)?;
        tracing::debug!(method = method.as_str(), url = %request.url, "sending request");
        let response = self.transport.execute(&request)?;
        tracing::debug!(status = response.status, bytes = response.body.len(), "received response");
        self.parse_response(response)
    }

    pub(crate) fn get(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.send_request::<()>(path, None, HttpMethod::Get)
    }

    pub(crate) fn post<P: Serialize + ?Sized>(&self, path: &str, params: &P) -> Result<ApiResponse, ApiError> {
        self.send_request(path, Some(params), HttpMethod::Post)
    }

    pub(crate) fn delete(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.send_request::<()>(path, None, HttpMethod::Delete)
    }
}

/// Build the `Service` error for a non-200 response.
///
/// Uses `error.message` from the body when it is there, otherwise the fixed
/// message for the status code.
pub fn service_error(response: &HttpResponse) -> ApiError {
    let message = serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|body| body.get("error")?.get("message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| default_message(response.status).to_string());
    ApiError::Service {
        code: response.status,
        message,
    }
}
